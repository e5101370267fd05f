//! Pagination window

/// One page worth of rows plus the numbers needed to describe it.
///
/// `first_index` and `last_index` are 1-based and inclusive, clamped to the
/// row count, so they read directly as "showing 21 to 25 of 25".
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<T> {
    rows: Vec<T>,
    page: usize,
    first_index: usize,
    last_index: usize,
    total_rows: usize,
    total_pages: usize,
}

impl<T> PageWindow<T> {
    /// Returns the rows on this page.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Consumes the window and returns the rows.
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Returns the requested page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the 1-based index of the first row shown.
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// Returns the 1-based index of the last row shown.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Returns the number of rows across all pages.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Returns the number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Number of pages needed for `count` rows, at least one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Cuts page `page` (1-based) out of `rows`.
///
/// Out-of-range pages, including page 0, produce an empty slice; keeping the
/// page in range is the caller's job. A `page_size` of 0 is read as 1.
///
/// # Example
///
/// ```
/// use datagrid_lib::view::paginate;
///
/// let rows: Vec<u32> = (1..=25).collect();
/// let window = paginate(&rows, 2, 20);
/// assert_eq!(window.rows(), &[21, 22, 23, 24, 25]);
/// assert_eq!((window.first_index(), window.last_index()), (21, 25));
/// assert_eq!(window.total_pages(), 2);
/// ```
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> PageWindow<T> {
    let page_size = page_size.max(1);
    let count = rows.len();
    let total_pages = total_pages(count, page_size);

    let (start, end) = match page.checked_sub(1) {
        Some(skip) => {
            let start = skip.saturating_mul(page_size).min(count);
            (start, start.saturating_add(page_size).min(count))
        }
        None => (0, 0),
    };

    PageWindow {
        rows: rows[start..end].to_vec(),
        page,
        first_index: if end > start { start + 1 } else { start.min(count) },
        last_index: end,
        total_rows: count,
        total_pages,
    }
}
