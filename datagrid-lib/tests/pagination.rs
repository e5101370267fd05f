use datagrid_lib::view::{clamp_page, paginate, total_pages};

fn numbers(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

#[test]
fn test_second_page_of_twenty_five() {
    let rows = numbers(25);
    let window = paginate(&rows, 2, 20);
    assert_eq!(window.len(), 5);
    assert_eq!(window.first_index(), 21);
    assert_eq!(window.last_index(), 25);
    assert_eq!(window.total_pages(), 2);
    assert_eq!(window.total_rows(), 25);
    assert!(window.has_previous());
    assert!(!window.has_next());
}

#[test]
fn test_first_page() {
    let rows = numbers(25);
    let window = paginate(&rows, 1, 20);
    assert_eq!(window.rows(), &rows[..20]);
    assert_eq!((window.first_index(), window.last_index()), (1, 20));
    assert!(!window.has_previous());
    assert!(window.has_next());
}

#[test]
fn test_empty_rows_have_one_page() {
    let rows: Vec<u32> = Vec::new();
    let window = paginate(&rows, 1, 20);
    assert!(window.is_empty());
    assert_eq!(window.total_pages(), 1);
    assert_eq!((window.first_index(), window.last_index()), (0, 0));
}

#[test]
fn test_out_of_range_pages_are_empty() {
    let rows = numbers(25);
    assert!(paginate(&rows, 3, 20).is_empty());
    assert!(paginate(&rows, 0, 20).is_empty());
    assert!(paginate(&rows, usize::MAX, 20).is_empty());
    let beyond = paginate(&rows, 3, 20);
    assert_eq!((beyond.first_index(), beyond.last_index()), (25, 25));
}

#[test]
fn test_page_sizes_match_formula() {
    for count in [0u32, 1, 19, 20, 21, 40, 41, 99, 100] {
        let rows = numbers(count);
        for size in [1usize, 3, 20, 50] {
            let pages = total_pages(rows.len(), size);
            assert_eq!(pages, rows.len().div_ceil(size).max(1));
            for page in 1..=pages {
                let window = paginate(&rows, page, size);
                let expected = size.min(rows.len() - (page - 1) * size);
                assert_eq!(window.len(), expected, "count={} size={} page={}", count, size, page);
                assert_eq!(window.total_pages(), pages);
            }
        }
    }
}

#[test]
fn test_clamp_page() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(9, 3), 3);
    assert_eq!(clamp_page(5, 0), 1);
}
