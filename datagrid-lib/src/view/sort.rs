//! Sort engine

use std::borrow::Borrow;
use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;
use crate::model::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, true before false).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0, false before true).
    Desc,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// The active sort: one column and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column id to sort on.
    pub column: String,
    /// Direction among present values.
    pub direction: Direction,
}

impl SortSpec {
    /// Creates an ascending sort on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Desc,
        }
    }

    /// Computes the sort that follows a click on `column`'s header.
    ///
    /// The current ascending column flips to descending; anything else starts
    /// ascending.
    pub fn toggle(current: Option<&SortSpec>, column: &str) -> SortSpec {
        match current {
            Some(spec) if spec.column == column && spec.direction == Direction::Asc => {
                SortSpec::desc(column)
            }
            _ => SortSpec::asc(column),
        }
    }
}

/// Header marker for a column's sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Sorted ascending on this column.
    Ascending,
    /// Sorted descending on this column.
    Descending,
    /// Not the sort column.
    Unsorted,
}

impl SortIndicator {
    /// Indicator for `column` under the given sort.
    pub fn for_column(sort: Option<&SortSpec>, column: &str) -> Self {
        match sort {
            Some(spec) if spec.column == column => match spec.direction {
                Direction::Asc => SortIndicator::Ascending,
                Direction::Desc => SortIndicator::Descending,
            },
            _ => SortIndicator::Unsorted,
        }
    }

    /// Arrow glyph for header rendering.
    pub fn arrow(self) -> char {
        match self {
            SortIndicator::Ascending => '↑',
            SortIndicator::Descending => '↓',
            SortIndicator::Unsorted => '↕',
        }
    }
}

/// A cell value reduced to what the comparator looks at.
///
/// Lists are flattened and objects serialized before classification, and a
/// text that parses as a number is a number.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: &Value) -> Self {
        if value.is_missing() {
            return SortKey::Missing;
        }
        match value {
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Number(n) if !n.is_nan() => SortKey::Number(*n),
            Value::Object(_) => Self::text(value.to_json()),
            other => Self::text(other.to_string()),
        }
    }

    fn text(s: String) -> Self {
        match parse_number(&s) {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(s.to_lowercase()),
        }
    }

    /// Class rank for pairs of different kinds, so mixed columns still get a
    /// total order.
    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Missing => 3,
        }
    }

    fn compare(&self, other: &SortKey, direction: Direction) -> Ordering {
        match (self, other) {
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Greater,
            (_, SortKey::Missing) => Ordering::Less,
            // true sorts first when ascending
            (SortKey::Bool(a), SortKey::Bool(b)) => direction.apply(b.cmp(a)),
            (SortKey::Number(a), SortKey::Number(b)) => {
                direction.apply(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            (SortKey::Text(a), SortKey::Text(b)) => direction.apply(a.cmp(b)),
            (a, b) => direction.apply(a.rank().cmp(&b.rank())),
        }
    }
}

/// Parses text the way a numeric input would read it. Only finite values
/// count, so `NaN`, `inf` and `1e999` stay text.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Compares two cell values under `direction`.
///
/// Missing values (null or empty text) come last in both directions. Booleans
/// order `true` first, numbers and numeric text compare numerically, and all
/// other text compares case-insensitively.
///
/// Values of different kinds never compare as strings: they order by kind,
/// booleans before numbers before text. So `50` sorts before `"$100"` when
/// ascending, which keeps the order total for mixed columns.
pub fn compare_values(a: &Value, b: &Value, direction: Direction) -> Ordering {
    SortKey::of(a).compare(&SortKey::of(b), direction)
}

/// Returns `rows` ordered by `column`, or unchanged when no column is given.
///
/// The sort is stable: rows with equal keys keep their input order.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Row;
/// use datagrid_lib::view::{Direction, sort_rows};
///
/// let rows = vec![Row::new("r1").set("age", "30"), Row::new("r2").set("age", "5")];
/// let sorted = sort_rows(&rows, Some("age"), Direction::Asc);
/// assert_eq!(sorted[0].id(), "r2");
/// ```
pub fn sort_rows<T>(rows: &[T], column: Option<&str>, direction: Direction) -> Vec<T>
where
    T: Borrow<Row> + Clone,
{
    let Some(column) = column else {
        return rows.to_vec();
    };

    let mut keyed: Vec<(SortKey, &T)> = rows
        .iter()
        .map(|row| (SortKey::of(row.borrow().value(column)), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, direction));
    keyed.into_iter().map(|(_, row)| row.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("30"), Some(30.0));
        assert_eq!(parse_number(" -2.5 "), Some(-2.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-Infinity"), None);
        assert_eq!(parse_number("1e999"), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(SortKey::of(&Value::Null), SortKey::Missing);
        assert_eq!(SortKey::of(&Value::from("")), SortKey::Missing);
        assert_eq!(SortKey::of(&Value::from("12")), SortKey::Number(12.0));
        assert_eq!(SortKey::of(&Value::from("Ada")), SortKey::Text("ada".into()));
        assert_eq!(SortKey::of(&Value::from(f64::NAN)), SortKey::Text("nan".into()));
        let list = Value::List(vec![Value::from("B"), Value::from("a")]);
        assert_eq!(SortKey::of(&list), SortKey::Text("b, a".into()));
    }

    #[test]
    fn test_mixed_kinds_are_consistent() {
        let values = [
            Value::from("10"),
            Value::from("9"),
            Value::from("1a"),
            Value::from(true),
            Value::Null,
        ];
        for direction in [Direction::Asc, Direction::Desc] {
            for a in &values {
                for b in &values {
                    let ab = compare_values(a, b, direction);
                    let ba = compare_values(b, a, direction);
                    assert_eq!(ab, ba.reverse(), "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_numbers_before_text_across_kinds() {
        let price = Value::from("$100");
        let fifty = Value::from(50);
        assert_eq!(compare_values(&fifty, &price, Direction::Asc), Ordering::Less);
        assert_eq!(compare_values(&fifty, &price, Direction::Desc), Ordering::Greater);
        // "inf" is not a number, so it sorts with text
        assert_eq!(compare_values(&Value::from("inf"), &fifty, Direction::Asc), Ordering::Greater);
    }

    #[test]
    fn test_toggle() {
        let first = SortSpec::toggle(None, "age");
        assert_eq!(first, SortSpec::asc("age"));
        let second = SortSpec::toggle(Some(&first), "age");
        assert_eq!(second, SortSpec::desc("age"));
        let third = SortSpec::toggle(Some(&second), "age");
        assert_eq!(third, SortSpec::asc("age"));
        let other = SortSpec::toggle(Some(&second), "name");
        assert_eq!(other, SortSpec::asc("name"));
    }
}
