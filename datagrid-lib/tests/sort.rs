use std::cmp::Ordering;

use datagrid_lib::model::{Row, Value};
use datagrid_lib::view::{Direction, SortIndicator, SortSpec, compare_values, sort_rows};

fn ids(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|r| r.id()).collect()
}

fn rows_with(column: &str, values: Vec<Value>) -> Vec<Row> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| Row::new(format!("r{}", i)).set(column, v))
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_numeric_strings_sort_numerically() {
    let rows = vec![Row::new("r1").set("age", "30"), Row::new("r2").set("age", "5")];
    assert_eq!(ids(&sort_rows(&rows, Some("age"), Direction::Asc)), ["r2", "r1"]);
    assert_eq!(ids(&sort_rows(&rows, Some("age"), Direction::Desc)), ["r1", "r2"]);
}

#[test]
fn test_no_column_keeps_input_order() {
    let rows = rows_with("n", vec![Value::from(3), Value::from(1), Value::from(2)]);
    assert_eq!(ids(&sort_rows(&rows, None, Direction::Desc)), ["r0", "r1", "r2"]);
}

#[test]
fn test_text_is_case_insensitive() {
    let rows = rows_with(
        "name",
        vec![Value::from("bob"), Value::from("Alice"), Value::from("carol")],
    );
    assert_eq!(ids(&sort_rows(&rows, Some("name"), Direction::Asc)), ["r1", "r0", "r2"]);
    assert_eq!(ids(&sort_rows(&rows, Some("name"), Direction::Desc)), ["r2", "r0", "r1"]);
}

#[test]
fn test_booleans_true_first_ascending() {
    let rows = rows_with(
        "active",
        vec![Value::from(false), Value::from(true), Value::from(false), Value::from(true)],
    );
    assert_eq!(
        ids(&sort_rows(&rows, Some("active"), Direction::Asc)),
        ["r1", "r3", "r0", "r2"]
    );
    assert_eq!(
        ids(&sort_rows(&rows, Some("active"), Direction::Desc)),
        ["r0", "r2", "r1", "r3"]
    );
}

#[test]
fn test_lists_compare_as_joined_text() {
    let rows = rows_with(
        "tags",
        vec![
            Value::List(vec![Value::from("b"), Value::from("a")]),
            Value::List(vec![Value::from("a"), Value::from("z")]),
        ],
    );
    assert_eq!(ids(&sort_rows(&rows, Some("tags"), Direction::Asc)), ["r1", "r0"]);
}

#[test]
fn test_objects_compare_as_json() {
    let a: Value = serde_json::from_str(r#"{"k": "b"}"#).unwrap();
    let b: Value = serde_json::from_str(r#"{"k": "a"}"#).unwrap();
    assert_eq!(compare_values(&a, &b, Direction::Asc), Ordering::Greater);
}

// ============================================================================
// Missing values
// ============================================================================

#[test]
fn test_missing_values_last_in_both_directions() {
    let rows = rows_with(
        "age",
        vec![
            Value::Null,
            Value::from(40),
            Value::from(""),
            Value::from(10),
            Value::Null,
        ],
    );

    for direction in [Direction::Asc, Direction::Desc] {
        let sorted = sort_rows(&rows, Some("age"), direction);
        let tail: Vec<&str> = ids(&sorted)[2..].to_vec();
        assert_eq!(tail, ["r0", "r2", "r4"], "{:?}", direction);
    }
    assert_eq!(ids(&sort_rows(&rows, Some("age"), Direction::Asc))[..2], ["r3", "r1"]);
    assert_eq!(ids(&sort_rows(&rows, Some("age"), Direction::Desc))[..2], ["r1", "r3"]);
}

#[test]
fn test_absent_field_is_missing() {
    let rows = vec![Row::new("r0"), Row::new("r1").set("age", 1)];
    assert_eq!(ids(&sort_rows(&rows, Some("age"), Direction::Asc)), ["r1", "r0"]);
}

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_equal_keys_keep_relative_order() {
    let rows = rows_with(
        "dept",
        vec![
            Value::from("HR"),
            Value::from("Sales"),
            Value::from("hr"),
            Value::from("Sales"),
            Value::from("HR"),
        ],
    );
    assert_eq!(
        ids(&sort_rows(&rows, Some("dept"), Direction::Asc)),
        ["r0", "r2", "r4", "r1", "r3"]
    );
    assert_eq!(
        ids(&sort_rows(&rows, Some("dept"), Direction::Desc)),
        ["r1", "r3", "r0", "r2", "r4"]
    );
}

#[test]
fn test_numeric_ties_keep_relative_order() {
    let rows = rows_with(
        "n",
        vec![Value::from(2), Value::from("2"), Value::from(1), Value::from(2.0)],
    );
    assert_eq!(ids(&sort_rows(&rows, Some("n"), Direction::Asc)), ["r2", "r0", "r1", "r3"]);
    assert_eq!(ids(&sort_rows(&rows, Some("n"), Direction::Desc)), ["r0", "r1", "r3", "r2"]);
}

// ============================================================================
// Sort state
// ============================================================================

#[test]
fn test_indicator() {
    let spec = SortSpec::desc("age");
    assert_eq!(SortIndicator::for_column(Some(&spec), "age"), SortIndicator::Descending);
    assert_eq!(SortIndicator::for_column(Some(&spec), "name"), SortIndicator::Unsorted);
    assert_eq!(SortIndicator::for_column(None, "age").arrow(), '↕');
    assert_eq!(SortIndicator::Ascending.arrow(), '↑');
}
