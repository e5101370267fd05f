//! Demo data
//!
//! Seven columns of staff records with random values, for trying the table
//! without a real data source.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::Column;
use crate::model::ColumnType;
use crate::model::Row;
use crate::config::TableConfig;
use crate::session::Dataset;

/// Departments offered by the `department` select column.
pub const DEPARTMENTS: [&str; 5] = ["Sales", "Marketing", "Engineering", "HR", "Finance"];

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack",
];
const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];
const DOMAINS: [&str; 3] = ["example.com", "example.org", "example.net"];

/// The demo schema.
pub fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID", ColumnType::String).ordinal(0),
        Column::new("name", "Name", ColumnType::String).ordinal(1),
        Column::new("age", "Age", ColumnType::Number).ordinal(2).width(100),
        Column::new("email", "Email", ColumnType::String).ordinal(3).width(250),
        Column::new("active", "Active", ColumnType::Boolean).ordinal(4).width(100),
        Column::select("department", "Department", DEPARTMENTS).ordinal(5).width(150),
        Column::new("salary", "Salary", ColumnType::Number).ordinal(6).width(120),
    ]
}

/// Generates `row_count` rows with ids `row-0`, `row-1`, ...
pub fn rows<R: Rng + ?Sized>(row_count: usize, rng: &mut R) -> Vec<Row> {
    (0..row_count)
        .map(|index| {
            let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
            let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
            let domain = DOMAINS.choose(rng).copied().unwrap_or("example.com");
            let department = DEPARTMENTS.choose(rng).copied().unwrap_or("Sales");

            Row::new(format!("row-{}", index))
                .set("name", format!("{} {}", first, last))
                .set("age", rng.random_range(18u32..=65))
                .set(
                    "email",
                    format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), domain),
                )
                .set("active", rng.random_bool(0.5))
                .set("department", department)
                .set("salary", rng.random_range(30_000u32..=150_000))
        })
        .collect()
}

/// A complete demo dataset with default settings.
pub fn generate<R: Rng + ?Sized>(row_count: usize, rng: &mut R) -> Dataset {
    Dataset {
        columns: columns(),
        rows: rows(row_count, rng),
        config: TableConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::Table;
    use crate::model::Value;

    #[test]
    fn test_generate_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = generate(100, &mut rng);
        assert_eq!(dataset.columns.len(), 7);
        assert_eq!(dataset.rows.len(), 100);
        assert_eq!(dataset.rows[0].id(), "row-0");
        assert_eq!(dataset.rows[99].id(), "row-99");

        for row in &dataset.rows {
            let Some(Value::Number(age)) = row.get("age") else {
                panic!("age is not a number: {:?}", row.get("age"));
            };
            assert!((18.0..=65.0).contains(age));
            let Some(Value::Number(salary)) = row.get("salary") else {
                panic!("salary is not a number: {:?}", row.get("salary"));
            };
            assert!((30_000.0..=150_000.0).contains(salary));
            let Some(Value::Text(dept)) = row.get("department") else {
                panic!("department is not text: {:?}", row.get("department"));
            };
            assert!(DEPARTMENTS.contains(&dept.as_str()));
            assert!(matches!(row.get("active"), Some(Value::Bool(_))));
            assert!(row.value("email").to_string().contains('@'));
        }
    }

    #[test]
    fn test_generated_dataset_builds_a_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let table = Table::from_dataset(generate(45, &mut rng)).unwrap();
        assert_eq!(table.total_pages(), 3);
    }
}
