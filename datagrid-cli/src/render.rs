//! Text rendering of the grid view

use std::fmt::Write;

use datagrid_lib::Table;
use datagrid_lib::edit::CellState;
use datagrid_lib::model::Column;
use datagrid_lib::model::ColumnType;
use datagrid_lib::model::Value;
use datagrid_lib::session::GridView;
use datagrid_lib::session::Notice;
use datagrid_lib::session::NoticeLevel;
use unicode_width::UnicodeWidthStr;

/// Widest a cell may grow before it is cut.
const MAX_CELL_WIDTH: usize = 32;

/// Text shown in a viewing cell.
pub fn cell_text(column: &Column, value: &Value) -> String {
    match (column.kind, value) {
        (ColumnType::Boolean, Value::Bool(true)) => "True".to_string(),
        (ColumnType::Boolean, Value::Bool(false)) => "False".to_string(),
        _ => value.to_string(),
    }
}

/// Draws the current page: header with sort arrows, rows, entry summary and
/// page counter.
pub fn grid(view: &GridView<'_>) -> String {
    let header: Vec<String> = view
        .columns
        .iter()
        .map(|c| format!("{} {}", c.title, view.indicator(&c.id).arrow()))
        .collect();

    let body: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            view.columns
                .iter()
                .map(|column| match view.cell_state(row.id(), &column.id) {
                    CellState::Editing { draft } => format!("[{}]", draft),
                    CellState::Viewing => cell_text(column, row.value(&column.id)),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            body.iter()
                .map(|cells| cells[i].width())
                .chain(std::iter::once(header[i].width()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }

    let _ = writeln!(
        out,
        "Showing {} to {} of {} entries",
        view.first_index, view.last_index, view.total_rows
    );
    let pager = format!(
        "{} Page {} of {} {}",
        if view.has_previous() { "<" } else { " " },
        view.page,
        view.total_pages,
        if view.has_next() { ">" } else { " " },
    );
    out.push_str(pager.trim_end());
    out
}

/// Lists every column with a visibility checkbox, in schema order.
pub fn columns(table: &Table) -> String {
    table
        .columns()
        .iter()
        .map(|c| {
            let mark = if table.visible().contains(&c.id) { 'x' } else { ' ' };
            format!("[{}] {} ({}, {})", mark, c.title, c.id, c.kind.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line form of a notice.
pub fn notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Info => "i",
        NoticeLevel::Warning => "!",
    };
    format!("{} {}", marker, notice.message)
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| fit(cell, width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Pads or cuts `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use datagrid_lib::TableConfig;
    use datagrid_lib::model::Row;
    use datagrid_lib::session::Intent;

    use super::*;

    fn table() -> Table {
        let columns = vec![
            Column::new("id", "ID", ColumnType::String),
            Column::new("active", "Active", ColumnType::Boolean).ordinal(1),
            Column::new("age", "Age", ColumnType::Number).ordinal(2),
        ];
        let rows = vec![
            Row::new("r1").set("active", true).set("age", 30),
            Row::new("r2").set("active", false).set("age", 5),
        ];
        Table::new(columns, rows, TableConfig::default()).unwrap()
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn test_grid_contents() {
        let mut t = table();
        t.apply(Intent::set_sort("age"));
        let text = grid(&t.view());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID ↕ | Active ↕ | Age ↑");
        assert_eq!(lines[2], "r2   | False    | 5");
        assert_eq!(lines[3], "r1   | True     | 30");
        assert_eq!(lines[4], "Showing 1 to 2 of 2 entries");
        assert_eq!(lines[5], "  Page 1 of 1");
    }

    #[test]
    fn test_editing_cell_shows_draft() {
        let mut t = table();
        t.apply(Intent::begin_edit("r1", "age"));
        t.apply(Intent::edit_draft("31"));
        assert!(grid(&t.view()).contains("[31]"));
    }

    #[test]
    fn test_columns_list() {
        let mut t = table();
        t.apply(Intent::toggle_column("active"));
        let text = columns(&t);
        assert_eq!(
            text,
            "[x] ID (id, string)\n[ ] Active (active, boolean)\n[x] Age (age, number)"
        );
    }
}
