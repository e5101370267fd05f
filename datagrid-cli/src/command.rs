//! Command line parsing
//!
//! Turns one typed line into either a table [`Intent`] or a console action.

use datagrid_lib::Table;
use datagrid_lib::session::Intent;
use thiserror::Error;

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the table.
    Intent(Intent),
    /// Redraw the grid.
    Show,
    /// List columns with their visibility.
    Columns,
    /// Print the command summary.
    Help,
    /// Leave.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a page number")]
    InvalidPage(String),
    #[error("no cell is being edited")]
    NotEditing,
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
show                  redraw the grid
columns               list columns and their visibility
toggle <column>       show or hide a column
sort <column>         sort by a column (again to reverse)
unsort                back to the original order
page <n> | next | prev
edit <row> <column>   open an editor on a cell
draft <text>          change the editor text
commit [<text>]       save the open editor
cancel                close the editor without saving
quit";

/// Parses one line. `table` supplies the open editor for `commit`/`cancel`.
///
/// Blank lines yield `None`.
pub fn parse(line: &str, table: &Table) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "show" | "s" => Command::Show,
        "columns" | "cols" => Command::Columns,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "toggle" => Command::Intent(Intent::toggle_column(single(rest, "toggle <column>")?)),
        "sort" => Command::Intent(Intent::set_sort(single(rest, "sort <column>")?)),
        "unsort" => Command::Intent(Intent::ClearSort),
        "next" | "n" => Command::Intent(Intent::NextPage),
        "prev" | "p" => Command::Intent(Intent::PreviousPage),
        "page" => {
            let raw = single(rest, "page <n>")?;
            let page = raw
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidPage(raw.to_string()))?;
            Command::Intent(Intent::set_page(page))
        }
        "edit" => {
            let mut args = rest.split_whitespace();
            match (args.next(), args.next(), args.next()) {
                (Some(row), Some(column), None) => Command::Intent(Intent::begin_edit(row, column)),
                _ => return Err(ParseError::Usage("edit <row> <column>")),
            }
        }
        "draft" => Command::Intent(Intent::edit_draft(rest)),
        "commit" => {
            let session = table.editing().ok_or(ParseError::NotEditing)?;
            Command::Intent(Intent::CommitEdit {
                row_id: session.row_id.clone(),
                column_id: session.column_id.clone(),
                raw: (!rest.is_empty()).then(|| rest.to_string()),
            })
        }
        "cancel" => {
            let session = table.editing().ok_or(ParseError::NotEditing)?;
            Command::Intent(Intent::cancel_edit(&session.row_id, &session.column_id))
        }
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn single<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, ParseError> {
    let mut args = rest.split_whitespace();
    match (args.next(), args.next()) {
        (Some(arg), None) => Ok(arg),
        _ => Err(ParseError::Usage(usage)),
    }
}

#[cfg(test)]
mod tests {
    use datagrid_lib::TableConfig;
    use datagrid_lib::model::{Column, ColumnType, Row};

    use super::*;

    fn table() -> Table {
        let columns = vec![
            Column::new("id", "ID", ColumnType::String),
            Column::new("age", "Age", ColumnType::Number).ordinal(1),
        ];
        Table::new(columns, vec![Row::new("r1").set("age", 30)], TableConfig::default()).unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   ", &table()), Ok(None));
    }

    #[test]
    fn test_view_commands() {
        let t = table();
        assert_eq!(parse("sort age", &t), Ok(Some(Command::Intent(Intent::set_sort("age")))));
        assert_eq!(parse("toggle  age ", &t), Ok(Some(Command::Intent(Intent::toggle_column("age")))));
        assert_eq!(parse("page 3", &t), Ok(Some(Command::Intent(Intent::set_page(3)))));
        assert_eq!(parse("next", &t), Ok(Some(Command::Intent(Intent::NextPage))));
        assert_eq!(parse("q", &t), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_bad_arguments() {
        let t = table();
        assert_eq!(parse("page two", &t), Err(ParseError::InvalidPage("two".into())));
        assert_eq!(parse("sort", &t), Err(ParseError::Usage("sort <column>")));
        assert_eq!(parse("edit r1", &t), Err(ParseError::Usage("edit <row> <column>")));
        assert_eq!(parse("frobnicate", &t), Err(ParseError::Unknown("frobnicate".into())));
    }

    #[test]
    fn test_draft_keeps_inner_spaces() {
        assert_eq!(
            parse("draft  Ada  Lovelace ", &table()),
            Ok(Some(Command::Intent(Intent::edit_draft("Ada  Lovelace"))))
        );
    }

    #[test]
    fn test_commit_targets_open_editor() {
        let mut t = table();
        assert_eq!(parse("commit", &t), Err(ParseError::NotEditing));

        t.apply(Intent::begin_edit("r1", "age"));
        assert_eq!(
            parse("commit 31", &t),
            Ok(Some(Command::Intent(Intent::commit_edit("r1", "age", "31"))))
        );
        assert_eq!(
            parse("commit", &t),
            Ok(Some(Command::Intent(Intent::commit_draft("r1", "age"))))
        );
        assert_eq!(
            parse("cancel", &t),
            Ok(Some(Command::Intent(Intent::cancel_edit("r1", "age"))))
        );
    }
}
