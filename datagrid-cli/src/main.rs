//! Console front end for the editable grid.
//!
//! `datagrid [dataset.json]` loads a dataset (or 100 demo rows) and reads
//! commands from stdin, redrawing the grid after each one.

mod command;
mod paths;
mod render;

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::Write;

use datagrid_lib::Table;
use datagrid_lib::error::TableError;
use datagrid_lib::mock;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use command::Command;

/// Rows generated when no dataset is given.
const DEMO_ROWS: usize = 100;

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

fn init_logging() {
    paths::rotate_logs();
    let path = paths::log_file();
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled, cannot create {}: {}", path.display(), e),
    }
}

fn load(path: Option<String>) -> Result<Table, CliError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(&path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            info!("loading dataset from {}", path);
            Ok(Table::from_json(&json)?)
        }
        None => {
            info!("no dataset given, generating {} demo rows", DEMO_ROWS);
            Ok(Table::from_dataset(mock::generate(DEMO_ROWS, &mut rand::rng()))?)
        }
    }
}

fn run() -> Result<(), CliError> {
    let mut table = load(std::env::args().nth(1))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render::grid(&table.view()))?;

    for line in stdin.lock().lines() {
        let line = line?;
        match command::parse(&line, &table) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(stdout, "{}", command::HELP)?,
            Ok(Some(Command::Columns)) => writeln!(stdout, "{}", render::columns(&table))?,
            Ok(Some(Command::Show)) => writeln!(stdout, "{}", render::grid(&table.view()))?,
            Ok(Some(Command::Intent(intent))) => {
                table.apply(intent);
                if let Some(notice) = table.notice() {
                    writeln!(stdout, "{}", render::notice(notice))?;
                }
                writeln!(stdout, "{}", render::grid(&table.view()))?;
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }
    info!("session ended");
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
