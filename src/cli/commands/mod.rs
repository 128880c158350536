//! CLI command handlers for `coursecatalog`.
//!
//! Each subcommand family lives in its own submodule.

pub mod config;
pub mod courses;
pub mod export;
pub mod playlist;

use crate::args::OutputFormat;
use serde::Serialize;

/// Print `value` as pretty JSON, or fall back to `table` for the table format
pub fn emit<T: Serialize + ?Sized>(value: &T, format: OutputFormat, table: impl FnOnce()) {
    match format {
        OutputFormat::Table => table(),
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("✗ Failed to serialize output: {e}");
                std::process::exit(1);
            }
        },
    }
}
