//! Output formatting for the bf4 CLI.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;

/// Output format for fetched data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    /// Pretty-printed JSON.
    Json,
    /// Newline-delimited JSON, one record per line.
    Ndjson,
}

/// Print a single decoded object.
pub(crate) fn print_value(value: &Value, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
        Format::Ndjson => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

/// Print a record list; ndjson emits one record per line.
pub(crate) fn print_records(records: &[Value], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        Format::Ndjson => {
            for record in records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
    }
    Ok(())
}
