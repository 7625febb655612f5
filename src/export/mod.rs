//! Export module for the expense tracker
//!
//! Writes the expense collection in several formats:
//! - CSV: spreadsheet-compatible, one row per expense
//! - JSON: same shape as the expenses file
//! - YAML: human-readable

pub mod csv;

use std::io::Write;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

pub use self::csv::export_expenses_csv;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    Csv,
    /// JSON format (same as the expenses file)
    Json,
    /// YAML format
    Yaml,
}

/// Write `expenses` to `writer` in the requested format
pub fn export_expenses<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, expenses)
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
        }
        ExportFormat::Yaml => serde_yaml::to_writer(writer, expenses)
            .map_err(|e| ExpenseError::Export(e.to_string())),
    }
}
