//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses, ExportFormat};
use crate::storage::ExpenseStore;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path, or '-' for stdout
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,
}

/// Handle the export command
pub fn handle_export_command(store: &ExpenseStore, args: ExportArgs) -> ExpenseResult<()> {
    let expenses = store.read_expenses()?;

    if args.output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        export_expenses(&expenses, args.format, &mut writer)?;
        return writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()));
    }

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", args.output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_expenses(&expenses, args.format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    info!(count = expenses.len(), path = %args.output.display(), "exported expenses");
    println!(
        "Exported {} expenses to {}",
        expenses.len(),
        args.output.display()
    );
    Ok(())
}
