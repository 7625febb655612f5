use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{handle_expense_command, handle_export_command, ExpenseCommands, ExportArgs};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    version,
    about = "Record, list, delete and summarize expenses",
    long_about = "A small personal-finance tool. Expenses are kept in a single \
                  JSON file (expenses.json in the current directory unless \
                  --file or EXPENSES_FILE says otherwise)."
)]
struct Cli {
    /// Expenses file to use
    #[arg(long, global = true, env = "EXPENSES_FILE")]
    file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export all expenses to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    trace!("{cli:?}");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    let store = ExpenseStore::new(
        paths.expenses_file(cli.file.as_deref(), settings.expenses_file.as_deref()),
    );
    debug!(path = %store.path().display(), "using expenses file");

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(&store, &settings, cmd)?,
        Commands::Export(args) => handle_export_command(&store, args)?,
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Expenses file:  {}", store.path().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "expense_tracker={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
