//! Expense CLI commands
//!
//! Implements the add, view, delete and summary commands.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_added, format_empty_summary, format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::models::Money;
use crate::services::{DeleteOutcome, ExpenseService};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Expense amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Money,
        /// Expense category
        #[arg(short, long)]
        category: String,
        /// A short description of the expense
        #[arg(short, long)]
        description: Option<String>,
    },
    /// View all expenses
    #[command(alias = "list")]
    View,
    /// Delete an expense by its ID
    Delete {
        /// The ID of the expense to delete
        #[arg(long)]
        id: String,
    },
    /// Show a summary of all expenses
    Summary,
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(store, &settings.date_format);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
        } => {
            let expense = service.add(amount, &category, description.as_deref())?;
            println!("{}", format_added(&expense, symbol));
        }

        ExpenseCommands::View => {
            let expenses = service.list()?;
            println!("{}", format_expense_table(&expenses, symbol));
        }

        ExpenseCommands::Delete { id } => match service.delete(&id)? {
            DeleteOutcome::Deleted(_) => println!("Expense deleted."),
            DeleteOutcome::NotFound => println!("Expense not found."),
        },

        ExpenseCommands::Summary => match service.summarize()? {
            Some(summary) => print!("{}", format_summary(&summary, symbol)),
            None => println!("{}", format_empty_summary()),
        },
    }

    Ok(())
}
