//! Display formatting for terminal output
//!
//! Turns expenses and summaries into strings for the CLI to print. Nothing in
//! this module touches storage.

pub mod expense;
pub mod summary;

pub use expense::{format_added, format_expense_table};
pub use summary::{format_empty_summary, format_summary};
