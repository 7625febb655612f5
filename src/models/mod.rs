//! Core data models for the expense tracker
//!
//! This module contains the data structures that make up the stored
//! collection: expenses, their ids and money amounts.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{validate_date_format, Expense, NO_DESCRIPTION};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
