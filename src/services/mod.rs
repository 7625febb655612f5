//! Service layer for the expense tracker
//!
//! The service layer provides the expense operations on top of the storage
//! layer and returns plain data for the display layer to render.

pub mod expense;

pub use expense::{CategoryTotal, DeleteOutcome, ExpenseService, ExpenseSummary};
