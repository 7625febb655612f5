//! Expense tracker - command-line expense recording
//!
//! This library provides the core functionality for the `expenses` binary:
//! recording, listing, deleting and summarizing expenses kept in a single
//! local JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, money)
//! - `storage`: JSON file storage layer
//! - `services`: The add, view, delete and summarize operations
//! - `display`: Table rendering for terminal output
//! - `export`: CSV, JSON and YAML export
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::Money;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new("expenses.json");
//! let service = ExpenseService::new(&store, "%m/%d/%Y");
//! let amount: Money = "12.50".parse().expect("valid amount");
//! service.add(amount, "food", None)?;
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
