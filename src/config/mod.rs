//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Config directory and expenses file resolution
//! - Optional user settings (currency symbol, date format)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
