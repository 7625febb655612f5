//! Expense store for JSON storage
//!
//! The whole collection lives in a single JSON array. Every read loads all of
//! it and every write replaces all of it.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{load_json, write_json_atomic, JsonFile};

/// File-backed store for the expense collection
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the entire collection in insertion order
    ///
    /// A missing or blank file is an empty collection. A file that is present
    /// but not a JSON array of expenses is reported as `ExpenseError::Corrupt`
    /// so that nothing overwrites it by accident.
    pub fn read_expenses(&self) -> Result<Vec<Expense>, ExpenseError> {
        match load_json::<Vec<Expense>, _>(&self.path)? {
            JsonFile::Loaded(expenses) => {
                debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");
                Ok(expenses)
            }
            JsonFile::Missing => {
                info!(path = %self.path.display(), "no expenses file yet, starting empty");
                Ok(Vec::new())
            }
            JsonFile::Empty => Ok(Vec::new()),
        }
    }

    /// Replace the stored collection with `expenses`
    pub fn write_expenses(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, expenses)?;
        debug!(count = expenses.len(), path = %self.path.display(), "saved expenses");
        Ok(())
    }
}
