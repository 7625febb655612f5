//! Expense model
//!
//! A single recorded expense. Records are created once and never edited; the
//! only other lifecycle event is deletion by id.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Description stored when none was given
pub const NO_DESCRIPTION: &str = "N/A";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent
    pub amount: Money,

    /// Free-form grouping label
    pub category: String,

    /// Short description, or "N/A"
    pub description: String,

    /// Creation date in display form
    pub date: String,
}

impl Expense {
    /// Create a new expense dated today
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: Option<&str>,
        date_format: &str,
    ) -> ExpenseResult<Self> {
        Self::on_date(
            amount,
            category,
            description,
            Local::now().date_naive(),
            date_format,
        )
    }

    /// Create a new expense for an explicit date
    ///
    /// Fails with `ExpenseError::Config` if `date_format` is not a valid
    /// strftime format.
    pub fn on_date(
        amount: Money,
        category: impl Into<String>,
        description: Option<&str>,
        date: NaiveDate,
        date_format: &str,
    ) -> ExpenseResult<Self> {
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION);

        Ok(Self {
            id: ExpenseId::new(),
            amount,
            category: category.into(),
            description: description.to_string(),
            date: format_date(date, date_format)?,
        })
    }
}

/// Check that `date_format` is a usable strftime format
pub fn validate_date_format(date_format: &str) -> ExpenseResult<()> {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid_date_format(date_format));
    }
    Ok(())
}

fn format_date(date: NaiveDate, date_format: &str) -> ExpenseResult<String> {
    validate_date_format(date_format)?;

    let mut formatted = String::new();
    write!(formatted, "{}", date.format(date_format))
        .map_err(|_| invalid_date_format(date_format))?;
    Ok(formatted)
}

fn invalid_date_format(date_format: &str) -> ExpenseError {
    ExpenseError::Config(format!("Invalid date format '{}'", date_format))
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date, self.amount, self.category, self.description
        )
    }
}
