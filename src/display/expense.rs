//! Expense display formatting
//!
//! Renders the expense collection as a table for the `view` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Date")]
    date: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, currency_symbol: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            amount: expense.amount.format_with_symbol(currency_symbol),
            category: expense.category.clone(),
            description: expense.description.clone(),
            date: expense.date.clone(),
        }
    }
}

/// Format expenses as a table in insertion order
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n\nRun 'expenses add --amount <AMOUNT> --category <CATEGORY>' to add one."
            .to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, currency_symbol));
    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// One-line confirmation for a newly added expense
pub fn format_added(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "Expense added successfully!\n  ID:       {}\n  Amount:   {}\n  Category: {}",
        expense.id,
        expense.amount.format_with_symbol(currency_symbol),
        expense.category
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, description: Option<&str>) -> Expense {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let amount = Money::from_amount(cents as f64 / 100.0).unwrap();
        Expense::on_date(amount, category, description, date, "%m/%d/%Y").unwrap()
    }

    #[test]
    fn test_format_empty() {
        let output = format_expense_table(&[], "$");
        assert!(output.contains("No expenses recorded yet"));
    }

    #[test]
    fn test_format_table_columns_and_rows() {
        let mut first = expense(1250, "food", None);
        first.id = ExpenseId::from_raw("id-one");
        let second = expense(2000, "transport", Some("train"));

        let output = format_expense_table(&[first, second.clone()], "$");

        for header in ["ID", "Amount", "Category", "Description", "Date"] {
            assert!(output.contains(header), "missing header {header}");
        }
        assert!(output.contains("id-one"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("N/A"));
        assert!(output.contains("02/01/2025"));
        assert!(output.contains(second.id.as_str()));

        // Insertion order
        assert!(output.find("food").unwrap() < output.find("transport").unwrap());
    }

    #[test]
    fn test_format_uses_currency_symbol() {
        let output = format_expense_table(&[expense(999, "misc", None)], "€");
        assert!(output.contains("€9.99"));
    }

    #[test]
    fn test_format_added() {
        let e = expense(1250, "food", None);
        let output = format_added(&e, "$");
        assert!(output.starts_with("Expense added successfully!"));
        assert!(output.contains(e.id.as_str()));
        assert!(output.contains("$12.50"));
    }
}
