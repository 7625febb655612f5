//! Summary display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::ExpenseSummary;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total Amount")]
    total: String,
}

/// Format the expense summary: count, total and per-category breakdown
pub fn format_summary(summary: &ExpenseSummary, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("--- Expense Summary ---\n");
    output.push_str(&format!("Total Number of Expenses: {}\n", summary.count));
    output.push_str(&format!(
        "Total Amount Spent: {}\n",
        summary.total.format_with_symbol(currency_symbol)
    ));
    output.push_str("\n--- Breakdown by Category ---\n");

    let rows = summary.by_category.iter().map(|c| CategoryRow {
        category: c.category.clone(),
        total: c.total.format_with_symbol(currency_symbol),
    });
    let mut table = Table::new(rows);
    table.with(Style::modern());
    output.push_str(&table.to_string());
    output.push('\n');

    output
}

/// Message shown when there is nothing to summarize
pub fn format_empty_summary() -> &'static str {
    "No expenses to summarize."
}
