//! CSV export of expenses

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    amount: String,
    category: &'a str,
    description: &'a str,
    date: &'a str,
}

/// Export all expenses to CSV with a header row
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer
            .write_record(["id", "amount", "category", "description", "date"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    for expense in expenses {
        csv_writer
            .serialize(CsvRow {
                id: expense.id.as_str(),
                amount: expense.amount.format_plain(),
                category: &expense.category,
                description: &expense.description,
                date: &expense.date,
            })
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    #[test]
    fn test_header_and_rows() {
        let mut expense = Expense::new(Money::parse("12.50").unwrap(), "food", Some("lunch, with tip"), "%Y-%m-%d")
                .unwrap();
        expense.id = ExpenseId::from_raw("abc");
        expense.date = "2025-01-02".into();

        let mut buffer = Vec::new();
        export_expenses_csv(&[expense], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,amount,category,description,date"));
        assert_eq!(lines.next(), Some("abc,12.50,food,\"lunch, with tip\",2025-01-02"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_still_has_header() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,amount,category,description,date\n"
        );
    }
}
