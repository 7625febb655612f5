//! Expense service
//!
//! The four operations on the stored collection. Each one reads the whole
//! collection; add and delete write it back in full. Nothing here prints.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseStore;

/// Result of a delete request
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The matching expense was removed and the collection saved
    Deleted(Expense),
    /// No expense had that id; the file was left untouched
    NotFound,
}

/// Sum of amounts for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
}

/// Totals over a non-empty collection
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Number of expenses
    pub count: usize,
    /// Sum of every amount
    pub total: Money,
    /// Per-category totals, in order of each category's first appearance
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Build a summary, or `None` for an empty collection
    ///
    /// Fails with `ExpenseError::Overflow` if any total stops being finite.
    pub fn from_expenses(expenses: &[Expense]) -> ExpenseResult<Option<Self>> {
        if expenses.is_empty() {
            return Ok(None);
        }

        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut total = Money::zero();

        for expense in expenses {
            let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
                by_category.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: Money::zero(),
                    count: 0,
                });
                by_category.len() - 1
            });

            let entry = &mut by_category[slot];
            entry.total = entry.total.checked_add(expense.amount).ok_or_else(|| {
                ExpenseError::Overflow(format!("total for category '{}'", entry.category))
            })?;
            entry.count += 1;

            total = total.checked_add(expense.amount).ok_or_else(|| {
                ExpenseError::Overflow(format!("total of {} expenses", expenses.len()))
            })?;
        }

        Ok(Some(Self {
            count: expenses.len(),
            total,
            by_category,
        }))
    }

    /// Look up the total for a category
    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
    date_format: &'a str,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore, date_format: &'a str) -> Self {
        Self { store, date_format }
    }

    /// Append a new expense and save the collection
    pub fn add(
        &self,
        amount: Money,
        category: &str,
        description: Option<&str>,
    ) -> ExpenseResult<Expense> {
        let mut expenses = self.store.read_expenses()?;

        let expense = Expense::new(amount, category, description, self.date_format)?;
        expenses.push(expense.clone());
        self.store.write_expenses(&expenses)?;

        info!(id = %expense.id, amount = %expense.amount, category = %expense.category, "added expense");
        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.read_expenses()
    }

    /// Remove the expense whose id equals `id` exactly
    pub fn delete(&self, id: &str) -> ExpenseResult<DeleteOutcome> {
        let expenses = self.store.read_expenses()?;

        let (removed, kept): (Vec<_>, Vec<_>) =
            expenses.into_iter().partition(|e| e.id.matches(id));

        let Some(expense) = removed.first().cloned() else {
            debug!(id, "no expense with that id");
            return Ok(DeleteOutcome::NotFound);
        };

        self.store.write_expenses(&kept)?;
        info!(id, removed = removed.len(), "deleted expense");
        Ok(DeleteOutcome::Deleted(expense))
    }

    /// Totals for the stored collection, or `None` when there is nothing stored
    pub fn summarize(&self) -> ExpenseResult<Option<ExpenseSummary>> {
        let expenses = self.store.read_expenses()?;
        ExpenseSummary::from_expenses(&expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DATE_FORMAT: &str = "%m/%d/%Y";

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn test_add_appends_in_order() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        let a = service.add(money("1"), "a", None).unwrap();
        let b = service.add(money("2"), "b", None).unwrap();
        let c = service.add(money("3"), "c", None).unwrap();

        let stored = store.read_expenses().unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored, vec![a, b, c]);
    }

    #[test]
    fn test_add_defaults_description() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        let added = service.add(money("12.5"), "food", None).unwrap();
        assert_eq!(added.description, "N/A");
        assert_eq!(added.amount, money("12.50"));

        let listed = service.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "N/A");
    }

    #[test]
    fn test_add_keeps_description() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        let added = service.add(money("4"), "coffee", Some("flat white")).unwrap();
        assert_eq!(added.description, "flat white");
    }

    #[test]
    fn test_add_does_not_overwrite_corrupt_file() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "[{ broken").unwrap();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        assert!(service.add(money("1"), "food", None).unwrap_err().is_corrupt());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[{ broken");
    }

    #[test]
    fn test_list_empty() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_existing() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        let keep = service.add(money("10"), "food", None).unwrap();
        let gone = service.add(money("20"), "rent", None).unwrap();

        let outcome = service.delete(gone.id.as_str()).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted(gone));

        let stored = store.read_expenses().unwrap();
        assert_eq!(stored, vec![keep]);
    }

    #[test]
    fn test_delete_missing_leaves_file_untouched() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        service.add(money("10"), "food", None).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();
        let modified = fs::metadata(store.path()).unwrap().modified().unwrap();

        let outcome = service.delete("no-such-id").unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
        assert_eq!(fs::metadata(store.path()).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn test_delete_on_missing_file_does_not_create_it() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        assert_eq!(service.delete("anything").unwrap(), DeleteOutcome::NotFound);
        assert!(!store.exists());
    }

    #[test]
    fn test_delete_requires_exact_match() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        let added = service.add(money("10"), "food", None).unwrap();
        let prefix = &added.id.as_str()[..8];

        assert_eq!(service.delete(prefix).unwrap(), DeleteOutcome::NotFound);
        assert_eq!(store.read_expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_summarize_empty() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        assert!(service.summarize().unwrap().is_none());
        assert!(!store.exists());
    }

    #[test]
    fn test_summarize_total() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        service.add(money("10.00"), "a", None).unwrap();
        service.add(money("20.50"), "b", None).unwrap();
        service.add(money("5.25"), "c", None).unwrap();

        let summary = service.summarize().unwrap().unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, money("35.75"));
    }

    #[test]
    fn test_summarize_by_category() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        service.add(money("10"), "food", None).unwrap();
        service.add(money("20"), "transport", None).unwrap();
        service.add(money("15"), "food", None).unwrap();

        let summary = service.summarize().unwrap().unwrap();
        assert_eq!(summary.total, money("45"));
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.category_total("food"), Some(money("25")));
        assert_eq!(summary.category_total("transport"), Some(money("20")));
        assert_eq!(summary.category_total("rent"), None);

        // First-occurrence order
        assert_eq!(summary.by_category[0].category, "food");
        assert_eq!(summary.by_category[0].count, 2);
        assert_eq!(summary.by_category[1].category, "transport");
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let expenses = vec![
            Expense::new(money("1"), "Food", None, DATE_FORMAT).unwrap(),
            Expense::new(money("2"), "food", None, DATE_FORMAT).unwrap(),
        ];
        let summary = ExpenseSummary::from_expenses(&expenses).unwrap().unwrap();
        assert_eq!(summary.by_category.len(), 2);
    }

    #[test]
    fn test_summarize_sub_cent_amounts() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        for _ in 0..3 {
            service.add(money("0.004"), "tips", None).unwrap();
        }

        let summary = service.summarize().unwrap().unwrap();
        assert_eq!(summary.total.to_string(), "$0.01");
        assert_eq!(summary.category_total("tips").unwrap().to_string(), "$0.01");
    }

    #[test]
    fn test_summarize_large_amounts() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        service.add(money("5e16"), "house", None).unwrap();
        service.add(money("5e16"), "house", None).unwrap();

        let summary = service.summarize().unwrap().unwrap();
        assert_eq!(summary.total, money("1e17"));
    }

    #[test]
    fn test_summarize_overflow_is_error() {
        let huge = Money::from_amount(f64::MAX).unwrap();
        let expenses = vec![
            Expense::new(huge, "a", None, DATE_FORMAT).unwrap(),
            Expense::new(huge, "b", None, DATE_FORMAT).unwrap(),
        ];

        let err = ExpenseSummary::from_expenses(&expenses).unwrap_err();
        assert!(matches!(err, ExpenseError::Overflow(_)));
    }

    #[test]
    fn test_add_with_invalid_date_format_writes_nothing() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, "%Q");

        let err = service.add(money("1"), "food", None).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
        assert!(!store.exists());
    }

    #[test]
    fn test_delete_removes_every_record_with_the_id() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store, DATE_FORMAT);

        let first = service.add(money("1"), "food", None).unwrap();
        let mut twin = service.add(money("2"), "food", None).unwrap();
        let other = service.add(money("3"), "rent", None).unwrap();
        twin.id = first.id.clone();
        store
            .write_expenses(&[first.clone(), twin, other.clone()])
            .unwrap();

        let outcome = service.delete(first.id.as_str()).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted(first));
        assert_eq!(store.read_expenses().unwrap(), vec![other]);
    }

    #[test]
    fn test_add_keeps_sub_cent_records() {
        let (_temp_dir, store) = create_test_store();
        let record = |id: &str| {
            format!(
                "  {{\n    \"id\": \"{id}\",\n    \"amount\": 0.004,\n    \"category\": \"tips\",\n    \"description\": \"N/A\",\n    \"date\": \"01/15/2025\"\n  }}"
            )
        };
        let records = [record("1"), record("2"), record("3")].join(",\n");
        fs::write(store.path(), format!("[\n{records}\n]")).unwrap();

        let service = ExpenseService::new(&store, DATE_FORMAT);
        service.add(money("1"), "food", None).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with(&format!("[\n{records},\n")));
        assert_eq!(raw.matches("\"amount\": 0.004").count(), 3);

        let stored = store.read_expenses().unwrap();
        let tips = ExpenseSummary::from_expenses(&stored[..3]).unwrap().unwrap();
        assert_eq!(tips.total.to_string(), "$0.01");
    }
}
