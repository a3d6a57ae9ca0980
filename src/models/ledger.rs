//! Ledger model
//!
//! The append-only record of income and expenses. This is also the exact
//! shape of the persisted document: `{"income": [...], "expenses": [...]}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::Period;
use super::transaction::{Expense, Income, TransactionEntry, TransactionFilter};

/// Income and expenses in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub income: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_income(&mut self, income: Income) {
        self.income.push(income);
    }

    pub fn push_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    /// Income dated inside `period`
    pub fn income_in_period(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> impl Iterator<Item = &Income> {
        self.income
            .iter()
            .filter(move |i| period.contains(i.date, today))
    }

    /// Expenses dated inside `period`
    pub fn expenses_in_period(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> impl Iterator<Item = &Expense> {
        self.expenses
            .iter()
            .filter(move |e| period.contains(e.date, today))
    }

    /// Every entry inside `period`, income first, each side in insertion order
    pub fn transactions_in_period(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> Vec<TransactionEntry> {
        self.income_in_period(period, today)
            .map(TransactionEntry::from)
            .chain(self.expenses_in_period(period, today).map(TransactionEntry::from))
            .collect()
    }

    /// Newest entries first, at most `limit` of them
    ///
    /// Entries sharing a date keep income-before-expense and then insertion
    /// order.
    pub fn recent_transactions(
        &self,
        filter: TransactionFilter,
        limit: usize,
    ) -> Vec<TransactionEntry> {
        let mut entries: Vec<TransactionEntry> = Vec::new();

        if filter.includes_income() {
            entries.extend(self.income.iter().map(TransactionEntry::from));
        }
        if filter.includes_expenses() {
            entries.extend(self.expenses.iter().map(TransactionEntry::from));
        }

        // sort_by is stable, so equal dates keep the order built above
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(limit);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.push_income(Income::new(3000.0, "Salary", date(2024, 1, 5)));
        ledger.push_expense(Expense::new(500.0, "Groceries", "Weekly shop", date(2024, 1, 6)));
        ledger.push_expense(Expense::new(1000.0, "Housing", "Rent", date(2024, 1, 1)));
        ledger
    }

    #[test]
    fn test_all_period_returns_everything() {
        let ledger = sample_ledger();
        let entries = ledger.transactions_in_period(Period::All, date(2030, 1, 1));

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, TransactionKind::Income);
        assert_eq!(entries[1].category, "Groceries");
        assert_eq!(entries[2].category, "Housing");
    }

    #[test]
    fn test_period_filters_by_start_date() {
        let ledger = sample_ledger();
        // Saturday 2024-01-06: the week started on Monday 2024-01-01
        let today = date(2024, 1, 6);

        assert_eq!(ledger.transactions_in_period(Period::Day, today).len(), 1);
        assert_eq!(ledger.transactions_in_period(Period::Week, today).len(), 3);

        // Thursday 2024-01-04: day keeps everything dated on or after today
        let today = date(2024, 1, 4);
        assert_eq!(ledger.transactions_in_period(Period::Day, today).len(), 2);
    }

    #[test]
    fn test_previous_year_excluded_from_year() {
        let mut ledger = sample_ledger();
        ledger.push_expense(Expense::new(80.0, "Utilities", "Power", date(2023, 12, 31)));

        let today = date(2024, 2, 1);
        let entries = ledger.transactions_in_period(Period::Year, today);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.date >= date(2024, 1, 1)));
    }

    #[test]
    fn test_recent_transactions_sorted_descending() {
        let ledger = sample_ledger();
        let recent = ledger.recent_transactions(TransactionFilter::All, 10);

        let dates: Vec<_> = recent.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 6), date(2024, 1, 5), date(2024, 1, 1)]);
    }

    #[test]
    fn test_recent_transactions_limit_and_filter() {
        let ledger = sample_ledger();

        let recent = ledger.recent_transactions(TransactionFilter::All, 2);
        assert_eq!(recent.len(), 2);

        let expenses = ledger.recent_transactions(TransactionFilter::Expenses, 10);
        assert_eq!(expenses.len(), 2);
        assert!(expenses.iter().all(|e| e.kind == TransactionKind::Expense));

        let income = ledger.recent_transactions(TransactionFilter::Income, 10);
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].description, "Salary");

        assert!(ledger.recent_transactions(TransactionFilter::All, 0).is_empty());
    }

    #[test]
    fn test_recent_transactions_ties_keep_insertion_order() {
        let mut ledger = Ledger::new();
        let day = date(2024, 5, 1);
        ledger.push_expense(Expense::new(1.0, "A", "first", day));
        ledger.push_income(Income::new(2.0, "Gift", day));
        ledger.push_expense(Expense::new(3.0, "B", "second", day));

        let recent = ledger.recent_transactions(TransactionFilter::All, 10);
        let labels: Vec<_> = recent.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(labels, vec!["Gift", "first", "second"]);
    }

    #[test]
    fn test_deserialize_missing_lists() {
        let ledger: Ledger = serde_json::from_str(r#"{"income": []}"#).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_deserialize_persisted_document() {
        let json = r#"{
            "income": [{"amount": 3000.0, "source": "Salary", "date": "2024-01-05"}],
            "expenses": [
                {"amount": 500, "category": "Groceries", "description": "Weekly shop", "date": "2024-01-06"}
            ]
        }"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();

        assert_eq!(ledger.income[0].source, "Salary");
        assert_eq!(ledger.expenses[0].amount, 500.0);
        assert_eq!(ledger.expenses[0].date, date(2024, 1, 6));
    }
}
