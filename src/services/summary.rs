//! Summary calculation
//!
//! Turns a period-filtered view of the ledger into totals, balance and a
//! per-category spending breakdown.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::error::BudgetResult;
use crate::models::{Ledger, Period, Summary};
use crate::storage::Storage;

use super::clock::Clock;

/// Summarize the ledger for `period`, anchored at `today`
pub fn summarize(ledger: &Ledger, period: Period, today: NaiveDate) -> Summary {
    let total_income: f64 = ledger.income_in_period(period, today).map(|i| i.amount).sum();

    let mut total_expenses = 0.0;
    let mut expenses_by_category: BTreeMap<String, f64> = BTreeMap::new();
    for expense in ledger.expenses_in_period(period, today) {
        total_expenses += expense.amount;
        *expenses_by_category
            .entry(expense.category.clone())
            .or_insert(0.0) += expense.amount;
    }

    Summary {
        period,
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        expenses_by_category,
    }
}

/// Service that summarizes the stored ledger
pub struct SummaryService<'a> {
    storage: &'a Storage,
    clock: &'a dyn Clock,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage, clock: &'a dyn Clock) -> Self {
        Self { storage, clock }
    }

    /// Summary of the current ledger for `period`
    pub fn summary(&self, period: Period) -> BudgetResult<Summary> {
        let today = self.clock.today();
        self.storage
            .ledger
            .with_ledger(|ledger| summarize(ledger, period, today))
    }
}
