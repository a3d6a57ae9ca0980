//! Period summary model
//!
//! A derived, never-persisted aggregate of a filtered ledger.

use serde::Serialize;
use std::collections::BTreeMap;

use super::period::Period;

/// Totals and per-category spending for one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub period: Period,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Always `total_income - total_expenses`
    pub balance: f64,
    /// Only categories with at least one expense in the period appear here
    pub expenses_by_category: BTreeMap<String, f64>,
}

impl Summary {
    /// Amount spent in a category, 0 when it has no expenses
    pub fn spent_in(&self, category: &str) -> f64 {
        self.expenses_by_category
            .get(category)
            .copied()
            .unwrap_or(0.0)
    }

    /// Categories ordered by amount, largest first
    ///
    /// Equal amounts keep name order.
    pub fn categories_by_amount(&self) -> Vec<(&str, f64)> {
        let mut categories: Vec<(&str, f64)> = self
            .expenses_by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        categories.sort_by(|a, b| b.1.total_cmp(&a.1));
        categories
    }

    /// The category with the largest amount
    pub fn top_category(&self) -> Option<&str> {
        self.categories_by_amount().first().map(|(name, _)| *name)
    }

    /// Share of total expenses spent in a category, as a percentage
    pub fn category_percentage(&self, category: &str) -> f64 {
        if self.total_expenses > 0.0 {
            self.spent_in(category) / self.total_expenses * 100.0
        } else {
            0.0
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.balance < 0.0
    }
}
