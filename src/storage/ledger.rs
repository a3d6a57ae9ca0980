//! Ledger repository for JSON storage
//!
//! Keeps the ledger in memory and rewrites the whole document after every
//! append. An append whose write fails is rolled back, so memory and disk
//! never disagree.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{Expense, Income, KnownCategories, Ledger};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for the income/expense ledger
pub struct LedgerRepository {
    path: PathBuf,
    ledger: RwLock<Ledger>,
    categories: RwLock<KnownCategories>,
    default_categories: Vec<String>,
}

impl LedgerRepository {
    /// Create a new, empty repository
    pub fn new(path: PathBuf, default_categories: Vec<String>) -> Self {
        Self {
            path,
            ledger: RwLock::new(Ledger::new()),
            categories: RwLock::new(KnownCategories::with_defaults(default_categories.clone())),
            default_categories,
        }
    }

    /// Load the ledger from disk
    ///
    /// A missing file yields an empty ledger. A corrupt one is moved aside
    /// first and then treated as missing. Categories used by stored expenses
    /// are registered alongside the defaults.
    pub fn load(&self) -> Result<(), BudgetError> {
        let data: Ledger = read_json_or_default(&self.path);

        let mut categories = KnownCategories::with_defaults(self.default_categories.clone());
        for expense in &data.expenses {
            categories.register(&expense.category);
        }

        tracing::info!(
            income = data.income.len(),
            expenses = data.expenses.len(),
            "loaded ledger"
        );

        *self.write_ledger()? = data;
        *self
            .categories
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))? =
            categories;

        Ok(())
    }

    /// Append an income record and persist
    pub fn append_income(&self, income: Income) -> Result<(), BudgetError> {
        let mut ledger = self.write_ledger()?;
        ledger.push_income(income);

        if let Err(e) = write_json_atomic(&self.path, &*ledger) {
            ledger.income.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Append an expense record, register its category and persist
    pub fn append_expense(&self, expense: Expense) -> Result<(), BudgetError> {
        let mut ledger = self.write_ledger()?;
        let category = expense.category.clone();
        ledger.push_expense(expense);

        if let Err(e) = write_json_atomic(&self.path, &*ledger) {
            ledger.expenses.pop();
            return Err(e);
        }

        let mut categories = self
            .categories
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        if categories.register(&category) {
            tracing::debug!(category = %category, "registered new category");
        }
        Ok(())
    }

    /// Run a read-only computation against the ledger without copying it
    pub fn with_ledger<R>(&self, f: impl FnOnce(&Ledger) -> R) -> Result<R, BudgetError> {
        let ledger = self.read_ledger()?;
        Ok(f(&ledger))
    }

    /// Known categories in sorted order
    pub fn categories(&self) -> Result<Vec<String>, BudgetError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.names())
    }

    /// Check whether a category is already known
    pub fn is_known_category(&self, name: &str) -> Result<bool, BudgetError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.contains(name))
    }

    fn read_ledger(&self) -> Result<std::sync::RwLockReadGuard<'_, Ledger>, BudgetError> {
        self.ledger
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_ledger(&self) -> Result<std::sync::RwLockWriteGuard<'_, Ledger>, BudgetError> {
        self.ledger
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
