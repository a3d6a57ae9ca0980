//! Ledger service
//!
//! Records income and expenses and answers listing queries. Amounts are
//! trusted as given; callers reject non-positive values before they get here.

use chrono::NaiveDate;

use crate::error::BudgetResult;
use crate::models::{Expense, Income, Period, TransactionEntry, TransactionFilter};
use crate::storage::Storage;

use super::clock::Clock;

/// Service for recording and listing transactions
pub struct LedgerService<'a> {
    storage: &'a Storage,
    clock: &'a dyn Clock,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage, clock: &'a dyn Clock) -> Self {
        Self { storage, clock }
    }

    /// Record income, dated today unless a date is given
    pub fn record_income(
        &self,
        amount: f64,
        source: &str,
        date: Option<NaiveDate>,
    ) -> BudgetResult<Income> {
        let income = Income::new(amount, source, date.unwrap_or_else(|| self.clock.today()));
        self.storage.ledger.append_income(income.clone())?;

        tracing::debug!(amount, source, date = %income.date, "recorded income");
        Ok(income)
    }

    /// Record an expense, dated today unless a date is given
    ///
    /// A category the ledger has not seen before becomes known.
    pub fn record_expense(
        &self,
        amount: f64,
        category: &str,
        description: &str,
        date: Option<NaiveDate>,
    ) -> BudgetResult<Expense> {
        let expense = Expense::new(
            amount,
            category,
            description,
            date.unwrap_or_else(|| self.clock.today()),
        );
        self.storage.ledger.append_expense(expense.clone())?;

        tracing::debug!(amount, category, date = %expense.date, "recorded expense");
        Ok(expense)
    }

    /// Every entry dated inside `period`
    pub fn transactions_in_period(&self, period: Period) -> BudgetResult<Vec<TransactionEntry>> {
        let today = self.clock.today();
        self.storage
            .ledger
            .with_ledger(|ledger| ledger.transactions_in_period(period, today))
    }

    /// The newest `limit` entries matching `filter`
    pub fn recent_transactions(
        &self,
        filter: TransactionFilter,
        limit: usize,
    ) -> BudgetResult<Vec<TransactionEntry>> {
        self.storage
            .ledger
            .with_ledger(|ledger| ledger.recent_transactions(filter, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BudgetPaths, Settings};
    use crate::models::TransactionKind;
    use crate::services::clock::FixedClock;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_record_income_defaults_to_today() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = FixedClock(date(2024, 3, 15));
        let service = LedgerService::new(&storage, &clock);

        let income = service.record_income(1200.0, "Freelancing", None).unwrap();
        assert_eq!(income.date, date(2024, 3, 15));

        let explicit = service
            .record_income(50.0, "Gift", Some(date(2024, 1, 2)))
            .unwrap();
        assert_eq!(explicit.date, date(2024, 1, 2));
    }

    #[test]
    fn test_record_expense_registers_category() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = FixedClock(date(2024, 3, 15));
        let service = LedgerService::new(&storage, &clock);

        assert!(!storage.ledger.categories().unwrap().contains(&"Pets".to_string()));
        service
            .record_expense(30.0, "Pets", "Vet visit", None)
            .unwrap();
        assert!(storage.ledger.categories().unwrap().contains(&"Pets".to_string()));
        assert_eq!(storage.ledger.categories().unwrap().len(), 11);
    }

    #[test]
    fn test_amounts_are_not_validated_here() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = FixedClock(date(2024, 3, 15));
        let service = LedgerService::new(&storage, &clock);

        let expense = service.record_expense(-5.0, "Debt", "Refund", None).unwrap();
        assert_eq!(expense.amount, -5.0);
    }

    #[test]
    fn test_transactions_in_period_uses_clock() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = FixedClock(date(2024, 3, 15));
        let service = LedgerService::new(&storage, &clock);

        service
            .record_income(3000.0, "Salary", Some(date(2024, 3, 1)))
            .unwrap();
        service
            .record_expense(90.0, "Utilities", "Power", Some(date(2024, 2, 20)))
            .unwrap();
        service
            .record_expense(40.0, "Groceries", "Market", None)
            .unwrap();

        assert_eq!(service.transactions_in_period(Period::Day).unwrap().len(), 1);
        assert_eq!(service.transactions_in_period(Period::Month).unwrap().len(), 2);
        assert_eq!(service.transactions_in_period(Period::Year).unwrap().len(), 3);
        assert_eq!(
            service.transactions_in_period(Period::parse("bogus")).unwrap().len(),
            3
        );
    }

    #[test]
    fn test_recent_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = FixedClock(date(2024, 3, 15));
        let service = LedgerService::new(&storage, &clock);

        service
            .record_income(3000.0, "Salary", Some(date(2024, 3, 1)))
            .unwrap();
        service
            .record_expense(90.0, "Utilities", "Power", Some(date(2024, 3, 10)))
            .unwrap();

        let recent = service
            .recent_transactions(TransactionFilter::All, 10)
            .unwrap();
        assert_eq!(recent[0].kind, TransactionKind::Expense);
        assert_eq!(recent[1].kind, TransactionKind::Income);
    }
}
