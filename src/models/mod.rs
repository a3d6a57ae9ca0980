//! Core data models for the budget tracker
//!
//! Income and expense records, the ledger that holds them, reporting
//! periods, derived summaries and savings goals.

pub mod category;
pub mod goal;
pub mod ledger;
pub mod period;
pub mod summary;
pub mod transaction;

pub use category::KnownCategories;
pub use goal::SavingsGoal;
pub use ledger::Ledger;
pub use period::Period;
pub use summary::Summary;
pub use transaction::{Expense, Income, TransactionEntry, TransactionFilter, TransactionKind};
