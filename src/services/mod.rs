//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! recording transactions, summarizing periods, advice and savings goals.

pub mod advice;
pub mod clock;
pub mod goal;
pub mod ledger;
pub mod summary;

pub use advice::{advise, Advice};
pub use clock::{Clock, FixedClock, SystemClock};
pub use goal::GoalTracker;
pub use ledger::LedgerService;
pub use summary::{summarize, SummaryService};
