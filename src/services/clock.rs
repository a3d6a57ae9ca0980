//! Clock abstraction
//!
//! Period filters and default dates depend on "today"; services read it
//! through [`Clock`] so tests can pin the date.

use chrono::{Local, NaiveDate};

/// Source of the current date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local system date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
