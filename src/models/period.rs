//! Reporting period model
//!
//! A period is a date range anchored at "today" that runs open-ended into
//! the future: every entry dated on or after the period start is included.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative date-range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// No filtering at all
    #[default]
    All,
    /// Today only
    Day,
    /// Since the most recent Monday
    Week,
    /// Since the first of the month
    Month,
    /// Since January 1
    Year,
}

impl Period {
    /// Parse a period name
    ///
    /// Unrecognized names fall back to [`Period::All`] instead of failing, so
    /// a stale or misspelled filter shows everything rather than nothing.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "day" | "today" => Self::Day,
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            "all" | "none" | "" => Self::All,
            other => {
                tracing::debug!(period = other, "unrecognized period, not filtering");
                Self::All
            }
        }
    }

    /// First date included in this period, or `None` when unfiltered
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::Day => Some(today),
            Self::Week => {
                let offset = today.weekday().num_days_from_monday() as i64;
                Some(today - Duration::days(offset))
            }
            Self::Month => today.with_day(1),
            Self::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1),
        }
    }

    /// Whether a date falls inside this period
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start_date(today) {
            Some(start) => date >= start,
            None => true,
        }
    }

    /// Human-friendly label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Day => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Year => "This Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        };
        write!(f, "{}", name)
    }
}
