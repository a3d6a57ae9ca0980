//! Spending advice
//!
//! Stateless heuristics over a [`Summary`]. Rules are checked in a fixed
//! order and the first two are independent of each other.

use std::fmt;

use crate::models::Summary;

/// Category whose spending counts as saving
pub const SAVINGS_CATEGORY: &str = "Savings";

/// Fraction of income the savings category should reach
pub const SAVINGS_RATE_TARGET: f64 = 0.10;

/// One piece of advice
#[derive(Debug, Clone, PartialEq)]
pub enum Advice {
    /// Expenses exceed income
    Overspending,
    /// The largest category while overspending
    CutBack { category: String },
    /// Savings fall short of the target share of income
    SaveMore,
    /// No rule fired
    LooksGood,
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overspending => write!(f, "Warning: You're spending more than you earn!"),
            Self::CutBack { category } => write!(
                f,
                "Consider cutting back on {}, your highest expense category.",
                category
            ),
            Self::SaveMore => write!(
                f,
                "Try to save at least {:.0}% of your income.",
                SAVINGS_RATE_TARGET * 100.0
            ),
            Self::LooksGood => write!(f, "Your budget looks good!"),
        }
    }
}

/// Evaluate the advice rules against a summary
///
/// The savings check is a strict `savings < 10% of income`. With zero
/// income the threshold is zero, so it never fires then: non-negative
/// savings are never below zero.
pub fn evaluate(summary: &Summary) -> Vec<Advice> {
    let mut advice = Vec::new();

    if summary.is_overspent() {
        advice.push(Advice::Overspending);
        if let Some(category) = summary.top_category() {
            advice.push(Advice::CutBack {
                category: category.to_string(),
            });
        }
    }

    if summary.spent_in(SAVINGS_CATEGORY) < summary.total_income * SAVINGS_RATE_TARGET {
        advice.push(Advice::SaveMore);
    }

    if advice.is_empty() {
        advice.push(Advice::LooksGood);
    }
    advice
}

/// Advice as display strings
pub fn advise(summary: &Summary) -> Vec<String> {
    evaluate(summary).iter().map(ToString::to_string).collect()
}
