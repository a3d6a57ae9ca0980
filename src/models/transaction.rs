//! Transaction models
//!
//! Income and expense records as they are stored in the ledger, plus the
//! uniform tagged view used when both kinds are listed together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Money received, labelled by where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: f64,
    pub source: String,
    pub date: NaiveDate,
}

impl Income {
    pub fn new(amount: f64, source: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            source: source.into(),
            date,
        }
    }
}

/// Money spent, labelled by category and a free-text description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }
}

/// Which side of the ledger an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A ledger entry of either kind, flattened to a common shape
///
/// For income both `category` and `description` carry the source name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEntry {
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

impl From<&Income> for TransactionEntry {
    fn from(income: &Income) -> Self {
        Self {
            kind: TransactionKind::Income,
            date: income.date,
            amount: income.amount,
            category: income.source.clone(),
            description: income.source.clone(),
        }
    }
}

impl From<&Expense> for TransactionEntry {
    fn from(expense: &Expense) -> Self {
        Self {
            kind: TransactionKind::Expense,
            date: expense.date,
            amount: expense.amount,
            category: expense.category.clone(),
            description: expense.description.clone(),
        }
    }
}

/// Selects which kinds of entries a listing includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expenses,
}

impl TransactionFilter {
    pub fn includes_income(&self) -> bool {
        matches!(self, Self::All | Self::Income)
    }

    pub fn includes_expenses(&self) -> bool {
        matches!(self, Self::All | Self::Expenses)
    }
}

impl FromStr for TransactionFilter {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expenses),
            other => Err(BudgetError::Validation(format!(
                "Unknown transaction type '{}': expected all, income or expenses",
                other
            ))),
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expenses => write!(f, "expenses"),
        }
    }
}
