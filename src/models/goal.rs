//! Savings goal model
//!
//! A goal pairs a target amount and horizon with the monthly deposit needed
//! to reach it. The deposit is computed once, when the goal is created.

use serde::{Deserialize, Serialize};

use crate::error::BudgetResult;
use crate::projection::{deposit_periods, future_value, required_monthly_contribution};

/// A named savings target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub target_amount: f64,
    pub years: u32,
    pub annual_rate: f64,
    pub monthly_investment_required: f64,
}

impl SavingsGoal {
    /// Create a goal, sizing its monthly contribution
    ///
    /// # Errors
    ///
    /// Fails when `years` is zero.
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        years: u32,
        annual_rate: f64,
    ) -> BudgetResult<Self> {
        let monthly_investment_required =
            required_monthly_contribution(target_amount, years, annual_rate)?;

        Ok(Self {
            name: name.into(),
            target_amount,
            years,
            annual_rate,
            monthly_investment_required,
        })
    }

    /// Number of monthly deposits over the goal horizon
    pub fn months(&self) -> f64 {
        deposit_periods(self.years)
    }

    /// Sum of all deposits, before interest
    pub fn total_contributions(&self) -> f64 {
        self.monthly_investment_required * self.months()
    }

    /// Projected final amount
    ///
    /// One year of deposits is treated as a lump sum and compounded annually
    /// over the whole horizon.
    pub fn projected_value(&self) -> f64 {
        future_value(
            self.monthly_investment_required * 12.0,
            self.annual_rate,
            self.years,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_computes_contribution() {
        let goal = SavingsGoal::new("House", 10000.0, 5, 0.06).unwrap();

        assert_eq!(goal.name, "House");
        assert_eq!(goal.months(), 60.0);
        assert!((goal.monthly_investment_required - 143.328015).abs() < 1e-5);
    }

    #[test]
    fn test_projected_value_compounds_one_year_of_deposits() {
        let goal = SavingsGoal::new("House", 10000.0, 5, 0.06).unwrap();

        // 143.328015 * 12 * 1.06^5
        assert!((goal.projected_value() - 2301.662593).abs() < 1e-5);
        assert!((goal.total_contributions() - 8599.680918).abs() < 1e-5);
    }

    #[test]
    fn test_zero_rate_goal() {
        let goal = SavingsGoal::new("Bike", 1200.0, 2, 0.0).unwrap();

        assert_eq!(goal.monthly_investment_required, 50.0);
        assert_eq!(goal.total_contributions(), 1200.0);
        assert_eq!(goal.projected_value(), 600.0);
    }

    #[test]
    fn test_interest_reduces_contributions() {
        let goal = SavingsGoal::new("Retirement", 100000.0, 20, 0.07).unwrap();
        assert!(goal.total_contributions() < goal.target_amount);
        assert!((goal.projected_value() - 8914.155702).abs() < 1e-5);
    }

    #[test]
    fn test_huge_horizon_does_not_overflow() {
        let goal = SavingsGoal::new("Forever", 1000.0, 400_000_000, 0.0).unwrap();
        assert_eq!(goal.months(), 4.8e9);
        assert!((goal.total_contributions() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_years_rejected() {
        assert!(SavingsGoal::new("Now", 500.0, 0, 0.05).is_err());
    }

    #[test]
    fn test_serialization() {
        let goal = SavingsGoal::new("Car", 8000.0, 4, 0.03).unwrap();
        let json = serde_json::to_string(&goal).unwrap();
        let restored: SavingsGoal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal, restored);
    }
}
