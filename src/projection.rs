//! Compound-interest projections
//!
//! Pure functions with no state. Growth of a lump sum compounds annually;
//! contribution sizing compounds monthly at `annual_rate / 12`.

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Number of monthly deposits in `years`
///
/// Counted in `f64` so any `u32` horizon is representable.
pub fn deposit_periods(years: u32) -> f64 {
    f64::from(years) * MONTHS_PER_YEAR
}

/// Value of `principal` after `years` of annual compounding
///
/// Negative rates model depreciation and are accepted as-is.
pub fn future_value(principal: f64, annual_rate: f64, years: u32) -> f64 {
    principal * (1.0 + annual_rate).powf(f64::from(years))
}

/// Monthly deposit that grows to `target_amount` after `years`
///
/// Inverts the future value of an ordinary annuity,
/// `FV = PMT * ((1 + r)^n - 1) / r`, with `r = annual_rate / 12` and
/// `n = years * 12`. A zero monthly rate reduces to a straight division.
///
/// # Errors
///
/// Returns a validation error when `years` is zero, or when the horizon is
/// so long that the growth factor is no longer a finite number.
pub fn required_monthly_contribution(
    target_amount: f64,
    years: u32,
    annual_rate: f64,
) -> BudgetResult<f64> {
    if years == 0 {
        return Err(BudgetError::Validation(
            "years must be greater than zero".into(),
        ));
    }

    let periods = deposit_periods(years);
    let monthly_rate = annual_rate / MONTHS_PER_YEAR;

    if monthly_rate == 0.0 {
        return Ok(target_amount / periods);
    }

    let growth_factor = ((1.0 + monthly_rate).powf(periods) - 1.0) / monthly_rate;
    if !growth_factor.is_finite() {
        return Err(BudgetError::Validation(format!(
            "a {} year horizon is too long to project",
            years
        )));
    }
    Ok(target_amount / growth_factor)
}

/// Lump-sum growth projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentProjection {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: u32,
    pub future_value: f64,
}

impl InvestmentProjection {
    pub fn new(principal: f64, annual_rate: f64, years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            future_value: future_value(principal, annual_rate, years),
        }
    }

    /// Gain (or loss, for negative rates) over the principal
    pub fn total_growth(&self) -> f64 {
        self.future_value - self.principal
    }
}
