//! CLI commands for summaries and advice

use crate::config::settings::Settings;
use crate::display::{format_advice, format_summary};
use crate::error::BudgetResult;
use crate::models::Period;
use crate::services::{advise, Clock, SummaryService};
use crate::storage::Storage;

/// Print the summary for a period
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    period: &str,
) -> BudgetResult<()> {
    let summary = SummaryService::new(storage, clock).summary(Period::parse(period))?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Print spending advice for a period
pub fn handle_advice_command(
    storage: &Storage,
    clock: &dyn Clock,
    period: &str,
) -> BudgetResult<()> {
    let summary = SummaryService::new(storage, clock).summary(Period::parse(period))?;

    println!("Spending Advice ({})", summary.period.label());
    print!("{}", format_advice(&advise(&summary)));
    Ok(())
}
