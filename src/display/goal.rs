//! Savings goal and projection display formatting

use crate::models::SavingsGoal;
use crate::projection::InvestmentProjection;

use super::{format_money, format_rate, separator};

/// Format a full goal analysis
pub fn format_goal_details(goal: &SavingsGoal, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Target Amount:               {}\n",
        format_money(goal.target_amount, symbol)
    ));
    output.push_str(&format!("Time Frame:                  {} years\n", goal.years));
    output.push_str(&format!(
        "Annual Interest Rate:        {}\n",
        format_rate(goal.annual_rate)
    ));
    output.push_str(&format!(
        "Monthly Investment Required: {}\n",
        format_money(goal.monthly_investment_required, symbol)
    ));
    output.push_str(&format!(
        "Total Contributions:         {}\n",
        format_money(goal.total_contributions(), symbol)
    ));
    output.push_str(&format!(
        "Projected Final Amount:      {}\n",
        format_money(goal.projected_value(), symbol)
    ));

    output
}

/// Format all goals, one block each
pub fn format_goal_list(goals: &[SavingsGoal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals have been set.\n".to_string();
    }

    goals
        .iter()
        .map(|goal| format_goal_details(goal, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a lump-sum growth projection
pub fn format_projection(projection: &InvestmentProjection, symbol: &str) -> String {
    format!(
        "Initial Investment:     {}\n\
         Annual Interest Rate:   {}\n\
         Investment Period:      {} years\n\
         Projected Future Value: {}\n\
         Total Growth:           {}\n",
        format_money(projection.principal, symbol),
        format_rate(projection.annual_rate),
        projection.years,
        format_money(projection.future_value, symbol),
        format_money(projection.total_growth(), symbol),
    )
}
