//! Transaction list display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::TransactionEntry;

use super::format_money;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category/Source")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format entries as a table
pub fn format_transaction_table(entries: &[TransactionEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = entries.iter().map(|entry| TransactionRow {
        date: entry.date.format("%Y-%m-%d").to_string(),
        kind: entry.kind.to_string(),
        category: entry.category.clone(),
        description: entry.description.clone(),
        amount: format_money(entry.amount, symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
