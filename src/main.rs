use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_advice_command, handle_categories_command, handle_expense_command,
    handle_goal_command, handle_income_command, handle_project_command, handle_summary_command,
    handle_transactions_command, ExpenseCommands, GoalCommands, IncomeCommands,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::services::SystemClock;
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Records income and expenses, summarizes spending by period, \
                  offers simple budgeting advice and plans savings goals with \
                  compound interest."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show totals, balance and spending by category
    Summary {
        /// Period: all, day, week, month or year
        #[arg(short, long, default_value = "all")]
        period: String,
    },

    /// Show spending advice
    Advice {
        /// Period: all, day, week, month or year
        #[arg(short, long, default_value = "all")]
        period: String,
    },

    /// List recent transactions
    #[command(alias = "txn")]
    Transactions {
        /// Which entries to show: all, income or expenses
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: String,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List known expense categories
    Categories,

    /// Project lump-sum investment growth
    Project {
        /// Initial investment
        principal: f64,
        /// Annual interest rate (e.g., 0.05 for 5%)
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Years to project
        years: u32,
    },

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    budget_tracker::init_tracing();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths, &settings)?;
    storage.load_all()?;

    let clock = SystemClock;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, &clock, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, &clock, cmd)?,
        Some(Commands::Summary { period }) => {
            handle_summary_command(&storage, &settings, &clock, &period)?
        }
        Some(Commands::Advice { period }) => handle_advice_command(&storage, &clock, &period)?,
        Some(Commands::Transactions { kind, limit }) => {
            handle_transactions_command(&storage, &settings, &clock, &kind, limit)?
        }
        Some(Commands::Categories) => handle_categories_command(&storage)?,
        Some(Commands::Project {
            principal,
            rate,
            years,
        }) => handle_project_command(&settings, principal, rate, years)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Goals file:     {}", paths.goals_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Recent limit:    {}", settings.recent_limit);
        }
        None => {
            println!("Budget Tracker - personal budgeting from the command line");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
