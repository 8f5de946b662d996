mod db;
mod error;
mod models;
mod operations;
mod store;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use db::storage::SqliteStorage;
use models::transaction::{Transaction, TransactionType};
use operations::add::add_transaction_to_store;
use operations::format::{format_amount, format_signed};
use operations::remove::remove_transaction_from_store;
use operations::summary::{self, RECENT_LIMIT};
use operations::update::{update_transaction_in_store, EditInput};
use std::path::PathBuf;
use store::TransactionStore;

#[derive(Parser)]
#[command(name = "fino", version, about = "Personal finance dashboard")]
struct Cli {
    /// SQLite file holding the saved transactions
    #[arg(long, global = true, default_value = "finance_dashboard.db")]
    db: PathBuf,

    /// Reference date for the monthly totals (defaults to today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<UserCommands>,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Open the interactive dashboard
    Dashboard,
    /// Add a transaction: "date(YYYY-MM-DD), description, amount, type(income/expense), category"
    Add { details: String },
    /// Change some fields of a transaction
    Edit {
        id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long = "type")]
        transaction_type: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove a transaction by id
    Remove { id: String },
    /// Print every transaction, newest first
    List,
    /// Print totals, category breakdown, daily trend and recent activity
    Summary,
    /// Print the category catalog
    Categories,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let conn = db::connection::establish_connection(&cli.db)
        .map_err(|e| format!("Failed to open database '{}': {}", cli.db.display(), e))?;
    let mut store = TransactionStore::load(SqliteStorage::new(conn));

    match cli.command.unwrap_or(UserCommands::Dashboard) {
        UserCommands::Dashboard => operations::dashboard::run_dashboard(&mut store, today)?,
        UserCommands::Add { details } => {
            let id = add_transaction_to_store(&mut store, &details)?;
            println!("Transaction {} added successfully!", id);
        }
        UserCommands::Edit {
            id,
            date,
            description,
            amount,
            transaction_type,
            category,
        } => {
            let input = EditInput {
                date: date.as_deref(),
                description: description.as_deref(),
                amount: amount.as_deref(),
                transaction_type: transaction_type.as_deref(),
                category: category.as_deref(),
            };
            if update_transaction_in_store(&mut store, &id, &input)? {
                if let Some(transaction) = store.get(id.trim()) {
                    println!("Transaction updated: {}", describe(transaction));
                }
            } else {
                println!("Transaction with ID {} not found.", id);
            }
        }
        UserCommands::Remove { id } => {
            if remove_transaction_from_store(&mut store, &id)? {
                println!("Transaction removed successfully.");
            } else {
                println!("Transaction with ID {} not found.", id);
            }
        }
        UserCommands::List => {
            if store.transactions().is_empty() {
                println!("No transactions.");
            }
            for transaction in store.transactions() {
                println!("{}", describe(transaction));
            }
        }
        UserCommands::Summary => print_summary(&store, today),
        UserCommands::Categories => {
            for category in store.categories() {
                println!(
                    "{:>2}  {} {:16} {:8} {}",
                    category.id, category.icon, category.name, category.category_type, category.color
                );
            }
        }
    }

    Ok(())
}

fn describe(transaction: &Transaction) -> String {
    format!(
        "{}  {}  {:>14}  {:16} {}  ({})",
        transaction.date.format("%Y-%m-%d"),
        transaction.transaction_type,
        format_signed(transaction),
        transaction.category,
        transaction.description,
        transaction.id
    )
}

fn print_summary<S: db::storage::KeyValueStorage>(store: &TransactionStore<S>, today: NaiveDate) {
    let transactions = store.transactions();
    let overview = summary::overview(transactions, today);

    println!("Balance:        {}", format_amount(overview.balance));
    println!("Income:         {}", format_amount(overview.income));
    println!("Expenses:       {}", format_amount(overview.expenses));
    println!(
        "This month:     {} ({})",
        format_amount(overview.monthly_expenses),
        today.format("%Y-%m")
    );

    println!();
    println!("Expenses by category:");
    let breakdown = summary::category_breakdown(transactions, store.categories());
    if breakdown.is_empty() {
        println!("  (none)");
    }
    for entry in &breakdown {
        println!(
            "  {} {:16} {:>14}",
            entry.category.icon,
            entry.category.name,
            format_amount(entry.total)
        );
    }

    println!();
    println!("Daily trend:");
    for day in summary::daily_series(transactions) {
        println!(
            "  {}  {:>7} {:>14}  {:>7} {:>14}",
            day.date.format("%Y-%m-%d"),
            TransactionType::Income,
            format_amount(day.income),
            TransactionType::Expense,
            format_amount(day.expense)
        );
    }

    println!();
    println!("Recent transactions:");
    for transaction in summary::recent(transactions, RECENT_LIMIT) {
        println!("  {}", describe(transaction));
    }
}
