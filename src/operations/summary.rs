use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionType};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub const DAILY_WINDOW: usize = 7;
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
    pub monthly_expenses: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal<'a> {
    pub category: &'a Category,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

pub fn total_by_type(transactions: &[Transaction], transaction_type: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

pub fn balance(transactions: &[Transaction]) -> Decimal {
    total_by_type(transactions, TransactionType::Income)
        .saturating_sub(total_by_type(transactions, TransactionType::Expense))
}

pub fn monthly_expenses(transactions: &[Transaction], today: NaiveDate) -> Decimal {
    transactions
        .iter()
        .filter(|t| {
            t.transaction_type == TransactionType::Expense
                && t.date.year() == today.year()
                && t.date.month() == today.month()
        })
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

pub fn overview(transactions: &[Transaction], today: NaiveDate) -> Overview {
    Overview {
        balance: balance(transactions),
        income: total_by_type(transactions, TransactionType::Income),
        expenses: total_by_type(transactions, TransactionType::Expense),
        monthly_expenses: monthly_expenses(transactions, today),
    }
}

// Check only expense entries of the catalog; empty categories are dropped.
pub fn category_breakdown<'a>(
    transactions: &[Transaction],
    categories: &'a [Category],
) -> Vec<CategoryTotal<'a>> {
    let mut breakdown: Vec<CategoryTotal<'a>> = categories
        .iter()
        .filter(|category| category.category_type == TransactionType::Expense)
        .map(|category| CategoryTotal {
            category,
            total: transactions
                .iter()
                .filter(|t| t.transaction_type == TransactionType::Expense && t.category == category.name)
                .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount)),
        })
        .filter(|entry| entry.total > Decimal::ZERO)
        .collect();

    // stable: equal totals keep catalog order
    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

/// Last `DAILY_WINDOW` dates that have data, oldest first.
pub fn daily_series(transactions: &[Transaction]) -> Vec<DailyTotals> {
    let mut by_date: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for transaction in transactions {
        let entry = by_date
            .entry(transaction.date)
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match transaction.transaction_type {
            TransactionType::Income => entry.0 = entry.0.saturating_add(transaction.amount),
            TransactionType::Expense => entry.1 = entry.1.saturating_add(transaction.amount),
        }
    }

    let skip = by_date.len().saturating_sub(DAILY_WINDOW);
    by_date
        .into_iter()
        .skip(skip)
        .map(|(date, (income, expense))| DailyTotals {
            date,
            income,
            expense,
        })
        .collect()
}

pub fn recent(transactions: &[Transaction], limit: usize) -> &[Transaction] {
    &transactions[..limit.min(transactions.len())]
}
