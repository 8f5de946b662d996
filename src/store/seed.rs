use crate::models::transaction::{Transaction, TransactionType};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

const fn seed_date(day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(2025, 1, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const SEED: [(&str, TransactionType, i64, &str, &str, NaiveDate); 5] = [
    ("1", TransactionType::Income, 3_500_000, "Salario", "Salario mensual", seed_date(1)),
    ("2", TransactionType::Expense, 150_000, "Alimentación", "Supermercado", seed_date(2)),
    ("3", TransactionType::Expense, 80_000, "Transporte", "Gasolina", seed_date(3)),
    ("4", TransactionType::Income, 500_000, "Freelance", "Proyecto web", seed_date(4)),
    ("5", TransactionType::Expense, 200_000, "Entretenimiento", "Cine y cena", seed_date(5)),
];

/// Example data shown until the user has saved anything.
pub fn default_transactions(created_at: DateTime<Utc>) -> Vec<Transaction> {
    SEED.into_iter()
        .map(|(id, transaction_type, amount, category, description, date)| Transaction {
            id: id.to_string(),
            transaction_type,
            amount: Decimal::from(amount),
            category: category.to_string(),
            description: description.to_string(),
            date,
            created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_are_first_days_of_january() {
        let transactions = default_transactions(Utc::now());
        assert_eq!(transactions.len(), 5);
        for (i, transaction) in transactions.iter().enumerate() {
            assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2025, 1, i as u32 + 1).unwrap());
        }
    }
}
