use crate::db::storage::KeyValueStorage;
use crate::models::category::{categories_for, Category};
use crate::models::transaction::{NewTransaction, TransactionType};
use crate::store::TransactionStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const DESCRIPTION_MAX_LEN: usize = 255;

pub fn add_transaction_to_store<S: KeyValueStorage>(
    store: &mut TransactionStore<S>,
    input: &str,
) -> Result<String, String> {
    let candidate = create_transaction(input, store.categories())?;
    store
        .add(candidate)
        .map_err(|e| format!("Failed to save transaction: {}", e))
}

/// Parses `date, description, amount, type, category` into a candidate
/// transaction. The category must name a catalog entry of the same type.
pub fn create_transaction(input: &str, categories: &[Category]) -> Result<NewTransaction, String> {
    let detail_parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() != 5 {
        return Err(format!(
            "Invalid number of details provided. Expected 5 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let date = parse_date(detail_parts[0])?;
    let description = parse_description(detail_parts[1])?;
    let amount = parse_amount(detail_parts[2])?;
    let transaction_type = detail_parts[3].parse::<TransactionType>()?;
    let category = match_category(detail_parts[4], transaction_type, categories)?;

    Ok(NewTransaction {
        transaction_type,
        amount,
        category,
        description,
        date,
    })
}

pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())
}

pub fn parse_amount(input: &str) -> Result<Decimal, String> {
    let amount = input.trim().parse::<Decimal>().map_err(|_| {
        format!(
            "Invalid amount format {}. Please provide a valid decimal number.",
            input.trim()
        )
    })?;
    if amount <= Decimal::ZERO {
        return Err("Amount must be greater than 0".to_string());
    }
    Ok(amount)
}

pub fn parse_description(input: &str) -> Result<String, String> {
    let description = input.trim();
    if description.is_empty() {
        return Err("Description cannot be empty".to_string());
    }
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err("Description too long".to_string());
    }
    Ok(description.to_string())
}

fn match_category(
    input: &str,
    transaction_type: TransactionType,
    categories: &[Category],
) -> Result<String, String> {
    if input.is_empty() {
        return Err("Category cannot be empty".to_string());
    }
    let allowed = categories_for(categories, transaction_type);
    allowed
        .iter()
        .find(|category| category.name.to_lowercase() == input.to_lowercase())
        .map(|category| category.name.to_string())
        .ok_or_else(|| {
            let names: Vec<&str> = allowed.iter().map(|c| c.name).collect();
            format!(
                "Unknown {} category '{}'. Choose one of: {}",
                transaction_type,
                input,
                names.join(", ")
            )
        })
}
