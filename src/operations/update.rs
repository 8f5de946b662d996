use crate::db::storage::KeyValueStorage;
use crate::models::transaction::{TransactionPatch, TransactionType};
use crate::operations::add::{parse_amount, parse_date, parse_description};
use crate::store::TransactionStore;

/// Raw edit fields as typed by the user; `None` leaves the field untouched.
#[derive(Debug, Default)]
pub struct EditInput<'a> {
    pub date: Option<&'a str>,
    pub description: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub transaction_type: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// Validates each supplied field on its own. A new type is not checked
/// against the record's category.
pub fn build_patch(input: &EditInput) -> Result<TransactionPatch, String> {
    let category = match input.category.map(str::trim) {
        Some("") => return Err("Category cannot be empty".to_string()),
        other => other.map(str::to_string),
    };

    let patch = TransactionPatch {
        transaction_type: input
            .transaction_type
            .map(|t| t.parse::<TransactionType>())
            .transpose()?,
        amount: input.amount.map(parse_amount).transpose()?,
        category,
        description: input.description.map(parse_description).transpose()?,
        date: input.date.map(parse_date).transpose()?,
    };

    if patch.is_empty() {
        return Err("Nothing to update. Provide at least one field to change.".to_string());
    }
    Ok(patch)
}

pub fn update_transaction_in_store<S: KeyValueStorage>(
    store: &mut TransactionStore<S>,
    id: &str,
    input: &EditInput,
) -> Result<bool, String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Transaction ID cannot be empty.".to_string());
    }
    let patch = build_patch(input)?;
    store
        .update(id, patch)
        .map_err(|e| format!("Failed to save transaction: {}", e))
}
