use crate::db::storage::KeyValueStorage;
use crate::store::TransactionStore;

/// Returns `Ok(false)` when no transaction has the given id.
pub fn remove_transaction_from_store<S: KeyValueStorage>(
    store: &mut TransactionStore<S>,
    id: &str,
) -> Result<bool, String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Transaction ID cannot be empty.".to_string());
    }

    store
        .remove(id)
        .map_err(|e| format!("Failed to save transactions: {}", e))
}
