mod seed;

use crate::db::storage::KeyValueStorage;
use crate::error::StorageError;
use crate::models::category::{default_categories, Category};
use crate::models::transaction::{NewTransaction, Transaction, TransactionPatch};
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

pub use seed::default_transactions;

pub const STORAGE_KEY: &str = "finance_transactions";

/// Newest-first transaction list; every change is written through to storage.
pub struct TransactionStore<S: KeyValueStorage> {
    storage: S,
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
}

impl<S: KeyValueStorage> TransactionStore<S> {
    pub fn load(storage: S) -> Self {
        let transactions = match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Transaction>>(&raw) {
                Ok(transactions) => {
                    info!("Loaded {} transactions from storage", transactions.len());
                    transactions
                }
                Err(e) => {
                    warn!("Stored transactions are malformed, using defaults: {}", e);
                    default_transactions(Utc::now())
                }
            },
            Ok(None) => {
                info!("No stored transactions, using defaults");
                default_transactions(Utc::now())
            }
            Err(e) => {
                warn!("Failed to read stored transactions, using defaults: {}", e);
                default_transactions(Utc::now())
            }
        };

        Self {
            storage,
            transactions,
            categories: default_categories(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, candidate: NewTransaction) -> Result<String, StorageError> {
        let id = Uuid::new_v4().to_string();
        let transaction = Transaction::from_candidate(id.clone(), Utc::now(), candidate);
        self.transactions.insert(0, transaction);
        debug!("Added transaction {}", id);
        self.persist()?;
        Ok(id)
    }

    // Check the id first; unknown ids leave storage untouched.
    pub fn update(&mut self, id: &str, patch: TransactionPatch) -> Result<bool, StorageError> {
        let Some(transaction) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        transaction.apply(patch);
        debug!("Updated transaction {}", id);
        self.persist()?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        self.transactions.remove(pos);
        debug!("Removed transaction {}", id);
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.transactions)?;
        self.storage.set_item(STORAGE_KEY, &raw)
    }
}
