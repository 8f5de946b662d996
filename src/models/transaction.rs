use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err("Invalid transaction type. Use 'income' or 'expense'.".to_string()),
        }
    }
}

/// A recorded income or expense. Serialized with the camelCase layout kept in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_candidate(id: String, created_at: DateTime<Utc>, candidate: NewTransaction) -> Self {
        Self {
            id,
            transaction_type: candidate.transaction_type,
            amount: candidate.amount,
            category: candidate.category,
            description: candidate.description,
            date: candidate.date,
            created_at,
        }
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(transaction_type) = patch.transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

/// A transaction as submitted by the user, before an id and creation time are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.transaction_type.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_transaction() -> Transaction {
        Transaction {
            id: "1".to_string(),
            transaction_type: TransactionType::Expense,
            amount: Decimal::new(150000, 0),
            category: "Alimentación".to_string(),
            description: "Supermercado".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            created_at: DateTime::parse_from_rfc3339("2025-01-02T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!(" expense ".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serialized_layout() {
        let value = serde_json::to_value(create_test_transaction()).unwrap();

        assert_eq!(value["type"], "expense");
        assert_eq!(value["date"], "2025-01-02");
        assert_eq!(value["amount"].as_f64(), Some(150000.0));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("transaction_type").is_none());
    }

    #[test]
    fn test_amount_is_written_with_every_digit() {
        let mut transaction = create_test_transaction();
        transaction.amount = Decimal::new(123456789012345, 5);

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains(r#""amount":1234567890.12345"#));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transaction);
    }

    #[test]
    fn test_deserialize_integer_amount() {
        let json = r#"{
            "id": "7",
            "type": "income",
            "amount": 3500000,
            "category": "Salario",
            "description": "Salario mensual",
            "date": "2025-01-01",
            "createdAt": "2025-01-01T08:30:00.000Z"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.amount, Decimal::new(3500000, 0));
        assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_apply_patch_changes_only_given_fields() {
        let original = create_test_transaction();
        let mut edited = original.clone();

        edited.apply(TransactionPatch {
            description: Some("Mercado semanal".to_string()),
            ..TransactionPatch::default()
        });

        assert_eq!(edited.description, "Mercado semanal");
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.amount, original.amount);
        assert_eq!(edited.category, original.category);
        assert_eq!(edited.date, original.date);
        assert_eq!(edited.created_at, original.created_at);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TransactionPatch::default().is_empty());
        let patch = TransactionPatch {
            amount: Some(Decimal::ONE),
            ..TransactionPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
