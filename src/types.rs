//! Core types for the transaction record store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a transaction record.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn next(self) -> Self {
        RecordId(self.0 + 1)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// Sneaker brand a transaction relates to.
///
/// Non-exhaustive so new brands can be added without breaking callers.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Nike,
    Adidas,
    Puma,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Nike => write!(f, "Nike"),
            Brand::Adidas => write!(f, "Adidas"),
            Brand::Puma => write!(f, "Puma"),
        }
    }
}

/// A single transaction record in the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier (assigned by the store, immutable thereafter).
    pub id: RecordId,

    /// Calendar date of the transaction.
    pub date: NaiveDate,

    /// Amount; no sign or currency constraint is enforced here.
    pub amount: f64,

    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Brand the sneakers belong to.
    pub brand: Brand,
}

/// Input for creating or replacing a record (before an id is assigned).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub brand: Brand,
}

impl TransactionDraft {
    pub fn new(date: NaiveDate, amount: f64, kind: TransactionType, brand: Brand) -> Self {
        Self {
            date,
            amount,
            kind,
            brand,
        }
    }

    /// Materialize the draft as a stored record under the given id.
    pub fn into_record(self, id: RecordId) -> TransactionRecord {
        TransactionRecord {
            id,
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            brand: self.brand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_next() {
        assert_eq!(RecordId(1).next(), RecordId(2));
        assert_eq!(RecordId(1).to_string(), "1");
    }

    #[test]
    fn test_draft_into_record_keeps_fields() {
        let draft = TransactionDraft::new(
            NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            150.0,
            TransactionType::Expense,
            Brand::Nike,
        );

        let record = draft.clone().into_record(RecordId(7));
        assert_eq!(record.id, RecordId(7));
        assert_eq!(record.date, draft.date);
        assert_eq!(record.amount, draft.amount);
        assert_eq!(record.kind, draft.kind);
        assert_eq!(record.brand, draft.brand);
    }

    #[test]
    fn test_record_serializes_kind_as_type() {
        let record = TransactionRecord {
            id: RecordId(1),
            date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            amount: 150.0,
            kind: TransactionType::Expense,
            brand: Brand::Nike,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Expense");
        assert_eq!(value["brand"], "Nike");
        assert_eq!(value["date"], "2023-10-01");
    }
}
