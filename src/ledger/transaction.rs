use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or outcome entry against the shared ledger.
///
/// Transactions are immutable once persisted; the only lifecycle events are
/// creation (single or batch import) and explicit deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub kind: TransactionKind,
    pub value: f64,
    pub category_id: Uuid,
}

impl Transaction {
    pub fn new(title: impl Into<String>, kind: TransactionKind, value: f64, category_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            value,
            category_id,
        }
    }

    /// Signed effect of this transaction on the running total.
    pub fn signed_value(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.value,
            TransactionKind::Outcome => -self.value,
        }
    }
}

/// Direction of a transaction relative to the ledger total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Outcome,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Outcome => write!(f, "outcome"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "income" => Ok(TransactionKind::Income),
            "outcome" => Ok(TransactionKind::Outcome),
            other => Err(format!("unknown transaction type: {other:?}")),
        }
    }
}
