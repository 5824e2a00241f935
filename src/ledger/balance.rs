use super::{ledger::Ledger, transaction::TransactionKind};

/// Derived ledger totals. Never persisted or cached; always recomputed from the
/// committed transaction set so it reflects exactly what was accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Balance {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

impl Ledger {
    /// Aggregates {income, outcome, total} over the full transaction set.
    pub fn balance(&self) -> Balance {
        let mut income = 0.0;
        let mut outcome = 0.0;
        for transaction in &self.transactions {
            match transaction.kind {
                TransactionKind::Income => income += transaction.value,
                TransactionKind::Outcome => outcome += transaction.value,
            }
        }
        Balance {
            income,
            outcome,
            total: income - outcome,
        }
    }
}
