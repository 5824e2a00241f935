//! Business logic for creating, deleting, and listing single transactions.

use uuid::Uuid;

use crate::ledger::{Ledger, Transaction, TransactionKind};

use super::{funds, CategoryResolver, ServiceError, ServiceResult};

/// Caller-supplied fields for one new transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub kind: TransactionKind,
    pub value: f64,
    pub category_title: String,
}

/// Provides validated operations over individual ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates funds, resolves the category, and persists one transaction.
    ///
    /// Outcome values are checked against the derived balance before anything
    /// is written; a rejected create leaves the ledger unchanged.
    pub fn create(ledger: &mut Ledger, request: NewTransaction) -> ServiceResult<Transaction> {
        if request.title.trim().is_empty() {
            return Err(ServiceError::Invalid("Transaction title is empty".into()));
        }
        if request.category_title.trim().is_empty() {
            return Err(ServiceError::Invalid("Category title is empty".into()));
        }
        if !request.value.is_finite() || request.value < 0.0 {
            return Err(ServiceError::Invalid(format!(
                "Transaction value must be non-negative, got {}",
                request.value
            )));
        }

        if request.kind == TransactionKind::Outcome {
            funds::ensure_sufficient_funds(ledger.balance().total, request.value)?;
        }

        let resolved =
            CategoryResolver::resolve(ledger, std::slice::from_ref(&request.category_title))?;
        let category_id = resolved[&request.category_title].id;

        let transaction =
            Transaction::new(request.title, request.kind, request.value, category_id);
        let stored = transaction.clone();
        ledger.add_transaction(transaction);

        tracing::info!(
            id = %stored.id,
            kind = %stored.kind,
            value = stored.value,
            "Transaction created."
        );
        Ok(stored)
    }

    /// Removes the transaction identified by `id`, returning the removed row.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or(ServiceError::NotFound(id))
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}
