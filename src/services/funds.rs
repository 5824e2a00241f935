//! The funds guard: the total may never go negative after an accepted write.

use super::{ServiceError, ServiceResult};

/// Rejects an outcome delta that would drive the current total below zero.
///
/// Only outcome amounts reach this check; income never does. The delta may be a
/// single transaction value or a batch aggregate, the rule is identical.
pub fn ensure_sufficient_funds(current_total: f64, outcome_delta: f64) -> ServiceResult<()> {
    if current_total - outcome_delta < 0.0 {
        tracing::warn!(
            available = current_total,
            requested = outcome_delta,
            "Funds check rejected outcome delta."
        );
        return Err(ServiceError::InsufficientFunds {
            available: current_total,
            requested: outcome_delta,
        });
    }
    Ok(())
}
