//! Operations over the ledger. Every service takes the ledger handle explicitly
//! and leaves it untouched when it fails.

pub mod category_resolver;
pub mod funds;
pub mod import_service;
pub mod transaction_service;

pub use category_resolver::CategoryResolver;
pub use import_service::ImportService;
pub use transaction_service::{NewTransaction, TransactionService};

use uuid::Uuid;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("insufficient funds: {requested:.2} requested, {available:.2} available")]
    InsufficientFunds { available: f64, requested: f64 },
    #[error("transaction not found: {0}")]
    NotFound(Uuid),
    #[error("malformed row at line {line}: {message}")]
    Parse { line: u64, message: String },
    #[error("{0}")]
    Invalid(String),
}
