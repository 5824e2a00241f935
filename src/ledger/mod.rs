//! Ledger domain models, persistence-friendly types, and helpers.

pub mod balance;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use balance::Balance;
pub use category::Category;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
