#![doc(test(attr(deny(warnings))))]

//! Ledger Core tracks income and outcome transactions against named categories,
//! derives the running balance on demand, and ingests CSV batches as one unit.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
