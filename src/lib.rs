#![doc(test(attr(deny(warnings))))]

//! Budget Ledger records income and expense transactions, classifies them by
//! category, checks per-category spending limits over rolling periods, and
//! produces aggregate reports.

pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::{LoadStatus, Store};
pub use errors::LedgerError;

/// Initializes global tracing and emits a startup info log.
///
/// Tracing is installed once per process: whichever of [`init`] and
/// [`init_with_config`] runs first decides the filter. Returns `true` for that
/// call.
pub fn init() -> bool {
    utils::init_tracing()
}

/// Same as [`init`], adding the `log_filter` from `config.json`.
pub fn init_with_config(config: &config::Config) -> bool {
    utils::init_tracing_with(config.log_filter.as_deref())
}
