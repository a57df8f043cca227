pub mod amount;

pub use amount::{format_amount, parse_amount};

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budget_ledger=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() -> bool {
    init_tracing_with(None)
}

/// Like [`init_tracing`], adding a configured directive on top of the default.
///
/// Only the first call in a process installs a subscriber, so only its
/// directive takes effect. Returns `true` for that call.
pub fn init_tracing_with(directive: Option<&str>) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        let (filter, rejected) = build_filter(directive);
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        for (raw, err) in rejected {
            tracing::warn!(directive = %raw, error = %err, "ignoring tracing directive");
        }
        tracing::info!("Budget Ledger tracing initialized.");
        installed = true;
    });
    installed
}

/// `RUST_LOG` plus the default and configured directives. Directives that do
/// not parse are returned with their error.
fn build_filter(directive: Option<&str>) -> (EnvFilter, Vec<(String, String)>) {
    let mut filter = EnvFilter::from_default_env();
    let mut rejected = Vec::new();
    for raw in [Some(DEFAULT_DIRECTIVE), directive].into_iter().flatten() {
        match raw.parse() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(err) => rejected.push((raw.to_string(), err.to_string())),
        }
    }
    (filter, rejected)
}
