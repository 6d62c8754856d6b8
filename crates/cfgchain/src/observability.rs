//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for CFGCHAIN_QUIET, CFGCHAIN_LOG_LEVEL and
//! CFGCHAIN_LOG_JSON. `RUST_LOG`, when set, takes precedence over both.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::resolver::{warn_alias, Resolver};

/// Initialize tracing from the process environment. Call at process startup.
pub fn init_tracing() -> bool {
    init_tracing_with(&ObservabilityConfig::from_env())
}

/// Initialize tracing with settings resolved through `resolver`.
pub fn init_tracing_from(resolver: &Resolver) -> bool {
    init_tracing_with(&ObservabilityConfig::from_resolver(resolver))
}

/// Installs a global subscriber and returns whether this call installed it.
/// A second call is a no-op returning `false`.
///
/// Settings that resolved through an alias are reported once the subscriber
/// is in place.
pub fn init_tracing_with(cfg: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.effective_level()));

    let result = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
    if result.is_err() {
        return false;
    }
    tracing::debug!(level = cfg.effective_level(), json = cfg.log_json, "tracing initialized");
    for (alias, preferred) in &cfg.aliased_keys {
        warn_alias(alias, preferred);
    }
    true
}
