//! Errors surfaced by [`crate::Resolver`].

use thiserror::Error;

/// Errors returned by required lookups.
///
/// Provider failures never show up here: the resolver logs them and moves on
/// to the next provider, so the caller only learns whether the chain as a
/// whole produced a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("there is no configuration provider configured")]
    NoProvidersConfigured,

    #[error("key {0} not found")]
    KeyNotFound(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
