//! Precedence-ordered lookup across providers.
//!
//! Providers are consulted in the order they were given; the first one that
//! reports a value wins and the rest are never called. Callers control
//! precedence only through that order.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::{ConfigError, Result};
use crate::provider::Provider;

/// An immutable, ordered chain of configuration providers.
#[derive(Debug, Default)]
pub struct Resolver {
    providers: Vec<Box<dyn Provider>>,
    /// Aliases already reported, so each deprecation hint is logged once.
    warned_aliases: Mutex<HashSet<String>>,
}

/// A value found by [`Resolver::resolve_with_aliases`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    /// The alias that answered, or `None` when the primary key did.
    pub via_alias: Option<String>,
}

/// Deprecation hint for a key that resolved through an alias.
pub(crate) fn warn_alias(alias: &str, primary: &str) {
    tracing::warn!(
        alias = %alias,
        preferred = %primary,
        "configuration key {} resolved through alias; prefer {}",
        alias,
        primary
    );
}

impl Resolver {
    /// Builds a resolver over `providers`, highest precedence first.
    ///
    /// An empty list is allowed; every required lookup then fails with
    /// [`ConfigError::NoProvidersConfigured`].
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Self {
        Self {
            providers,
            warned_aliases: Mutex::new(HashSet::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in precedence order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Returns the value from the first provider that has `key`.
    pub fn get_required(&self, key: &str) -> Result<String> {
        if self.providers.is_empty() {
            return Err(ConfigError::NoProvidersConfigured);
        }
        self.first_match(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Like [`Resolver::get_required`], returning `default` on any failure.
    pub fn get_optional(&self, key: &str, default: &str) -> String {
        self.get_required(key)
            .unwrap_or_else(|_| default.to_string())
    }

    /// Resolves `primary` through the whole chain, then each alias in turn.
    ///
    /// The first hit on a given alias logs a warning naming the preferred key;
    /// later hits on the same alias stay quiet. The error always names
    /// `primary`.
    pub fn get_required_with_aliases(&self, primary: &str, aliases: &[&str]) -> Result<String> {
        let resolved = self.resolve_with_aliases(primary, aliases)?;
        if let Some(alias) = &resolved.via_alias {
            self.warn_alias_once(alias, primary);
        }
        Ok(resolved.value)
    }

    /// Alias lookup without logging; reports which alias, if any, answered.
    pub fn resolve_with_aliases(&self, primary: &str, aliases: &[&str]) -> Result<Resolved> {
        if self.providers.is_empty() {
            return Err(ConfigError::NoProvidersConfigured);
        }
        if let Some(value) = self.first_match(primary) {
            return Ok(Resolved {
                value,
                via_alias: None,
            });
        }
        for alias in aliases {
            if let Some(value) = self.first_match(alias) {
                return Ok(Resolved {
                    value,
                    via_alias: Some(alias.to_string()),
                });
            }
        }
        Err(ConfigError::KeyNotFound(primary.to_string()))
    }

    pub fn get_optional_with_aliases(&self, primary: &str, aliases: &[&str], default: &str) -> String {
        self.get_required_with_aliases(primary, aliases)
            .unwrap_or_else(|_| default.to_string())
    }

    fn warn_alias_once(&self, alias: &str, primary: &str) {
        let first = self
            .warned_aliases
            .lock()
            .map(|mut seen| seen.insert(alias.to_string()))
            .unwrap_or(true);
        if first {
            warn_alias(alias, primary);
        }
    }

    fn first_match(&self, key: &str) -> Option<String> {
        for (index, provider) in self.providers.iter().enumerate() {
            match provider.lookup(key) {
                Ok(Some(value)) => {
                    tracing::debug!(key, provider = provider.name(), index, "configuration key resolved");
                    return Some(value);
                }
                Ok(None) => {
                    tracing::trace!(key, provider = provider.name(), index, "configuration key not in provider");
                }
                Err(e) => {
                    tracing::debug!(
                        key,
                        provider = provider.name(),
                        index,
                        error = %e,
                        "configuration provider failed; trying next"
                    );
                }
            }
        }
        tracing::debug!(key, providers = self.providers.len(), "configuration key not found");
        None
    }
}

impl FromIterator<Box<dyn Provider>> for Resolver {
    fn from_iter<I: IntoIterator<Item = Box<dyn Provider>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
