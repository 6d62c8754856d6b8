//! Settings structs resolved through a [`Resolver`].

use super::env_keys::observability as obv_keys;
use crate::provider::environment;
use crate::resolver::Resolver;

/// Logging settings: quiet, log_level, log_json.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    /// `(alias, preferred)` pairs for settings that resolved through an alias.
    /// Reported once tracing is installed, since no subscriber exists while
    /// these settings are read.
    pub aliased_keys: Vec<(String, String)>,
}

impl ObservabilityConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_resolver(&Resolver::new(vec![environment()]))
    }

    /// Reads settings through `resolver`, so callers can layer overrides
    /// ahead of the environment.
    pub fn from_resolver(resolver: &Resolver) -> Self {
        let mut aliased_keys = Vec::new();
        let mut lookup = |primary: &str, aliases: &[&str]| -> Option<String> {
            let resolved = resolver.resolve_with_aliases(primary, aliases).ok()?;
            if let Some(alias) = resolved.via_alias {
                aliased_keys.push((alias, primary.to_string()));
            }
            Some(resolved.value)
        };

        let quiet = env_bool(
            lookup(obv_keys::CFGCHAIN_QUIET, obv_keys::QUIET_ALIASES),
            false,
        );
        let log_level = lookup(obv_keys::CFGCHAIN_LOG_LEVEL, obv_keys::LOG_LEVEL_ALIASES)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| obv_keys::DEFAULT_LOG_LEVEL.to_string());
        let log_json = env_bool(lookup(obv_keys::CFGCHAIN_LOG_JSON, &[]), false);

        Self {
            quiet,
            log_level,
            log_json,
            aliased_keys,
        }
    }

    /// Filter directive to install: quiet wins over the configured level.
    pub fn effective_level(&self) -> &str {
        if self.quiet {
            obv_keys::QUIET_LOG_LEVEL
        } else {
            &self.log_level
        }
    }
}

/// 0/false/no/off are false, any other value is true, unset gives `default`.
fn env_bool(value: Option<String>, default: bool) -> bool {
    match value.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}
