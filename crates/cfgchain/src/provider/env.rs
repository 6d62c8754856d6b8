use std::env::{self, VarError};

use anyhow::anyhow;

use super::Provider;

/// Reads keys from the process environment on every lookup.
///
/// A variable set to the empty string is reported as found. Values that are
/// not valid Unicode are reported as errors.
#[derive(Debug, Clone, Default)]
pub struct EnvProvider {
    prefix: Option<String>,
}

impl EnvProvider {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Looks up `prefix + key`, e.g. `with_prefix("APP_")` maps `PORT` to `APP_PORT`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn var_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, key),
            None => key.to_string(),
        }
    }
}

impl Provider for EnvProvider {
    fn lookup(&self, key: &str) -> anyhow::Result<Option<String>> {
        let name = self.var_name(key);
        match env::var(&name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => {
                Err(anyhow!("environment variable {} is not valid unicode", name))
            }
        }
    }

    fn name(&self) -> &str {
        "environment"
    }
}
