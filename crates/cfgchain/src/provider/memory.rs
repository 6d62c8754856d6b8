use std::collections::HashMap;

use super::Provider;

/// Looks keys up in a map captured at construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    values: HashMap<String, String>,
}

impl InMemoryProvider {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryProvider
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Provider for InMemoryProvider {
    fn lookup(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
