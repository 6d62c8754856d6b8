use std::fmt;

use super::Provider;

type LookupFn = dyn Fn(&str) -> anyhow::Result<Option<String>> + Send + Sync;

/// Adapts a closure into a [`Provider`].
pub struct CustomProvider {
    name: String,
    f: Box<LookupFn>,
}

impl CustomProvider {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        Self::named("custom", f)
    }

    pub fn named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            f: Box::new(f),
        }
    }
}

impl fmt::Debug for CustomProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Provider for CustomProvider {
    fn lookup(&self, key: &str) -> anyhow::Result<Option<String>> {
        (self.f)(key)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_called_with_key() {
        let p = CustomProvider::new(|key: &str| Ok(Some(key.to_lowercase())));
        assert_eq!(p.lookup("ABC").unwrap().as_deref(), Some("abc"));
        assert_eq!(p.name(), "custom");
    }

    #[test]
    fn test_named_shows_in_debug() {
        let p = CustomProvider::named("vault", |_: &str| Ok(None));
        assert_eq!(p.name(), "vault");
        assert!(format!("{:?}", p).contains("vault"));
    }
}
