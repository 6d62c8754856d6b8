//! Configuration value providers.
//!
//! - `memory`: lookups against a captured `HashMap`
//! - `env`: lookups against the live process environment
//! - `custom`: wraps caller-supplied closures
//!
//! The factory functions at the bottom of this module return boxed providers
//! so every source composes the same way when building a [`crate::Resolver`].

pub mod custom;
pub mod env;
pub mod memory;

use std::collections::HashMap;
use std::fmt::Debug;

pub use custom::CustomProvider;
pub use env::EnvProvider;
pub use memory::InMemoryProvider;

/// A single configuration source.
pub trait Provider: Debug + Send + Sync {
    /// Returns the value stored under `key`, if this source has one.
    ///
    /// `Ok(None)` means "not here". An `Err` means the source could not answer;
    /// the resolver treats it like a miss.
    fn lookup(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Label used in log output.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Provider backed by a fixed map.
pub fn in_memory(map: HashMap<String, String>) -> Box<dyn Provider> {
    Box::new(InMemoryProvider::new(map))
}

/// Provider backed by the process environment, read at lookup time.
pub fn environment() -> Box<dyn Provider> {
    Box::new(EnvProvider::new())
}

/// Provider backed by a caller-supplied lookup function.
pub fn custom<F>(f: F) -> Box<dyn Provider>
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    Box::new(CustomProvider::new(move |key: &str| Ok(f(key))))
}

/// Like [`custom`], for sources whose lookups can fail.
pub fn custom_fallible<F>(f: F) -> Box<dyn Provider>
where
    F: Fn(&str) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
{
    Box::new(CustomProvider::new(f))
}
