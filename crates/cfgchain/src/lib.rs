//! Ordered fallback-chain lookup of configuration values.
//!
//! A [`Resolver`] holds providers in precedence order and returns the value
//! from the first one that has the requested key.
//!
//! ```
//! use std::collections::HashMap;
//! use cfgchain::{provider, Resolver};
//!
//! let defaults = HashMap::from([("PORT".to_string(), "8080".to_string())]);
//! let resolver = Resolver::new(vec![provider::environment(), provider::in_memory(defaults)]);
//!
//! assert_eq!(resolver.get_optional("CFGCHAIN_DOC_UNSET", "none"), "none");
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod provider;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ConfigError;
pub use provider::{
    custom, custom_fallible, environment, in_memory, CustomProvider, EnvProvider,
    InMemoryProvider, Provider,
};
pub use resolver::{Resolved, Resolver};
