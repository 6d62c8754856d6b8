//! Configuration for the crate itself.
//!
//! - `env_keys`: key constants (with legacy aliases)
//! - `schema`: `ObservabilityConfig`, resolved through a [`crate::Resolver`]

pub mod env_keys;
pub mod schema;

pub use schema::ObservabilityConfig;
