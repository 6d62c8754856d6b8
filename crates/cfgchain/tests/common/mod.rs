#![allow(dead_code)] // each test binary uses a different subset

use std::collections::HashMap;
use std::env;

use cfgchain::{in_memory, Provider};

/// RAII guard: sets an environment variable and removes it on drop.
///
/// Same shape as the crate's internal `test_support::ScopedEnv`, which is
/// `cfg(test)` and therefore unreachable from integration tests.
pub struct ScopedEnv(pub &'static str);

impl ScopedEnv {
    pub fn set(key: &'static str, value: &str) -> Self {
        env::set_var(key, value);
        Self(key)
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

pub fn mem(pairs: &[(&str, &str)]) -> Box<dyn Provider> {
    in_memory(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    )
}
