//! Environment variable keys read by this crate.

/// Logging
pub mod observability {
    pub const CFGCHAIN_QUIET: &str = "CFGCHAIN_QUIET";
    pub const QUIET_ALIASES: &[&str] = &["CFGCHAIN_SILENT"];

    pub const CFGCHAIN_LOG_LEVEL: &str = "CFGCHAIN_LOG_LEVEL";
    pub const LOG_LEVEL_ALIASES: &[&str] = &["CFGCHAIN_LOG"];

    pub const CFGCHAIN_LOG_JSON: &str = "CFGCHAIN_LOG_JSON";

    pub const DEFAULT_LOG_LEVEL: &str = "cfgchain=info";
    pub const QUIET_LOG_LEVEL: &str = "cfgchain=warn";
}
