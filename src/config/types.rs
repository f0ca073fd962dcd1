// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_RESET_TIMEOUT_MS: u64 = 1500;
pub const DEFAULT_LOOKUP_DEBOUNCE_MS: u64 = 50;

/// Lookup timing and data source section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupConfig {
    /// Pause after the last keystroke before the next one starts a new entry
    #[serde(default = "default_reset_timeout_ms")]
    pub reset_timeout_ms: u64,
    #[serde(default = "default_lookup_debounce_ms")]
    pub lookup_debounce_ms: u64,
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_reset_timeout_ms() -> u64 {
    DEFAULT_RESET_TIMEOUT_MS
}

fn default_lookup_debounce_ms() -> u64 {
    DEFAULT_LOOKUP_DEBOUNCE_MS
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            reset_timeout_ms: DEFAULT_RESET_TIMEOUT_MS,
            lookup_debounce_ms: DEFAULT_LOOKUP_DEBOUNCE_MS,
            data_file: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
