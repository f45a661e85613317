//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for `tracing` output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset. Default: "info".
    pub log_level: Option<String>,
    /// Disable ANSI colors in log output. Default: false.
    pub plain: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn effective_plain(&self) -> bool {
        self.plain.unwrap_or(false)
    }
}
