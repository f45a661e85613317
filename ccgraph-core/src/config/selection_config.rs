//! Selection threshold configuration.

use serde::{Deserialize, Serialize};

/// Default absolute floor: at least one recorded use.
pub const DEFAULT_QUOTA: u64 = 1;
/// Default relative floor: no proportional requirement.
pub const DEFAULT_PROPORTION: f64 = 0.0;

/// Thresholds for the multi-license partition.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Minimum count of a license on a node. 0 disables the floor. Default: 1.
    pub quota: Option<u64>,
    /// Minimum share of the node's total license usage, in [0, 1]. Default: 0.0.
    pub proportion: Option<f64>,
}

impl SelectionConfig {
    pub fn effective_quota(&self) -> u64 {
        self.quota.unwrap_or(DEFAULT_QUOTA)
    }

    pub fn effective_proportion(&self) -> f64 {
        self.proportion.unwrap_or(DEFAULT_PROPORTION)
    }
}
