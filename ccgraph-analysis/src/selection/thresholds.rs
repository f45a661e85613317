//! Quota/proportion thresholds for license membership.

use ccgraph_core::config::selection_config::{DEFAULT_PROPORTION, DEFAULT_QUOTA};
use ccgraph_core::config::SelectionConfig;
use ccgraph_core::errors::SelectionError;
use ccgraph_core::graph::LicenseDistribution;

/// Relative slack on the proportional floor, in units of the node's total.
///
/// `proportion * total` is computed in binary floating point, so an exact
/// share such as 3 of 30 at proportion 0.1 would otherwise be rejected. A
/// few ulps of slack cannot admit a count that is short by a whole use for
/// any total below 10^15.
pub const PROPORTION_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Membership thresholds for [`partition_by_licenses`](super::partition_by_licenses).
///
/// Always valid once constructed: `proportion` is finite and in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionThresholds {
    quota: u64,
    proportion: f64,
}

impl Default for SelectionThresholds {
    fn default() -> Self {
        Self {
            quota: DEFAULT_QUOTA,
            proportion: DEFAULT_PROPORTION,
        }
    }
}

impl SelectionThresholds {
    /// `quota` is an absolute floor on the license's count (0 disables it);
    /// `proportion` is the minimum share of the node's total usage.
    pub fn new(quota: u64, proportion: f64) -> Result<Self, SelectionError> {
        if !proportion.is_finite() || !(0.0..=1.0).contains(&proportion) {
            return Err(SelectionError::InvalidThreshold {
                name: "proportion",
                value: proportion.to_string(),
                reason: "must be a finite number in [0, 1]",
            });
        }
        Ok(Self { quota, proportion })
    }

    pub fn from_config(config: &SelectionConfig) -> Result<Self, SelectionError> {
        Self::new(config.effective_quota(), config.effective_proportion())
    }

    pub fn with_quota(quota: u64) -> Self {
        Self {
            quota,
            ..Self::default()
        }
    }

    pub fn quota(&self) -> u64 {
        self.quota
    }

    pub fn proportion(&self) -> f64 {
        self.proportion
    }

    /// Whether a node with distribution `dist` belongs to `license`: the
    /// license is present, its count meets the quota, and its count is at
    /// least `proportion` of the node's total.
    pub fn admits(&self, dist: &LicenseDistribution, license: &str) -> bool {
        let Some(count) = dist.get(license) else {
            return false;
        };
        if count < self.quota {
            return false;
        }
        let total = dist.total() as f64;
        count as f64 + PROPORTION_TOLERANCE * total >= self.proportion * total
    }
}
