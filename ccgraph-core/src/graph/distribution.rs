//! Per-node license usage histograms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node's `cc_licenses` histogram: license name → usage count.
///
/// Ordered by license name so reports and serialized output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseDistribution(BTreeMap<String, u64>);

impl LicenseDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a raw JSON attribute as a distribution.
    ///
    /// Returns `None` unless `value` is an object whose values are all
    /// non-negative whole numbers. Integral floats such as `3.0` count.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut counts = BTreeMap::new();
        for (license, count) in object {
            counts.insert(license.clone(), whole_count(count)?);
        }
        Some(Self(counts))
    }

    pub fn insert(&mut self, license: impl Into<String>, count: u64) -> Option<u64> {
        self.0.insert(license.into(), count)
    }

    pub fn get(&self, license: &str) -> Option<u64> {
        self.0.get(license).copied()
    }

    pub fn contains(&self, license: &str) -> bool {
        self.0.contains_key(license)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn licenses(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    /// Largest single count, or `None` for an empty distribution.
    pub fn max_count(&self) -> Option<u64> {
        self.0.values().copied().max()
    }

    /// Whether `license` is present and its count equals the maximum.
    /// Several licenses can be dominant at once.
    pub fn is_dominant(&self, license: &str) -> bool {
        match (self.get(license), self.max_count()) {
            (Some(count), Some(max)) => count >= max,
            _ => false,
        }
    }

    /// All licenses tied for the maximum count, in name order.
    pub fn dominant(&self) -> Vec<&str> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, count)| *count >= max)
            .map(|(license, _)| license)
            .collect()
    }

    /// Fraction of the node's total usage attributed to `license`.
    /// `None` when the license is absent or the total is zero.
    pub fn share(&self, license: &str) -> Option<f64> {
        let count = self.get(license)?;
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(count as f64 / total as f64)
    }
}

impl From<BTreeMap<String, u64>> for LicenseDistribution {
    fn from(counts: BTreeMap<String, u64>) -> Self {
        Self(counts)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LicenseDistribution {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn whole_count(value: &Value) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    let count = value.as_f64()?;
    // Above 2^64 the cast would saturate.
    if count.is_finite() && count >= 0.0 && count.fract() == 0.0 && count < u64::MAX as f64 {
        Some(count as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_accepts_integer_maps() {
        let dist = LicenseDistribution::from_json(&json!({"by": 5, "cc0": 2})).unwrap();
        assert_eq!(dist.get("by"), Some(5));
        assert_eq!(dist.total(), 7);
    }

    #[test]
    fn from_json_rejects_non_mappings_and_bad_counts() {
        assert!(LicenseDistribution::from_json(&json!(["by"])).is_none());
        assert!(LicenseDistribution::from_json(&json!("by")).is_none());
        assert!(LicenseDistribution::from_json(&json!(null)).is_none());
        assert!(LicenseDistribution::from_json(&json!({"by": -1})).is_none());
        assert!(LicenseDistribution::from_json(&json!({"by": 1.5})).is_none());
        assert!(LicenseDistribution::from_json(&json!({"by": "3"})).is_none());
    }

    #[test]
    fn from_json_accepts_whole_float_counts() {
        let dist = LicenseDistribution::from_json(&json!({"by": 3.0, "cc0": 1})).unwrap();
        assert_eq!(dist.get("by"), Some(3));
        assert_eq!(dist.total(), 4);
        assert!(LicenseDistribution::from_json(&json!({"by": -2.0})).is_none());
        assert!(LicenseDistribution::from_json(&json!({"by": 1e30})).is_none());
    }

    #[test]
    fn ties_are_all_dominant() {
        let dist: LicenseDistribution = [("by", 4), ("by-sa", 4), ("cc0", 1)].into_iter().collect();
        assert!(dist.is_dominant("by"));
        assert!(dist.is_dominant("by-sa"));
        assert!(!dist.is_dominant("cc0"));
        assert!(!dist.is_dominant("pdm"));
        assert_eq!(dist.dominant(), vec!["by", "by-sa"]);
    }

    #[test]
    fn empty_distribution_has_no_dominant_or_share() {
        let dist = LicenseDistribution::new();
        assert_eq!(dist.max_count(), None);
        assert!(dist.dominant().is_empty());
        assert_eq!(dist.share("by"), None);
    }

    #[test]
    fn share_of_zero_total_is_none() {
        let dist: LicenseDistribution = [("by", 0)].into_iter().collect();
        assert_eq!(dist.share("by"), None);
        assert!(dist.is_dominant("by"));
    }
}
