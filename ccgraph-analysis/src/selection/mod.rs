//! License subgraph selection: dominant-license filters, quota/proportion
//! thresholds, and arbitrary node predicates. Every result is an induced
//! view over the input graph.

pub mod dominant;
pub mod partition;
pub mod predicate;
pub mod thresholds;

pub use dominant::{by_dominant_license, dominant_licenses};
pub use partition::partition_by_licenses;
pub use predicate::by_predicate;
pub use thresholds::{SelectionThresholds, PROPORTION_TOLERANCE};
