//! Aggregation reports over license data.

pub mod by_node;
pub mod totals;

pub use by_node::licenses_by_node;
pub use totals::{license_totals, summarize, GraphSummary, LicenseTotals};
