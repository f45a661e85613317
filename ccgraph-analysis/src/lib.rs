//! # ccgraph-analysis
//!
//! Analysis engine for Creative Commons provenance graphs.
//! Contains the node-link loader, license extraction, license subgraph
//! selection, aggregation reports, and edge-list export.

pub mod export;
pub mod extract;
pub mod loader;
pub mod report;
pub mod selection;

pub use extract::collect_licenses;
pub use loader::{load_from_path, load_from_str, load_from_value, GraphBuilder, LoadStats};
pub use report::{license_totals, licenses_by_node, summarize};
pub use selection::{
    by_dominant_license, by_predicate, dominant_licenses, partition_by_licenses, SelectionThresholds,
};
