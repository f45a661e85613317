//! # ccgraph-core
//!
//! Foundation crate for the ccgraph license analysis engine.
//! Defines the graph model, the `GraphEngine` trait, errors, config, and
//! tracing setup. The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod graph;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{CcGraphConfig, ParallelEdges, SchemaMode};
pub use errors::CcGraphErrorCode;
pub use graph::{
    EdgeRef, GraphEngine, LicenseDistribution, LicenseGraph, Node, NodeAttributes, SubgraphView,
};
pub use types::collections::{FxHashMap, FxHashSet};
