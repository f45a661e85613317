//! Directed, weighted links between domains.

use serde::{Deserialize, Serialize};

/// Edge payload stored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkEdge {
    pub weight: u64,
}

/// A borrowed view of one edge, endpoints given by node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: u64,
}

/// What happened when a link was added to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    Added,
    Replaced,
    Summed,
}
