//! Graph-wide license statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use ccgraph_core::graph::GraphEngine;

/// Aggregate usage of a single license across a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LicenseTotals {
    /// Nodes whose distribution lists the license.
    pub nodes: usize,
    /// Sum of the license's counts over those nodes.
    pub uses: u64,
    /// Nodes for which the license is dominant (ties included).
    pub dominant_nodes: usize,
}

/// Per-license totals, keyed by license name.
pub fn license_totals<G: GraphEngine>(graph: &G) -> BTreeMap<String, LicenseTotals> {
    let mut totals: BTreeMap<String, LicenseTotals> = BTreeMap::new();
    for dist in graph.nodes().filter_map(|node| node.licenses()) {
        let max = dist.max_count().unwrap_or(0);
        for (license, count) in dist.iter() {
            let entry = totals.entry(license.to_string()).or_default();
            entry.nodes += 1;
            entry.uses = entry.uses.saturating_add(count);
            if count >= max {
                entry.dominant_nodes += 1;
            }
        }
    }
    totals
}

/// Size and license coverage of a graph or view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub total_weight: u64,
    /// Nodes carrying non-empty license data.
    pub licensed_nodes: usize,
    pub distinct_licenses: usize,
    pub total_license_uses: u64,
}

pub fn summarize<G: GraphEngine>(graph: &G) -> GraphSummary {
    let totals = license_totals(graph);
    GraphSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        total_weight: graph.total_weight(),
        licensed_nodes: graph.nodes().filter(|node| node.licenses().is_some()).count(),
        distinct_licenses: totals.len(),
        total_license_uses: totals.values().fold(0u64, |acc, t| acc.saturating_add(t.uses)),
    }
}
