//! License extraction: the universe of license keys present in a graph.

use std::collections::BTreeSet;

use ccgraph_core::graph::GraphEngine;

/// Union of the license keys of every node with license data.
///
/// Nodes with absent, empty, or malformed `cc_licenses` contribute nothing;
/// a graph without license data yields the empty set.
pub fn collect_licenses<G: GraphEngine>(graph: &G) -> BTreeSet<String> {
    graph
        .nodes()
        .filter_map(|node| node.licenses())
        .flat_map(|dist| dist.licenses())
        .map(str::to_string)
        .collect()
}
