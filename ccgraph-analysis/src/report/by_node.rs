//! Per-node license distributions.

use std::collections::BTreeMap;

use ccgraph_core::graph::{GraphEngine, LicenseDistribution};

/// Node id → license distribution, for nodes with non-empty license data.
/// Nodes without license data are omitted rather than mapped to an empty
/// distribution.
pub fn licenses_by_node<G: GraphEngine>(graph: &G) -> BTreeMap<String, LicenseDistribution> {
    graph
        .nodes()
        .filter_map(|node| node.licenses().map(|dist| (node.id.clone(), dist.clone())))
        .collect()
}
