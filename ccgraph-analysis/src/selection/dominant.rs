//! Majority (dominant-license) selection.

use std::collections::BTreeMap;

use ccgraph_core::graph::{GraphEngine, SubgraphView};

use super::predicate::by_predicate;
use crate::extract::collect_licenses;

/// Subgraph of the nodes for which `license` is a dominant license: present,
/// with a count no smaller than any other license on that node.
///
/// Ties are not broken, so a node can be dominant for several licenses and
/// show up under each of them.
pub fn by_dominant_license<'g, G: GraphEngine>(graph: &'g G, license: &str) -> SubgraphView<'g> {
    let view = by_predicate(graph, |_, attrs| {
        attrs
            .license_distribution()
            .is_some_and(|dist| dist.is_dominant(license))
    });
    tracing::debug!(license, nodes = view.node_count(), edges = view.edge_count(), "dominant-license subgraph");
    view
}

/// [`by_dominant_license`] for every license present in the graph.
///
/// Views may overlap; the node sets are not a partition when ties exist.
pub fn dominant_licenses<G: GraphEngine>(graph: &G) -> BTreeMap<String, SubgraphView<'_>> {
    collect_licenses(graph)
        .into_iter()
        .map(|license| {
            let view = by_dominant_license(graph, &license);
            (license, view)
        })
        .collect()
}
