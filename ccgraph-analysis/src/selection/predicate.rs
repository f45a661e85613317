//! Induced subgraphs from arbitrary node predicates.

use ccgraph_core::graph::{GraphEngine, NodeAttributes, SubgraphView};

/// The subgraph induced by the nodes for which `predicate(id, attributes)`
/// holds. Edges survive only between two selected nodes.
pub fn by_predicate<G, F>(graph: &G, predicate: F) -> SubgraphView<'_>
where
    G: GraphEngine,
    F: Fn(&str, &NodeAttributes) -> bool,
{
    let selected: Vec<&str> = graph
        .nodes()
        .filter(|node| predicate(node.id.as_str(), &node.attributes))
        .map(|node| node.id.as_str())
        .collect();
    graph.induced_subgraph(selected)
}
