//! SubgraphView — a read-only induced subgraph over a LicenseGraph.

use petgraph::graph::NodeIndex;

use crate::config::ParallelEdges;
use crate::types::collections::FxHashSet;

use super::edge::EdgeRef;
use super::engine::GraphEngine;
use super::license_graph::LicenseGraph;
use super::node::Node;

/// An induced subgraph: a membership set over a parent graph's nodes.
///
/// Nothing is copied. The view's edges are exactly the parent's edges whose
/// source and target are both members, so no edge with a single surviving
/// endpoint is ever visible.
#[derive(Debug, Clone)]
pub struct SubgraphView<'g> {
    base: &'g LicenseGraph,
    /// Members in parent insertion order.
    order: Vec<NodeIndex>,
    members: FxHashSet<NodeIndex>,
    edge_count: usize,
}

impl<'g> SubgraphView<'g> {
    pub(crate) fn new(base: &'g LicenseGraph, members: impl IntoIterator<Item = NodeIndex>) -> Self {
        let members: FxHashSet<NodeIndex> = members.into_iter().collect();
        let mut order: Vec<NodeIndex> = members.iter().copied().collect();
        order.sort_unstable();

        let edge_count = base
            .edge_refs()
            .filter(|(s, t, _)| members.contains(s) && members.contains(t))
            .count();

        Self {
            base,
            order,
            members,
            edge_count,
        }
    }

    /// The graph this view restricts.
    pub fn parent(&self) -> &'g LicenseGraph {
        self.base
    }

    /// Member node ids in first-seen order.
    pub fn node_ids(&self) -> impl Iterator<Item = &'g str> + '_ {
        let graph = self.base.inner();
        self.order.iter().map(move |&idx| graph[idx].id.as_str())
    }

    /// Copy the view into a standalone graph.
    pub fn to_graph(&self) -> LicenseGraph {
        let mut graph = LicenseGraph::with_capacity(self.order.len(), self.edge_count);
        for node in self.nodes() {
            graph.add_node(node.clone());
        }
        for edge in self.edges() {
            // Both endpoints are members and were added above, so `DanglingEdge`
            // cannot occur; `Keep` never merges.
            if graph
                .add_edge(edge.source, edge.target, edge.weight, ParallelEdges::Keep)
                .is_err()
            {
                ::tracing::error!(source = edge.source, target = edge.target, "view edge without member endpoint");
            }
        }
        graph
    }
}

impl GraphEngine for SubgraphView<'_> {
    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        let graph = self.base.inner();
        self.order.iter().map(move |&idx| &graph[idx])
    }

    fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.base
            .edge_refs()
            .filter(|(s, t, _)| self.members.contains(s) && self.members.contains(t))
            .map(|(_, _, e)| e)
    }

    fn node(&self, id: &str) -> Option<&Node> {
        let idx = self.base.index_of(id)?;
        self.members
            .contains(&idx)
            .then(|| &self.base.inner()[idx])
    }

    fn induced_subgraph<I>(&self, ids: I) -> SubgraphView<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let members = ids
            .into_iter()
            .filter_map(|id| self.base.index_of(id.as_ref()))
            .filter(|idx| self.members.contains(idx));
        SubgraphView::new(self.base, members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> LicenseGraph {
        let mut g = LicenseGraph::new();
        for id in ["a", "b", "c", "d"] {
            g.add_node(Node::new(id));
        }
        g.add_edge("a", "b", 1, ParallelEdges::Keep).unwrap();
        g.add_edge("b", "c", 2, ParallelEdges::Keep).unwrap();
        g.add_edge("c", "d", 3, ParallelEdges::Keep).unwrap();
        g.add_edge("d", "a", 4, ParallelEdges::Keep).unwrap();
        g
    }

    #[test]
    fn induced_view_keeps_only_internal_edges() {
        let g = chain();
        let view = g.induced_subgraph(["c", "a", "b"]);
        assert_eq!(view.node_ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(view.edge_count(), 2);
        let weights: Vec<u64> = view.edges().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1, 2]);
        assert!(view.node("d").is_none());
        assert!(view.contains("a"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let g = chain();
        let view = g.induced_subgraph(["a", "zzz"]);
        assert_eq!(view.node_count(), 1);
        assert_eq!(view.edge_count(), 0);
    }

    #[test]
    fn nested_views_intersect_with_parent_view() {
        let g = chain();
        let outer = g.induced_subgraph(["a", "b"]);
        let inner = outer.induced_subgraph(["b", "c"]);
        assert_eq!(inner.node_ids().collect::<Vec<_>>(), vec!["b"]);
        assert!(std::ptr::eq(inner.parent(), &g));
    }

    #[test]
    fn to_graph_materializes_view() {
        let g = chain();
        let copy = g.induced_subgraph(["b", "c", "d"]).to_graph();
        assert_eq!(copy.node_count(), 3);
        assert_eq!(copy.edge_count(), 2);
        assert_eq!(copy.total_weight(), 5);
    }

    #[test]
    fn to_graph_keeps_parallel_edges() {
        let mut g = chain();
        g.add_edge("b", "c", 9, ParallelEdges::Keep).unwrap();
        let copy = g.induced_subgraph(["b", "c"]).to_graph();
        assert_eq!(copy.edge_count(), 2);
        assert_eq!(copy.total_weight(), 11);
    }
}
