//! The graph capability set every analysis is written against.

use super::edge::EdgeRef;
use super::node::Node;
use super::view::SubgraphView;

/// Read-only graph capabilities: node and edge iteration, attribute lookup,
/// and induced subgraphs.
///
/// Implemented by [`LicenseGraph`](super::LicenseGraph) and by the
/// [`SubgraphView`]s it produces, so a view can be filtered again.
pub trait GraphEngine {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Nodes in first-seen order.
    fn nodes(&self) -> impl Iterator<Item = &Node>;

    /// Edges in insertion order.
    fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>>;

    /// Look up a node and its attributes by id.
    fn node(&self, id: &str) -> Option<&Node>;

    fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// The subgraph induced by `ids`: those nodes (ids not in this graph are
    /// ignored) and every edge whose endpoints are both among them.
    fn induced_subgraph<I>(&self, ids: I) -> SubgraphView<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    /// Sum of all edge weights.
    fn total_weight(&self) -> u64 {
        self.edges()
            .fold(0u64, |acc, e| acc.saturating_add(e.weight))
    }
}
