//! LicenseGraph — petgraph-backed storage for the provenance graph.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef as _;

use crate::config::ParallelEdges;
use crate::errors::LoadError;
use crate::types::collections::FxHashMap;

use super::edge::{EdgeInsert, EdgeRef, LinkEdge};
use super::engine::GraphEngine;
use super::node::Node;
use super::view::SubgraphView;

/// Directed, weighted provenance graph with unique node ids.
///
/// Built once by the loader, then only read. Every edge endpoint is a node
/// of the same graph.
#[derive(Debug, Clone, Default)]
pub struct LicenseGraph {
    graph: DiGraph<Node, LinkEdge>,
    index: FxHashMap<String, NodeIndex>,
}

impl LicenseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    /// Add a node. If the id already exists its attributes are replaced and
    /// it keeps its original position; returns `true` in that case.
    pub fn add_node(&mut self, node: Node) -> bool {
        if let Some(&idx) = self.index.get(&node.id) {
            self.graph[idx] = node;
            return true;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        false
    }

    /// Add a node. If the id already exists the new attributes are merged
    /// into the existing ones (see [`NodeAttributes::merge`](super::NodeAttributes::merge)) and the node
    /// keeps its original position; returns `true` in that case.
    pub fn merge_node(&mut self, node: Node) -> bool {
        if let Some(&idx) = self.index.get(&node.id) {
            self.graph[idx].attributes.merge(node.attributes);
            return true;
        }
        self.add_node(node)
    }

    /// Add a link between two existing nodes, resolving repeats of the same
    /// ordered pair according to `policy`.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: u64,
        policy: ParallelEdges,
    ) -> Result<EdgeInsert, LoadError> {
        let dangling = |missing: &str| LoadError::DanglingEdge {
            from: source.to_string(),
            to: target.to_string(),
            missing: missing.to_string(),
        };
        let src = self.index_of(source).ok_or_else(|| dangling(source))?;
        let dst = self.index_of(target).ok_or_else(|| dangling(target))?;

        let existing = match policy {
            ParallelEdges::Keep => None,
            ParallelEdges::Replace | ParallelEdges::Sum => self.graph.find_edge(src, dst),
        };

        match existing {
            Some(edge) => {
                let payload = &mut self.graph[edge];
                if policy == ParallelEdges::Sum {
                    payload.weight = payload.weight.saturating_add(weight);
                    Ok(EdgeInsert::Summed)
                } else {
                    payload.weight = weight;
                    Ok(EdgeInsert::Replaced)
                }
            }
            None => {
                self.graph.add_edge(src, dst, LinkEdge { weight });
                Ok(EdgeInsert::Added)
            }
        }
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<Node, LinkEdge> {
        &self.graph
    }

    /// Borrowed edge at petgraph granularity, used by views.
    pub(crate) fn edge_refs(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, EdgeRef<'_>)> {
        self.graph.edge_references().map(move |e| {
            (
                e.source(),
                e.target(),
                EdgeRef {
                    source: &self.graph[e.source()].id,
                    target: &self.graph[e.target()].id,
                    weight: e.weight().weight,
                },
            )
        })
    }
}

impl GraphEngine for LicenseGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.edge_refs().map(|(_, _, e)| e)
    }

    fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    fn induced_subgraph<I>(&self, ids: I) -> SubgraphView<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let members = ids
            .into_iter()
            .filter_map(|id| self.index_of(id.as_ref()));
        SubgraphView::new(self, members)
    }
}
