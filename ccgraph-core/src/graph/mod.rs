//! Graph model: nodes with license histograms, weighted directed edges,
//! and the `GraphEngine` capability set the analyses are written against.

pub mod distribution;
pub mod edge;
pub mod engine;
pub mod license_graph;
pub mod node;
pub mod view;

pub use distribution::LicenseDistribution;
pub use edge::{EdgeInsert, EdgeRef, LinkEdge};
pub use engine::GraphEngine;
pub use license_graph::LicenseGraph;
pub use node::{Node, NodeAttributes};
pub use view::SubgraphView;
