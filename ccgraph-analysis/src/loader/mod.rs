//! Node-link JSON loader: document parsing, validation, and graph building.

pub mod builder;
pub mod record;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use ccgraph_core::config::LoaderConfig;
use ccgraph_core::errors::LoadError;
use ccgraph_core::graph::LicenseGraph;
use ccgraph_core::tracing::timed;

pub use builder::{GraphBuilder, LoadStats};
pub use record::{LinkRecord, NodeLinkDocument};

/// Build a graph from an already-parsed JSON value.
pub fn load_from_value(value: Value, config: &LoaderConfig) -> Result<(LicenseGraph, LoadStats), LoadError> {
    let builder = GraphBuilder::from_config(config)?;
    builder.build(NodeLinkDocument::from_value(value)?)
}

/// Build a graph from JSON text.
pub fn load_from_str(json: &str, config: &LoaderConfig) -> Result<(LicenseGraph, LoadStats), LoadError> {
    load_from_value(serde_json::from_str(json)?, config)
}

/// Build a graph from a JSON reader.
pub fn load_from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<(LicenseGraph, LoadStats), LoadError> {
    load_from_value(serde_json::from_reader(reader)?, config)
}

/// Open a JSON node-link file and build a graph from it.
pub fn load_from_path(path: &Path, config: &LoaderConfig) -> Result<(LicenseGraph, LoadStats), LoadError> {
    // Reject an unknown schema before touching the file.
    GraphBuilder::from_config(config)?;
    let (result, _) = timed("load_from_path", || {
        let file = File::open(path)?;
        load_from_reader(BufReader::new(file), config)
    });
    if let Ok((_, stats)) = &result {
        tracing::debug!(path = %path.display(), nodes = stats.nodes, "graph file loaded");
    }
    result
}
