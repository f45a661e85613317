//! Headerless `src_index,dst_index` edge lists.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ccgraph_core::config::LoaderConfig;
use ccgraph_core::errors::ExportError;
use ccgraph_core::graph::GraphEngine;
use ccgraph_core::types::collections::FxHashMap;

use crate::loader::load_from_path;

/// Write one `src_index,dst_index` line per edge.
///
/// Node indices follow first-seen order of node ids in `graph`, so the same
/// input always produces the same numbering. Returns the number of lines.
pub fn write_edge_list<G: GraphEngine, W: Write>(graph: &G, writer: W) -> Result<usize, ExportError> {
    let mut indices: FxHashMap<&str, usize> = FxHashMap::default();
    for node in graph.nodes() {
        let next = indices.len();
        indices.entry(node.id.as_str()).or_insert(next);
    }

    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut written = 0usize;
    for edge in graph.edges() {
        let src = index_of(&indices, edge.source)?;
        let dst = index_of(&indices, edge.target)?;
        out.write_record([src.to_string(), dst.to_string()])
            .map_err(csv_error)?;
        written += 1;
    }
    out.flush()?;

    tracing::debug!(nodes = indices.len(), edges = written, "edge list written");
    Ok(written)
}

/// Load a node-link JSON file and write its edge list to `output`.
pub fn json_to_csv(input: &Path, output: &Path, config: &LoaderConfig) -> Result<usize, ExportError> {
    let (graph, _) = load_from_path(input, config)?;
    let file = File::create(output)?;
    write_edge_list(&graph, BufWriter::new(file))
}

fn index_of(indices: &FxHashMap<&str, usize>, id: &str) -> Result<usize, ExportError> {
    indices
        .get(id)
        .copied()
        .ok_or_else(|| ExportError::UnknownNode { id: id.to_string() })
}

fn csv_error(e: csv::Error) -> ExportError {
    ExportError::Csv {
        message: e.to_string(),
    }
}
