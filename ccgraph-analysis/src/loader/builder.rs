//! GraphBuilder — validates node-link records and builds a LicenseGraph.

use std::time::{Duration, Instant};

use serde_json::{Map, Value};

use ccgraph_core::config::{LoaderConfig, ParallelEdges, SchemaMode};
use ccgraph_core::errors::{json_kind, LoadError};
use ccgraph_core::graph::{EdgeInsert, GraphEngine, LicenseDistribution, LicenseGraph, Node, NodeAttributes};

use super::record::NodeLinkDocument;

/// Counters collected while building a graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    pub nodes: usize,
    pub edges: usize,
    /// Nodes whose `cc_licenses` was present but not a license → count map.
    pub invalid_distributions: usize,
    /// Node records whose id had already been seen.
    pub duplicate_nodes: usize,
    /// Links folded into an existing edge by the parallel-edge policy.
    pub merged_edges: usize,
    pub build_duration: Duration,
}

/// Builder for turning a node-link document into a graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    pub schema: SchemaMode,
    pub parallel_edges: ParallelEdges,
}

impl GraphBuilder {
    /// Create a lenient builder that keeps parallel edges.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: SchemaMode) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_parallel_edges(mut self, policy: ParallelEdges) -> Self {
        self.parallel_edges = policy;
        self
    }

    /// Create a builder from loader config. An unknown schema name fails
    /// with `UnknownFormat`.
    pub fn from_config(config: &LoaderConfig) -> Result<Self, LoadError> {
        Ok(Self {
            schema: config.effective_schema()?,
            parallel_edges: config.effective_parallel_edges(),
        })
    }

    /// Build a graph from a document.
    ///
    /// Phase 1: validate every node record and add it.
    /// Phase 2: add every link; both endpoints must already exist.
    pub fn build(&self, document: NodeLinkDocument) -> Result<(LicenseGraph, LoadStats), LoadError> {
        let start = Instant::now();
        let mut stats = LoadStats::default();
        let mut graph = LicenseGraph::with_capacity(document.nodes.len(), document.links.len());

        for (position, record) in document.nodes.into_iter().enumerate() {
            let (node, distribution_ok) = self.node_from_record(position, record)?;
            if !distribution_ok {
                stats.invalid_distributions += 1;
                tracing::warn!(node = %node.id, "cc_licenses is not a license count mapping, node skipped by license analyses");
            }
            let id = node.id.clone();
            // Strict records are complete, so a repeat replaces; lenient
            // records may be partial, so a repeat merges.
            let duplicate = match self.schema {
                SchemaMode::Strict => graph.add_node(node),
                SchemaMode::Lenient => graph.merge_node(node),
            };
            if duplicate {
                stats.duplicate_nodes += 1;
                tracing::warn!(node = %id, schema = %self.schema, "duplicate node id, later attributes take precedence");
            }
        }

        for link in &document.links {
            match graph.add_edge(&link.source, &link.target, link.value, self.parallel_edges)? {
                EdgeInsert::Added => {}
                EdgeInsert::Replaced | EdgeInsert::Summed => stats.merged_edges += 1,
            }
        }

        stats.nodes = graph.node_count();
        stats.edges = graph.edge_count();
        stats.build_duration = start.elapsed();

        tracing::info!(
            nodes = stats.nodes,
            edges = stats.edges,
            invalid_distributions = stats.invalid_distributions,
            duplicate_nodes = stats.duplicate_nodes,
            schema = %self.schema,
            "license graph built"
        );

        Ok((graph, stats))
    }

    /// Validate one node record. The flag is `false` when `cc_licenses` was
    /// present but malformed.
    fn node_from_record(&self, position: usize, mut record: Map<String, Value>) -> Result<(Node, bool), LoadError> {
        let id = match record.remove("id") {
            Some(Value::String(id)) => id,
            Some(other) => {
                return Err(LoadError::TypeConfusion {
                    at: format!("#{position}"),
                    expected: "string node id",
                    found: json_kind(&other),
                })
            }
            None => {
                return Err(LoadError::MissingField {
                    node: format!("#{position}"),
                    field: "id",
                })
            }
        };

        let mut fields = FieldReader {
            schema: self.schema,
            node: &id,
            record: &mut record,
        };

        let licenses_qty = fields.read("licenses_qty", "non-negative integer", Value::as_u64)?;
        let provider_domain = fields.read("provider_domain", "string", |v| v.as_str().map(str::to_string))?;
        let images = fields.read("images", "number", Value::as_f64)?;
        let links_qty = fields.read("links_qty", "non-negative integer", Value::as_u64)?;
        let node_size = fields.read("node_size", "non-negative integer", Value::as_u64)?;

        // A malformed distribution is never fatal, only "no license data".
        let (cc_licenses, distribution_ok) = match record.remove("cc_licenses") {
            Some(raw) => match LicenseDistribution::from_json(&raw) {
                Some(dist) if dist.is_empty() => (None, true),
                Some(dist) => (Some(dist), true),
                None => {
                    record.insert("cc_licenses".to_string(), raw);
                    (None, false)
                }
            },
            None if self.schema == SchemaMode::Strict => {
                return Err(LoadError::MissingField {
                    node: id,
                    field: "cc_licenses",
                })
            }
            None => (None, true),
        };

        let node = Node {
            id,
            attributes: NodeAttributes {
                licenses_qty,
                cc_licenses,
                provider_domain,
                images,
                links_qty,
                node_size,
                extra: record,
            },
        };
        Ok((node, distribution_ok))
    }
}

/// Pulls typed attributes out of a node record according to the schema.
struct FieldReader<'a> {
    schema: SchemaMode,
    node: &'a str,
    record: &'a mut Map<String, Value>,
}

impl FieldReader<'_> {
    /// Strict: absent → `MissingField`, mistyped → `InvalidField`.
    /// Lenient: absent → `None`, mistyped → `None` with the raw value left
    /// in the extra attributes.
    fn read<T>(
        &mut self,
        field: &'static str,
        expected: &'static str,
        parse: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<T>, LoadError> {
        let Some(raw) = self.record.get(field) else {
            return match self.schema {
                SchemaMode::Strict => Err(LoadError::MissingField {
                    node: self.node.to_string(),
                    field,
                }),
                SchemaMode::Lenient => Ok(None),
            };
        };

        match parse(raw) {
            Some(value) => {
                self.record.remove(field);
                Ok(Some(value))
            }
            None if self.schema == SchemaMode::Strict => Err(LoadError::InvalidField {
                node: self.node.to_string(),
                field,
                expected,
            }),
            None => {
                tracing::debug!(node = self.node, field, expected, "mistyped attribute kept as raw value");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn lenient_keeps_unknown_and_mistyped_attributes() {
        let builder = GraphBuilder::new();
        let (node, ok) = builder
            .node_from_record(0, record(json!({"id": "a", "node_size": "big", "color": "red"})))
            .unwrap();
        assert!(ok);
        assert_eq!(node.attributes.node_size, None);
        assert_eq!(node.attributes.extra.get("node_size"), Some(&json!("big")));
        assert_eq!(node.attributes.extra.get("color"), Some(&json!("red")));
    }

    #[test]
    fn strict_reports_first_missing_field() {
        let builder = GraphBuilder::new().with_schema(SchemaMode::Strict);
        let err = builder
            .node_from_record(0, record(json!({"id": "a", "licenses_qty": 1})))
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingField { ref node, field: "provider_domain" } if node == "a"));
    }

    #[test]
    fn missing_id_names_record_position() {
        let err = GraphBuilder::new()
            .node_from_record(4, record(json!({"images": 1.0})))
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingField { ref node, field: "id" } if node == "#4"));
    }

    #[test]
    fn empty_distribution_is_no_license_data() {
        let (node, ok) = GraphBuilder::new()
            .node_from_record(0, record(json!({"id": "c", "cc_licenses": {}})))
            .unwrap();
        assert!(ok);
        assert!(node.licenses().is_none());
    }
}
