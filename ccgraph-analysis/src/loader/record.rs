//! Raw node-link document records, before validation.

use serde::Deserialize;
use serde_json::{Map, Value};

use ccgraph_core::errors::{json_kind, LoadError};

/// Location reported for shape errors outside any node record.
const DOCUMENT: &str = "document";

/// One entry of the `links` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkRecord {
    pub source: String,
    pub target: String,
    /// Link volume, becomes the edge weight.
    pub value: u64,
}

/// A node-link document: node records with free-form attributes, and links.
#[derive(Debug, Clone, Default)]
pub struct NodeLinkDocument {
    pub nodes: Vec<Map<String, Value>>,
    pub links: Vec<LinkRecord>,
}

impl NodeLinkDocument {
    /// Split a parsed JSON value into node records and links.
    ///
    /// Fails with `TypeConfusion` when the value is not shaped like a
    /// node-link document, and with `Parse` when a link record is malformed.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let mut top = match value {
            Value::Object(top) => top,
            other => {
                return Err(LoadError::TypeConfusion {
                    at: DOCUMENT.to_string(),
                    expected: "node-link object",
                    found: json_kind(&other),
                })
            }
        };

        let nodes = match take_array(&mut top, "nodes")? {
            Some(items) => items
                .into_iter()
                .enumerate()
                .map(|(position, item)| match item {
                    Value::Object(record) => Ok(record),
                    other => Err(LoadError::TypeConfusion {
                        at: format!("#{position}"),
                        expected: "node record object",
                        found: json_kind(&other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => {
                return Err(LoadError::TypeConfusion {
                    at: DOCUMENT.to_string(),
                    expected: "`nodes` array",
                    found: "nothing",
                })
            }
        };

        // A graph without links is still a graph.
        let links = take_array(&mut top, "links")?
            .unwrap_or_default()
            .into_iter()
            .map(serde_json::from_value::<LinkRecord>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { nodes, links })
    }
}

fn take_array(top: &mut Map<String, Value>, key: &'static str) -> Result<Option<Vec<Value>>, LoadError> {
    match top.remove(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(LoadError::TypeConfusion {
            at: DOCUMENT.to_string(),
            expected: if key == "nodes" { "`nodes` array" } else { "`links` array" },
            found: json_kind(&other),
        }),
    }
}
