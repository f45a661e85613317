//! Loader configuration: schema strictness and parallel-edge policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoadError;

/// How strictly node records are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaMode {
    /// Only `id` is required. Typed attributes are parsed when present and
    /// well-typed; everything else is kept in the node's extra attributes.
    #[default]
    Lenient,
    /// Every typed attribute (`licenses_qty`, `cc_licenses`,
    /// `provider_domain`, `images`, `links_qty`, `node_size`) must be
    /// present, and all but `cc_licenses` must have the right JSON type.
    Strict,
}

impl SchemaMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for SchemaMode {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(LoadError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SchemaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do when several links share the same (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelEdges {
    /// Keep every link as its own edge.
    #[default]
    Keep,
    /// The last link's weight replaces the existing edge's weight.
    Replace,
    /// Weights of repeated links are added onto the existing edge.
    Sum,
}

/// Configuration for the node-link loader.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoaderConfig {
    /// Schema mode name: "lenient" or "strict". Default: "lenient".
    pub schema: Option<String>,
    /// Parallel-edge policy. Default: keep.
    pub parallel_edges: Option<ParallelEdges>,
}

impl LoaderConfig {
    /// Returns the effective schema mode, failing with `UnknownFormat` for
    /// an unrecognized name.
    pub fn effective_schema(&self) -> Result<SchemaMode, LoadError> {
        match &self.schema {
            Some(name) => name.parse(),
            None => Ok(SchemaMode::default()),
        }
    }

    /// Returns the effective parallel-edge policy, defaulting to keep.
    pub fn effective_parallel_edges(&self) -> ParallelEdges {
        self.parallel_edges.unwrap_or_default()
    }
}
