//! Loader errors: structural problems in a node-link document.

use super::error_code::{self, CcGraphErrorCode};

/// Errors raised while turning a node-link document into a graph.
///
/// All of these are fatal: the loader never returns a partial graph.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Node {node} is missing required field `{field}`")]
    MissingField { node: String, field: &'static str },

    #[error("Node {node} field `{field}` has the wrong type, expected {expected}")]
    InvalidField {
        node: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("Link {from} -> {to} references unknown node {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Unknown graph format: {format} (expected \"lenient\" or \"strict\")")]
    UnknownFormat { format: String },

    /// `at` names the offending place: `document` or a node record
    /// position such as `#3`.
    #[error("Expected {expected} at {at}, found {found}")]
    TypeConfusion {
        at: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("I/O error reading graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON graph document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CcGraphErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => error_code::MISSING_FIELD,
            Self::InvalidField { .. } => error_code::INVALID_FIELD,
            Self::DanglingEdge { .. } => error_code::DANGLING_EDGE,
            Self::UnknownFormat { .. } => error_code::UNKNOWN_FORMAT,
            Self::TypeConfusion { .. } => error_code::TYPE_CONFUSION,
            Self::Io(_) => error_code::LOAD_IO,
            Self::Parse(_) => error_code::LOAD_PARSE,
        }
    }
}

/// Short JSON type name used in [`LoadError::TypeConfusion`] messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
