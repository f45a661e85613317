//! Edge-list export errors.

use super::error_code::{self, CcGraphErrorCode};

/// Errors that can occur while writing an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error writing edge list: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {message}")]
    Csv { message: String },

    #[error("Edge endpoint {id} has no assigned index")]
    UnknownNode { id: String },

    #[error("Failed to load source graph: {0}")]
    Load(#[from] super::LoadError),
}

impl CcGraphErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => error_code::EXPORT_IO,
            Self::Csv { .. } => error_code::EXPORT_CSV,
            Self::UnknownNode { .. } => error_code::EXPORT_UNKNOWN_NODE,
            Self::Load(e) => e.error_code(),
        }
    }
}
