//! Selection errors.

use super::error_code::{self, CcGraphErrorCode};

/// Errors from the license subgraph selector.
///
/// Empty selections are not errors; they yield an empty view.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid selection threshold `{name}`: {value} ({reason})")]
    InvalidThreshold {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl CcGraphErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidThreshold { .. } => error_code::INVALID_THRESHOLD,
        }
    }
}
