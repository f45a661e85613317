//! Error types for every ccgraph layer.

pub mod error_code;

mod config_error;
mod export_error;
mod load_error;
mod selection_error;

pub use config_error::ConfigError;
pub use error_code::CcGraphErrorCode;
pub use export_error::ExportError;
pub use load_error::{json_kind, LoadError};
pub use selection_error::SelectionError;
