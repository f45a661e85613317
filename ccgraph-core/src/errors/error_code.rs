//! Stable string codes for every ccgraph error, for logs and callers that
//! match on errors across crate boundaries.

/// Maps an error to its stable code.
pub trait CcGraphErrorCode {
    fn error_code(&self) -> &'static str;
}

// Loader
pub const MISSING_FIELD: &str = "LOAD_MISSING_FIELD";
pub const INVALID_FIELD: &str = "LOAD_INVALID_FIELD";
pub const DANGLING_EDGE: &str = "LOAD_DANGLING_EDGE";
pub const UNKNOWN_FORMAT: &str = "LOAD_UNKNOWN_FORMAT";
pub const TYPE_CONFUSION: &str = "LOAD_TYPE_CONFUSION";
pub const LOAD_IO: &str = "LOAD_IO";
pub const LOAD_PARSE: &str = "LOAD_PARSE";

// Selection
pub const INVALID_THRESHOLD: &str = "SELECTION_INVALID_THRESHOLD";

// Export
pub const EXPORT_IO: &str = "EXPORT_IO";
pub const EXPORT_CSV: &str = "EXPORT_CSV";
pub const EXPORT_UNKNOWN_NODE: &str = "EXPORT_UNKNOWN_NODE";

// Config
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
