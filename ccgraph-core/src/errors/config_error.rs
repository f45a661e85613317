//! Configuration errors.

use super::error_code::{self, CcGraphErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

impl CcGraphErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
