//! Layered configuration for ccgraph, loaded from TOML.

pub mod loader_config;
pub mod observability_config;
pub mod selection_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use loader_config::{LoaderConfig, ParallelEdges, SchemaMode};
pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CcGraphConfig {
    pub loader: LoaderConfig,
    pub selection: SelectionConfig,
    pub observability: ObservabilityConfig,
}

impl CcGraphConfig {
    /// Load config from a TOML string, falling back to defaults for missing
    /// fields. Values are validated after parsing.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Check values that TOML types alone cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.loader
            .effective_schema()
            .map_err(|e| ConfigError::Invalid {
                key: "loader.schema",
                message: e.to_string(),
            })?;

        let proportion = self.selection.effective_proportion();
        if !proportion.is_finite() || !(0.0..=1.0).contains(&proportion) {
            return Err(ConfigError::Invalid {
                key: "selection.proportion",
                message: format!("{proportion} is outside [0, 1]"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = CcGraphConfig::from_toml("").unwrap();
        assert_eq!(config.selection.effective_quota(), 1);
        assert_eq!(config.selection.effective_proportion(), 0.0);
        assert_eq!(config.observability.effective_log_level(), "info");
        assert_eq!(config.loader.effective_schema().unwrap(), SchemaMode::Lenient);
    }

    #[test]
    fn sections_override_defaults() {
        let config = CcGraphConfig::from_toml(
            r#"
[loader]
schema = "strict"
parallel_edges = "sum"

[selection]
quota = 3
proportion = 0.5
"#,
        )
        .unwrap();
        assert_eq!(config.loader.effective_schema().unwrap(), SchemaMode::Strict);
        assert_eq!(config.loader.effective_parallel_edges(), ParallelEdges::Sum);
        assert_eq!(config.selection.effective_quota(), 3);
        assert_eq!(config.selection.effective_proportion(), 0.5);
    }

    #[test]
    fn rejects_unknown_schema() {
        let err = CcGraphConfig::from_toml("[loader]\nschema = \"gt\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "loader.schema", .. }));
    }

    #[test]
    fn rejects_out_of_range_proportion() {
        let err = CcGraphConfig::from_toml("[selection]\nproportion = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "selection.proportion", .. }));
    }
}
