use std::path::{Path, PathBuf};

use clap::ValueEnum;
use ridepath_core::DatasetSource;
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Settings read from the optional TOML configuration file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// JSON road dataset; the built-in city table when absent
    pub dataset: Option<PathBuf>,
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            log_level: "info".to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config '{}': {}", path.display(), e),
            )
        })?;
        Self::from_toml_str(&source)
    }

    pub fn dataset_source(&self) -> DatasetSource {
        self.dataset
            .clone()
            .map_or(DatasetSource::Builtin, DatasetSource::File)
    }
}
