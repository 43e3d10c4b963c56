use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::class::types::{SplitOptions, DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR};
use crate::utils::file_utils;

/// Settings read from a TOML config file. Every field is optional.
///
/// ```toml
/// output_dir = "generated/models"
/// extension = "py"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitterConfig {
    /// Directory receiving the split files
    pub output_dir: Option<PathBuf>,

    /// Extension of the split files
    pub extension: Option<String>,
}

impl SplitterConfig {
    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let content = file_utils::read_file_to_string(path)?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build split options. Explicit overrides win over the file, the file
    /// wins over the defaults.
    pub fn resolve(&self, output_dir: Option<PathBuf>, extension: Option<String>) -> SplitOptions {
        let output_dir = output_dir
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let extension = extension
            .or_else(|| self.extension.clone())
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        SplitOptions { output_dir, extension }
    }
}
