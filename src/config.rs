//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then a TOML config file, then
//! environment variables, then command-line arguments.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_INPUT_PATH, ENV_OUTPUT_PATH};
use crate::processor::is_same_file;
use crate::{RecordsError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input and output locations for a run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Delimited student records file to read
    pub input_path: Option<PathBuf>,

    /// Report file to write
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when neither RUST_LOG nor -v/-q is given
    pub level: Option<String>,
}

/// Global configuration for student record processing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Location of the per-user config file
    pub fn default_config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine user config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RecordsError::io(
                format!("Failed to read config file {}: {}", path.display(), e),
                e,
            )
        })?;

        Self::from_toml_str(&contents).map_err(|source| RecordsError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_INPUT_PATH).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides input path", ENV_INPUT_PATH);
            self.processing.input_path = Some(PathBuf::from(input));
        }
        if let Some(output) = lookup(ENV_OUTPUT_PATH).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides output path", ENV_OUTPUT_PATH);
            self.processing.output_path = Some(PathBuf::from(output));
        }
    }

    /// Build configuration from every layer, lowest priority first
    pub fn load_layered(
        input_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env();

        if let Some(input_path) = input_path {
            config.processing.input_path = Some(input_path);
        }
        if let Some(output_path) = output_path {
            config.processing.output_path = Some(output_path);
        }

        Ok(config)
    }

    /// Check the paths that are set for consistency
    pub fn validate(&self) -> Result<()> {
        let processing = &self.processing;

        if processing
            .input_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(RecordsError::configuration("Input path cannot be empty"));
        }

        if processing
            .output_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(RecordsError::configuration("Output path cannot be empty"));
        }

        if let (Some(input), Some(output)) = (&processing.input_path, &processing.output_path) {
            if is_same_file(input, output) {
                return Err(RecordsError::configuration(format!(
                    "Output path must differ from input path: {}",
                    input.display()
                )));
            }
        }

        Ok(())
    }
}
