//! Demo configuration, read from TOML.
//!
//! Every field has a default, so a missing file (or no `SUGAR_CONFIG` at all)
//! reproduces the stock demo output.

use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV_VAR: &str = "SUGAR_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub start: i32,
    pub end: i32,
    /// Values pushed onto the source between the two materializations.
    pub appended: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            pipeline: PipelineConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 10,
            appended: vec![11],
        }
    }
}

impl PipelineConfig {
    pub fn source_range(&self) -> Range<i32> {
        self.start..self.end
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    /// Reads the file named by `SUGAR_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let PipelineConfig { start, end, .. } = self.pipeline;
        if start > end {
            return Err(ConfigError::BackwardsRange { start, end });
        }
        Ok(())
    }
}
