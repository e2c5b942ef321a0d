//! Error types for the demo programs.
//!
//! The sequence and embellish operations are total, so everything here comes
//! from the ambient pieces: reading configuration, installing the log
//! subscriber, and writing to stdout.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Source range {start}..{end} runs backwards (start must not exceed end)")]
    BackwardsRange { start: i32, end: i32 },
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum SugarError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid log filter: {0}")]
    Logging(String),
}
