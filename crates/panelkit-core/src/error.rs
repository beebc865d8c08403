//! Error types for panelkit
//!
//! The composer itself cannot fail. Only loading layout configuration from
//! disk has failure modes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`crate::LayoutConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid layout TOML
    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for config loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
