//! # Application Error Types

use stashgrid_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file is not valid TOML or does not match the schema.
    #[error("invalid config: {0}")]
    Parse(String),

    /// The file could not be read.
    #[error("cannot read config {path}: {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Rendered I/O error.
        message: String,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup failures of a stash session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StashError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded or is structurally invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for session startup.
pub type StashResult<T> = Result<T, StashError>;
