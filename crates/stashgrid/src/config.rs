//! # Stash Viewer Configuration
//!
//! ```toml
//! catalog = "data/stash.toml"   # omit to use the bundled sample
//! event_capacity = 256
//!
//! [viewport]
//! width = 1920.0
//! height = 1080.0
//!
//! [tooltip]
//! margin = 20.0
//! panel = { width = 384.0, height = 240.0 }
//! ```
//!
//! Every field is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use stashgrid_ui::{Size, TooltipConfig};

use crate::error::{ConfigError, ConfigResult};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StashConfig {
    /// Catalog file; `None` selects the bundled sample catalog.
    pub catalog: Option<PathBuf>,
    /// Initial viewport size.
    pub viewport: Size,
    /// Tooltip margin and initial panel estimate.
    pub tooltip: TooltipConfig,
    /// Bounded event channel capacity.
    pub event_capacity: usize,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            viewport: Size::new(1920.0, 1080.0),
            tooltip: TooltipConfig::default(),
            event_capacity: 256,
        }
    }
}

impl StashConfig {
    /// Parses and validates a configuration document.
    ///
    /// # Errors
    ///
    /// `Parse` on malformed TOML or unknown keys, `Invalid` on out-of-range
    /// values.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::info!(
            catalog = ?config.catalog,
            event_capacity = config.event_capacity,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// `Invalid` naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "event_capacity",
                reason: "must be at least 1".into(),
            });
        }
        if !self.viewport.is_positive() {
            let Size { width, height } = self.viewport;
            return Err(ConfigError::Invalid {
                field: "viewport",
                reason: format!("{width}x{height} is not a positive size"),
            });
        }
        if self.tooltip.margin.is_nan() || self.tooltip.margin < 0.0 {
            return Err(ConfigError::Invalid {
                field: "tooltip.margin",
                reason: format!("{} is not a non-negative number", self.tooltip.margin),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = StashConfig::from_toml_str("").unwrap();

        assert_eq!(config, StashConfig::default());
        assert_eq!(config.tooltip.margin, 20.0);
        assert_eq!(config.tooltip.panel, Size::new(384.0, 240.0));
    }

    #[test]
    fn test_partial_override() {
        let config = StashConfig::from_toml_str(
            r#"
            catalog = "my_stash.toml"
            event_capacity = 8

            [viewport]
            width = 1280.0
            height = 720.0

            [tooltip]
            margin = 12.0
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("my_stash.toml")));
        assert_eq!(config.event_capacity, 8);
        assert_eq!(config.viewport, Size::new(1280.0, 720.0));
        assert_eq!(config.tooltip.margin, 12.0);
        assert_eq!(config.tooltip.panel, Size::new(384.0, 240.0));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = StashConfig::from_toml_str("capacity = 3").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = StashConfig::from_toml_str("event_capacity = 0").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { field: "event_capacity", .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = StashConfig::load("/definitely/not/here.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
