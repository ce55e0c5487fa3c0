//! Console configuration — loads and validates TOML configuration.
//!
//! Reads `vantage.toml` (or a custom path) and deserializes into typed
//! config structs. Every section is optional; a missing file yields the
//! defaults with a warning.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{VantageError, VantageResult};

/// Top-level console configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub findings: FindingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { log_level: "info".into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingsConfig {
    /// Page size for paginated finding queries.
    pub page_size: usize,
    /// SLA warning window in days. Policy value, adjustable per deployment.
    pub approaching_window_days: u32,
}

impl Default for FindingsConfig {
    fn default() -> Self {
        Self {
            page_size: crate::DEFAULT_PAGE_SIZE,
            approaching_window_days: crate::DEFAULT_APPROACHING_WINDOW_DAYS,
        }
    }
}

impl ConsoleConfig {
    /// Load config from a TOML file path.
    pub fn load(path: impl AsRef<Path>) -> VantageResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = toml::from_str(&content)
            .map_err(|e| VantageError::Config(format!("Failed to parse config: {}", e)))?;
        info!(
            path = %path.display(),
            page_size = config.findings.page_size,
            approaching_window_days = config.findings.approaching_window_days,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Save current config to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> VantageResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.findings.page_size, 10);
        assert_eq!(config.findings.approaching_window_days, 3);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ConsoleConfig::load("/nonexistent/vantage.toml").unwrap();
        assert_eq!(config.findings.page_size, 10);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vantage.toml");

        let mut config = ConsoleConfig::default();
        config.findings.page_size = 25;
        config.findings.approaching_window_days = 7;
        config.save(&path).unwrap();

        let loaded = ConsoleConfig::load(&path).unwrap();
        assert_eq!(loaded.findings.page_size, 25);
        assert_eq!(loaded.findings.approaching_window_days, 7);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vantage.toml");
        std::fs::write(&path, "[findings]\npage_size = 5\napproaching_window_days = 3\n").unwrap();

        let loaded = ConsoleConfig::load(&path).unwrap();
        assert_eq!(loaded.findings.page_size, 5);
        assert_eq!(loaded.general.log_level, "info");
    }
}
