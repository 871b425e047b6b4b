//! Driver configuration file
//!
//! Read from `<config dir>/polysql/drivers.toml`:
//!
//! ```toml
//! # drivers listed here are not registered at startup
//! disabled = ["mssql"]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Startup configuration for the compiled-in drivers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriversConfig {
    /// Driver names to leave out of the registry
    pub disabled: Vec<String>,
}

impl DriversConfig {
    /// Location of the configuration file
    pub fn config_file() -> Result<PathBuf> {
        dirs::config_dir()
            .context("Could not determine config directory")
            .map(|p| p.join("polysql").join("drivers.toml"))
    }

    /// Load the configuration from its default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    /// Load the configuration from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no driver configuration file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read driver configuration: {:?}", path))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid driver configuration: {:?}", path))?;
        tracing::info!(path = %path.display(), disabled = ?config.disabled, "loaded driver configuration");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse driver configuration")
    }

    /// Whether the driver registered under `name` should be loaded
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.iter().any(|d| d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_enables_everything() {
        let config = DriversConfig::default();
        assert!(config.is_enabled("ora"));
        assert!(config.is_enabled("anything"));
    }

    #[test]
    fn test_parse_disabled_list() {
        let config = DriversConfig::from_toml_str(r#"disabled = ["mssql", "ora"]"#).unwrap();
        assert_eq!(config.disabled, vec!["mssql", "ora"]);
        assert!(!config.is_enabled("mssql"));
        assert!(config.is_enabled("postgres"));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(DriversConfig::from_toml_str("").unwrap(), DriversConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(DriversConfig::from_toml_str("enabled = true").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DriversConfig::load_from(&dir.path().join("drivers.toml")).unwrap();
        assert_eq!(config, DriversConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drivers.toml");
        std::fs::write(&path, "disabled = [\"sqlite3\"]\n").unwrap();

        let config = DriversConfig::load_from(&path).unwrap();
        assert!(!config.is_enabled("sqlite3"));
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drivers.toml");
        std::fs::write(&path, "disabled = 3").unwrap();

        let err = DriversConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid driver configuration"));
    }
}
