//! Console settings loaded from `~/.config/registrar/config.toml`.

use crate::error::{RegistrarError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ELECTION_DATE: &str = "06/02/2026";
pub const DEFAULT_STATION: &str = "District 04";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Root of `config.toml`. Every key is optional.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Stamped on every committed record and given to the assistant.
    pub election_date: String,
    /// Station shown in the console header.
    pub station: String,
    /// Text-generation model identifier.
    pub model: String,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            election_date: DEFAULT_ELECTION_DATE.to_string(),
            station: DEFAULT_STATION.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl RegistrarConfig {
    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Reads the config from its default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join("config.toml"))
    }
}

/// Returns the configuration directory: ~/.config/registrar
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RegistrarError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("registrar"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = RegistrarConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, RegistrarConfig::default());
        assert_eq!(config.election_date, "06/02/2026");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "station = \"District 07\"\n").unwrap();

        let config = RegistrarConfig::load_from(&path).unwrap();
        assert_eq!(config.station, "District 07");
        assert_eq!(config.election_date, DEFAULT_ELECTION_DATE);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "station = [").unwrap();

        let err = RegistrarConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, RegistrarError::Serialization { .. }));
    }
}
