//! Secret file management.
//!
//! Supports reading API keys from `~/.config/registrar/secret.json`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root structure of secret.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
}

/// Loads the secret configuration from ~/.config/registrar/secret.json
pub fn load_secret_config() -> Result<SecretConfig, String> {
    load_secret_config_from(&get_secret_path()?)
}

/// Loads the secret configuration from an explicit path.
pub fn load_secret_config_from(path: &Path) -> Result<SecretConfig, String> {
    if !path.exists() {
        return Err(format!("Secret file not found at: {}", path.display()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read secret file at {}: {}", path.display(), e))?;

    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse secret file at {}: {}", path.display(), e))
}

/// Returns the path to the secret file: ~/.config/registrar/secret.json
fn get_secret_path() -> Result<PathBuf, String> {
    registrar_core::config::config_dir()
        .map(|dir| dir.join("secret.json"))
        .map_err(|e| e.to_string())
}
