//! Configuration loading for OncoHub.
//! Reads oncohub.toml from the current directory or the path in ONCOHUB_CONFIG.
//! NCBI_API_KEY in the environment (or .env) overrides the configured key.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pubmed: PubMedConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3001".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PubMedConfig {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("ONCOHUB_CONFIG").unwrap_or_else(|_| "oncohub.toml".to_string());
        let mut config = Self::from_file(Path::new(&path))?;

        if let Ok(key) = std::env::var("NCBI_API_KEY") {
            if !key.is_empty() {
                config.pubmed.api_key = Some(key);
            }
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(?path, "No config file found, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Path of the JSON key-value store file.
    pub fn store_path(&self) -> PathBuf {
        self.store.data_dir.join("store.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:3001");
        assert!(config.pubmed.api_key.is_none());
        assert_eq!(config.store_path(), PathBuf::from("data/store.json"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [pubmed]
            api_key = "abc123"
            "#,
        )
        .unwrap();
        assert_eq!(config.pubmed.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.server.bind, "127.0.0.1:3001");
    }
}
