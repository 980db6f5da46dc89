//! Configuration loading for the `giphy-node` binary.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. TOML file from `--config` / `GIPHY_NODE_CONFIG`
//! 3. `GIPHY_ENDPOINT` environment variable
//! 4. Command-line flags (applied by the caller)

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use nodes::giphy::{GiphyConfig, GiphySettings};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub giphy: GiphyConfig,
    /// Node settings, as they would appear in a workflow definition.
    #[serde(default)]
    pub settings: GiphySettings,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(path)?
            }
            None => {
                tracing::debug!("No config path specified, using defaults");
                Self::default()
            }
        };

        if let Ok(endpoint) = std::env::var("GIPHY_ENDPOINT") {
            config.giphy.endpoint = endpoint;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use nodes::giphy::Mode;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.giphy.endpoint, "https://api.giphy.com/v1/gifs/search");
        assert_eq!(config.giphy.lang, "en");
        assert_eq!(config.giphy.secret_name, "GIPHY");
        assert_eq!(config.settings.mode, Mode::RandomResult);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            [giphy]
            endpoint = "http://localhost:9999/search"
            timeout_secs = 10

            [settings]
            mode = "all_results"
            "#,
        )
        .unwrap();

        assert_eq!(config.giphy.endpoint, "http://localhost:9999/search");
        assert_eq!(config.giphy.timeout_secs, Some(10));
        assert_eq!(config.giphy.lang, "en");
        assert_eq!(config.settings.mode, Mode::AllResults);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Config::from_toml("[settings]\nmode = \"top\"").is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("giphy.toml");
        std::fs::write(&path, "[giphy]\nlang = \"de\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.giphy.lang, "de");

        assert!(Config::from_file(&dir.path().join("missing.toml")).is_err());
    }
}
