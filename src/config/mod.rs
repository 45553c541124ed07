//! Global configuration management.
//!
//! The global config file (`~/.sandboxes/config.toml`, overridable via the
//! `SANDBOXES_CONFIG_PATH` environment variable or `--config`) stores the
//! optional GitHub token used to raise API rate limits, plus an optional API
//! base override that tests point at a local fixture server.
//!
//! # Lifecycle
//!
//! The config is read once at startup and passed down explicitly; nothing
//! re-reads it mid-run. A file that exists but fails to parse is treated as
//! absent (with a warning) so a stale or hand-mangled file degrades to
//! anonymous requests instead of breaking the tool.
//!
//! # Security
//!
//! The token lives only in this file, is never part of version control, and
//! is never logged; `auth show` prints a masked form only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_PATH_ENV, DEFAULT_API_BASE};

/// Global user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Bearer token attached to every API request when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Base URL of the listing API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self { github_token: None, api_base: default_api_base() }
    }
}

impl GlobalConfig {
    /// Resolve the config file location.
    ///
    /// `SANDBOXES_CONFIG_PATH` wins when set; otherwise
    /// `~/.sandboxes/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().context("could not determine home directory")?;
        Ok(home.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    /// Load the config from the default location.
    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?).await
    }

    /// Load the config from a specific path.
    ///
    /// A missing file yields defaults. A file that fails to parse also
    /// yields defaults, with a warning — the file is considered invalidated
    /// and will be rewritten on the next `auth` command.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "config file is invalid, falling back to defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Save the config to the default location.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?).await
    }

    /// Save the config to a specific path, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, contents)
            .await
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Masked form of the stored token for display, or `None` when absent.
    ///
    /// Short tokens are fully masked; longer ones keep the first and last
    /// four characters. Counts characters, not bytes, so arbitrary token
    /// contents cannot split a multibyte character.
    pub fn masked_token(&self) -> Option<String> {
        self.github_token.as_deref().map(|token| {
            let chars: Vec<char> = token.chars().collect();
            if chars.len() <= 12 {
                "*".repeat(chars.len())
            } else {
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{head}…{tail}")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("config.toml")).await.unwrap();
        assert!(config.github_token.is_none());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = GlobalConfig {
            github_token: Some("ghp_1234567890abcdef".to_string()),
            api_base: "http://127.0.0.1:8080".to_string(),
        };
        config.save_to(&path).await.unwrap();

        let loaded = GlobalConfig::load_from(&path).await.unwrap();
        assert_eq!(loaded.github_token.as_deref(), Some("ghp_1234567890abcdef"));
        assert_eq!(loaded.api_base, "http://127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_invalid_file_degrades_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "this is [not valid toml").await.unwrap();

        let config = GlobalConfig::load_from(&path).await.unwrap();
        assert!(config.github_token.is_none());
    }

    #[test]
    fn test_masked_token() {
        let config = GlobalConfig {
            github_token: Some("ghp_1234567890abcdefgh".to_string()),
            ..Default::default()
        };
        let masked = config.masked_token().unwrap();
        assert!(masked.starts_with("ghp_"));
        assert!(masked.ends_with("efgh"));
        assert!(!masked.contains("1234567890"));

        let short = GlobalConfig {
            github_token: Some("tiny".to_string()),
            ..Default::default()
        };
        assert_eq!(short.masked_token().unwrap(), "****");

        assert!(GlobalConfig::default().masked_token().is_none());
    }

    #[test]
    fn test_masked_token_multibyte() {
        // 5 characters but 15 bytes; must not panic on a byte boundary.
        let short = GlobalConfig {
            github_token: Some("€€€€€".to_string()),
            ..Default::default()
        };
        assert_eq!(short.masked_token().unwrap(), "*****");

        // Over the full-mask threshold in characters.
        let long = GlobalConfig {
            github_token: Some("€€€€€€€€€€€€€x".to_string()),
            ..Default::default()
        };
        let masked = long.masked_token().unwrap();
        assert_eq!(masked, "€€€€…€€€x");
    }
}
