//! Configuration loading and management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clipboard::BackendKind;

/// Config file location relative to the workspace root.
pub const CONFIG_PATH: &str = ".termscribe/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Explicit destination directory for transcripts.
    /// When unset, transcripts go to the workspace root.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Fall back to the home Desktop directory when no workspace is open
    #[serde(default = "default_desktop_fallback")]
    pub desktop_fallback: bool,

    /// Default clipboard backend for `termscribe clip`
    #[serde(default)]
    pub clipboard_backend: BackendKind,

    /// Delay before reading the clipboard, in milliseconds.
    /// Best effort only: there is no completion signal from whatever put
    /// the text on the clipboard.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_desktop_fallback() -> bool {
    true
}

fn default_settle_delay_ms() -> u64 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: None,
            desktop_fallback: default_desktop_fallback(),
            clipboard_backend: BackendKind::default(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a workspace directory, falling back to
    /// defaults when no config file exists.
    pub fn from_dir(work_dir: &Path) -> Result<Self> {
        let path = work_dir.join(CONFIG_PATH);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file when one is given, otherwise
    /// from the workspace directory. An explicit file must exist and parse.
    pub fn load(work_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(work_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.output_dir.is_none());
        assert!(settings.desktop_fallback);
        assert_eq!(settings.clipboard_backend, BackendKind::System);
        assert_eq!(settings.settle_delay_ms, 100);
    }

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.settings.desktop_fallback);
        assert_eq!(config.settings.settle_delay_ms, 100);
    }

    #[test]
    fn test_parse_settings() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            output_dir = "/tmp/transcripts"
            desktop_fallback = false
            clipboard_backend = "shell"
            settle_delay_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(
            config.settings.output_dir,
            Some(PathBuf::from("/tmp/transcripts"))
        );
        assert!(!config.settings.desktop_fallback);
        assert_eq!(config.settings.clipboard_backend, BackendKind::Shell);
        assert_eq!(config.settings.settle_delay_ms, 250);
    }

    #[test]
    fn test_load_with_explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[settings]\nsettle_delay_ms = 5\n").unwrap();

        let config = Config::load(dir.path(), Some(&path)).unwrap();
        assert_eq!(config.settings.settle_delay_ms, 5);
    }

    #[test]
    fn test_load_with_missing_explicit_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_from_dir_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_dir(dir.path()).unwrap();
        assert!(config.settings.output_dir.is_none());
    }
}
