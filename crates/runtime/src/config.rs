//! Runtime configuration and its TOML loader.

use std::path::{Path, PathBuf};

use anyhow::Context;
use eon_core::ChargenConfig;
use serde::{Deserialize, Serialize};

/// Key the character snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "eon5CharTool";

/// Runtime configuration shared by the session and its store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Directory holding the snapshot file. Falls back to the platform data
    /// directory when unset.
    pub snapshot_dir: Option<PathBuf>,
    pub storage_key: String,
    /// Save after every dispatched action.
    pub autosave: bool,
    pub rules: ChargenConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            autosave: true,
            rules: ChargenConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// `snapshot_dir`, or the platform data directory:
    /// - macOS: `~/Library/Application Support/eon5`
    /// - Linux: `~/.local/share/eon5` (or `$XDG_DATA_HOME/eon5`)
    /// - Windows: `%APPDATA%\eon5`
    /// - Fallback: `./save_data`
    pub fn resolved_snapshot_dir(&self) -> PathBuf {
        if let Some(dir) = &self.snapshot_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "eon5")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }
}

/// Loader for runtime configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`RuntimeConfig`]; missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<RuntimeConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<RuntimeConfig> {
        toml::from_str(content).context("Failed to parse config TOML")
    }
}
