//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/menunav/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scan::ScanOptions;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Scanner settings
    pub scan: ScanConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Folder shown in the menu when no path is given
    pub root: Option<PathBuf>,
    /// Show hidden files by default
    pub show_hidden: bool,
    /// Attach icons to menu entries
    pub icons: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: None,
            show_hidden: false,
            icons: true,
        }
    }
}

/// Scanner settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum folder depth to scan (unset = unlimited)
    pub max_depth: Option<usize>,
    /// Descend into symlinked folders
    pub follow_symlinks: bool,
    /// List folders before files
    pub directories_first: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: false,
            directories_first: true,
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/menunav)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("menunav"))
    }

    /// Get the config file path (~/.config/menunav/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Scanner options described by this file
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            show_hidden: self.general.show_hidden,
            max_depth: self.scan.max_depth,
            follow_symlinks: self.scan.follow_symlinks,
            directories_first: self.scan.directories_first,
        }
    }
}
