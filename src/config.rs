// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[browse]` - Picture directory, sort order, and extension filter
//! - `[display]` - Panorama projection
//! - `[loader]` - Background load teardown grace period
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PANOGAZE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use panogaze::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.browse.sort_order = Some(config::SortOrder::ModifiedDate);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use crate::paths;
use crate::port::Projection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Default grace period granted to a cancelled load before it is abandoned.
pub const DEFAULT_CANCEL_GRACE_SECS: u64 = 5;

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Directory browsing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowseConfig {
    /// Directory scanned for panoramas. Defaults to the platform picture
    /// directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_dir: Option<PathBuf>,

    /// Image file sorting order in directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Lowercase extensions to browse (e.g. `["jpg", "png"]`). Unset or
    /// empty browses every regular file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

/// Panorama display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Stereo layout assumed for browsed panoramas.
    #[serde(default = "default_projection", skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            projection: default_projection(),
        }
    }
}

/// Background loader settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Seconds to wait for a cancelled load before abandoning it at teardown.
    #[serde(
        default = "default_cancel_grace_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancel_grace_secs: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            cancel_grace_secs: default_cancel_grace_secs(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Directory browsing settings.
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Panorama display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Background loader settings.
    #[serde(default)]
    pub loader: LoaderConfig,
}

impl Config {
    /// Directory to browse: explicit setting or the platform default.
    #[must_use]
    pub fn picture_dir(&self) -> PathBuf {
        self.browse
            .picture_dir
            .clone()
            .unwrap_or_else(paths::default_picture_dir)
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.browse.sort_order.unwrap_or_default()
    }

    /// Extension filter, or `None` when every regular file is browsed.
    #[must_use]
    pub fn extension_filter(&self) -> Option<&[String]> {
        match self.browse.extensions.as_deref() {
            Some([]) | None => None,
            Some(list) => Some(list),
        }
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.display.projection.unwrap_or_default()
    }

    /// Grace period granted to a cancelled load at teardown.
    #[must_use]
    pub fn cancel_grace(&self) -> Duration {
        Duration::from_secs(
            self.loader
                .cancel_grace_secs
                .unwrap_or(DEFAULT_CANCEL_GRACE_SECS),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_projection() -> Option<Projection> {
    Some(Projection::default())
}

fn default_cancel_grace_secs() -> Option<u64> {
    Some(DEFAULT_CANCEL_GRACE_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional base directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir.or_else(paths::config_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Failed to load {}: {err}. Using default settings.",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
