// SPDX-License-Identifier: MPL-2.0
//! Centralized path resolution for the viewer's directories.
//!
//! # Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Environment variables** (`PANOGAZE_CONFIG_DIR`, `PANOGAZE_PICTURE_DIR`)
//! 2. **Platform default** - via the `dirs` crate
//!
//! The picture directory mirrors the fixed `Pictures/<app>` location the viewer
//! scans by default; the config directory holds `settings.toml`.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Panogaze";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PANOGAZE_CONFIG_DIR";

/// Environment variable to override the default picture directory.
pub const ENV_PICTURE_DIR: &str = "PANOGAZE_PICTURE_DIR";

/// Returns the directory that holds `settings.toml`.
///
/// # Resolution Order
///
/// 1. `PANOGAZE_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/Panogaze/`
///    - macOS: `~/Library/Application Support/Panogaze/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Panogaze\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the default directory scanned for panorama images.
///
/// # Resolution Order
///
/// 1. `PANOGAZE_PICTURE_DIR` environment variable (if set and non-empty)
/// 2. Platform picture directory with the app name appended
///    (e.g. `~/Pictures/Panogaze/`)
/// 3. `<home>/Pictures/Panogaze` when the platform reports no picture directory
/// 4. Relative `Pictures/Panogaze` as a last resort
///
/// The returned directory is not required to exist; a missing directory is
/// treated as an empty image set by the browser.
pub fn default_picture_dir() -> PathBuf {
    if let Ok(env_path) = std::env::var(ENV_PICTURE_DIR) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("Pictures"))
        .join(APP_NAME)
}
