// SPDX-License-Identifier: MPL-2.0
//! User-visible notice port.
//!
//! Short messages the viewer raises toward the user: an empty directory, a
//! failed decode. A host adapter typically surfaces these as toasts or an
//! on-screen banner; [`LogNotices`] is the headless fallback.

use std::fmt;
use std::path::PathBuf;

use log::warn;

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The browsed directory contains no loadable images.
    NoImages(PathBuf),
    /// An image failed to load or decode.
    LoadFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImages(dir) => write!(f, "No images found in {}", dir.display()),
            Self::LoadFailed(msg) => write!(f, "Error loading image: {msg}"),
        }
    }
}

/// Receiver for user-visible notices.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notice sink that writes every notice to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotices;

impl NoticeSink for LogNotices {
    fn notify(&self, notice: Notice) {
        warn!("{notice}");
    }
}
