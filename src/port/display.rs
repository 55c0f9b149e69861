// SPDX-License-Identifier: MPL-2.0
//! Panorama rendering port.
//!
//! A host adapter implements [`PanoramaSink`] and receives fully decoded
//! panoramas from the viewer together with per-image render options. The
//! sink is only ever driven by the viewer's foreground task, but it must be
//! `Send + Sync` so the viewer itself can be moved onto a runtime thread.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stereo layout of a panorama bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    /// Single equirectangular image shared by both eyes.
    Mono,
    /// Left eye on the top half, right eye on the bottom half.
    #[default]
    StereoOverUnder,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mono => write!(f, "mono"),
            Self::StereoOverUnder => write!(f, "stereo-over-under"),
        }
    }
}

/// Per-image rendering parameters passed alongside each panorama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub projection: Projection,
}

impl RenderOptions {
    #[must_use]
    pub fn new(projection: Projection) -> Self {
        Self { projection }
    }
}

/// Decoded panorama bitmap in RGBA8 format.
///
/// Pixel data is reference-counted so the viewer can hand the same decode
/// result to the sink and keep a copy for diagnostics without cloning the
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panorama {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl Panorama {
    /// Creates a panorama from raw RGBA8 pixel data.
    ///
    /// # Panics
    ///
    /// Panics if `rgba_bytes.len() != width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        assert_eq!(
            rgba_bytes.len(),
            (width as usize) * (height as usize) * 4,
            "RGBA byte length must equal width * height * 4"
        );
        Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// Error reported by a sink that failed to present a panorama.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayError(pub String);

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display Error: {}", self.0)
    }
}

impl std::error::Error for DisplayError {}

/// Rendering surface for decoded panoramas.
pub trait PanoramaSink: Send + Sync {
    /// Presents a decoded panorama with the given render options.
    fn display(&self, panorama: Panorama, options: RenderOptions) -> Result<(), DisplayError>;

    /// Suspends the render loop. Called when the host loses focus.
    fn pause_rendering(&self) {}

    /// Resumes a previously paused render loop.
    fn resume_rendering(&self) {}
}
