// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the viewer's external surfaces.
//!
//! The panorama-rendering widget, the toast/notice surface, and the hardware
//! controller all live outside this crate; these modules define the interfaces
//! host adapters implement.
//!
//! # Available Ports
//!
//! - [`display`]: Panorama rendering sink and bitmap/projection types
//! - [`notice`]: User-visible notices (empty directory, load failures)
//! - [`input`]: Controller buttons, connection states, and edge tracking

pub mod display;
pub mod input;
pub mod notice;

// Re-export main types for convenience
pub use display::{DisplayError, Panorama, PanoramaSink, Projection, RenderOptions};
pub use input::{Button, ButtonTracker, ConnectionState};
pub use notice::{LogNotices, Notice, NoticeSink};
