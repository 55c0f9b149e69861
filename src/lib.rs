// SPDX-License-Identifier: MPL-2.0
//! `panogaze` is the core of a minimal VR panorama viewer: a circular
//! browser over a directory of images, and the orchestration that decodes
//! them in the background and hands them to a rendering sink.
//!
//! The panorama widget, notice surface, and controller hardware live behind
//! the [`port`] traits; hosts implement those and drive a [`viewer::Viewer`]
//! through its event channel.

#![doc(html_root_url = "https://docs.rs/panogaze/0.1.0")]

pub mod browser;
pub mod config;
pub mod directory;
pub mod error;
pub mod loader;
pub mod paths;
pub mod port;
pub mod viewer;
