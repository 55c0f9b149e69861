// SPDX-License-Identifier: MPL-2.0
//! Directory snapshots for finding and sorting panorama images.
//!
//! Listing is always a fresh read of the filesystem so external changes
//! (new captures, deletions) are picked up on the next navigation step.
//! Unreadable directories degrade to an empty listing rather than an error.

use crate::config::SortOrder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Returns a fresh, sorted snapshot of the image files in `dir`.
///
/// Only regular (non-directory) entries are returned. When `filter` is set,
/// an entry must carry one of the given lowercase extensions; files without
/// an extension never match a filter. A missing or unreadable directory
/// yields an empty vec.
pub fn list_images(dir: &Path, filter: Option<&[String]>, sort_order: SortOrder) -> Vec<PathBuf> {
    debug!("Loading images from {}", dir.display());

    if !dir.is_dir() {
        warn!("{} is not a directory", dir.display());
        return Vec::new();
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Cannot read image directory {}: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut images: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| !path.is_dir() && matches_filter(path, filter))
        .collect();

    sort_images(&mut images, sort_order);
    images
}

/// Enumerates `root` and every readable subdirectory beneath it.
///
/// Returns (label, path) pairs: `root` itself carries `root_label`, and each
/// subdirectory is labeled with its path components below the root joined by
/// `/`. Within a directory, sorted siblings are listed before their
/// subtrees. Unreadable subtrees are skipped.
pub fn directory_tree(root: &Path, root_label: &str) -> Vec<(String, PathBuf)> {
    let mut tree = vec![(root_label.to_string(), root.to_path_buf())];
    tree.extend(subdirectories(root, ""));
    tree
}

fn subdirectories(parent: &Path, prefix: &str) -> Vec<(String, PathBuf)> {
    let entries = match std::fs::read_dir(parent) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let named: Vec<(String, PathBuf)> = dirs
        .into_iter()
        .map(|dir| {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (combine(prefix, &name), dir)
        })
        .collect();

    let mut tree = named.clone();
    for (label, dir) in &named {
        tree.extend(subdirectories(dir, label));
    }
    tree
}

/// Joins two label components with `/`, skipping blank sides.
fn combine(a: &str, b: &str) -> String {
    match (a.trim().is_empty(), b.trim().is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{a}/{b}"),
    }
}

fn matches_filter(path: &Path, filter: Option<&[String]>) -> bool {
    let Some(extensions) = filter else {
        return true;
    };
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.iter().any(|allowed| *allowed == ext))
}

/// Sorts image paths in place according to the specified sort order.
fn sort_images(images: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            images.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            images.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}
