// SPDX-License-Identifier: MPL-2.0
//! Circular browsing over the images of a directory.
//!
//! The browser owns a signed cursor and resolves it against a fresh
//! directory snapshot on every call, so files added or removed behind its
//! back are picked up on the next navigation step. The cursor wraps in both
//! directions and keeps moving even while the directory is empty.

use crate::config::SortOrder;
use crate::directory;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Cyclic image browser over one directory.
#[derive(Debug, Clone)]
pub struct ImageBrowser {
    dir: PathBuf,
    cursor: i64,
    extensions: Option<Vec<String>>,
    sort_order: SortOrder,
}

impl ImageBrowser {
    /// Creates a browser over `dir`. `extensions` restricts the listing to
    /// the given lowercase extensions; `None` browses every regular file.
    #[must_use]
    pub fn new(dir: PathBuf, extensions: Option<Vec<String>>, sort_order: SortOrder) -> Self {
        Self {
            dir,
            cursor: 0,
            extensions,
            sort_order,
        }
    }

    /// Advances the cursor and resolves the image it now points at.
    pub fn next(&mut self) -> Option<PathBuf> {
        self.cursor = self.cursor.wrapping_add(1);
        self.current_image()
    }

    /// Steps the cursor back and resolves the image it now points at.
    pub fn previous(&mut self) -> Option<PathBuf> {
        self.cursor = self.cursor.wrapping_sub(1);
        self.current_image()
    }

    /// Resolves the cursor against a fresh listing of the directory.
    ///
    /// The cursor is wrapped into the listing's range and the wrapped value
    /// is stored back. Returns `None` when the directory currently has no
    /// matching images; the cursor is left as-is in that case.
    pub fn current_image(&mut self) -> Option<PathBuf> {
        let images =
            directory::list_images(&self.dir, self.extensions.as_deref(), self.sort_order);
        if images.is_empty() {
            warn!("No images in {}", self.dir.display());
            return None;
        }

        let index = bound(self.cursor, images.len());
        self.cursor = index as i64;
        let image = images.into_iter().nth(index);
        debug!("Image {index}: {:?}", image);
        image
    }

    /// Switches to `dir` if it is a readable directory, keeping the cursor.
    ///
    /// Returns whether the directory was accepted.
    pub fn select(&mut self, dir: &Path) -> bool {
        if dir.is_dir() && std::fs::read_dir(dir).is_ok() {
            info!("Selected directory {}", dir.display());
            self.dir = dir.to_path_buf();
            true
        } else {
            warn!("Cannot select {}", dir.display());
            false
        }
    }

    /// The directory currently browsed.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.dir
    }
}

/// Wraps `index` into `[0, len)`.
///
/// Equivalent to repeatedly adding or subtracting `len`; defined for every
/// `i64` input. `len` must be non-zero.
fn bound(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn browser_over(dir: &Path) -> ImageBrowser {
        ImageBrowser::new(dir.to_path_buf(), None, SortOrder::Alphabetical)
    }

    #[test]
    fn next_walks_the_directory_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");

        let mut browser = browser_over(temp_dir.path());

        assert_eq!(browser.current_image(), Some(img_a.clone()));
        assert_eq!(browser.next(), Some(img_b));
        assert_eq!(browser.next(), Some(img_c.clone()));
        assert_eq!(browser.next(), Some(img_a));
        assert_eq!(browser.previous(), Some(img_c));
    }

    #[test]
    fn a_full_cycle_returns_to_the_same_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.jpg", "b.jpg", "c.jpg", "d.jpg"] {
            create_test_image(temp_dir.path(), name);
        }

        let mut browser = browser_over(temp_dir.path());
        browser.next();
        let start = browser.current_image();

        for _ in 0..4 {
            browser.next();
        }

        assert_eq!(browser.current_image(), start);
    }

    #[test]
    fn previous_undoes_next() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            create_test_image(temp_dir.path(), name);
        }

        let mut browser = browser_over(temp_dir.path());
        let start = browser.next();

        browser.next();
        assert_eq!(browser.previous(), start);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.jpg");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");

        let mut browser = browser_over(temp_dir.path());

        assert_eq!(browser.previous(), Some(img_c));
    }

    #[test]
    fn single_image_keeps_resolving_in_both_directions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let only = create_test_image(temp_dir.path(), "only.jpg");

        let mut browser = browser_over(temp_dir.path());

        assert_eq!(browser.next(), Some(only.clone()));
        assert_eq!(browser.next(), Some(only.clone()));
        assert_eq!(browser.previous(), Some(only));
    }

    #[test]
    fn empty_directory_resolves_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let mut browser = browser_over(temp_dir.path());

        assert_eq!(browser.current_image(), None);
        assert_eq!(browser.next(), None);
        assert_eq!(browser.previous(), None);
    }

    #[test]
    fn cursor_keeps_moving_while_the_directory_is_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut browser = browser_over(temp_dir.path());

        // Three presses on an empty set leave the cursor at 3.
        assert_eq!(browser.next(), None);
        assert_eq!(browser.next(), None);
        assert_eq!(browser.next(), None);

        create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        // 3 wrapped into a set of 2 lands on the second image.
        assert_eq!(browser.current_image(), Some(img_b));
    }

    #[test]
    fn listing_refreshes_between_calls() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let mut browser = browser_over(temp_dir.path());
        assert_eq!(browser.current_image(), Some(img_a.clone()));

        fs::remove_file(&img_a).expect("failed to remove image");
        assert_eq!(browser.current_image(), Some(img_b));
    }

    #[test]
    fn extension_filter_hides_other_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img = create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.png");

        let mut browser = ImageBrowser::new(
            temp_dir.path().to_path_buf(),
            Some(vec!["jpg".to_string()]),
            SortOrder::Alphabetical,
        );

        assert_eq!(browser.current_image(), Some(img.clone()));
        assert_eq!(browser.next(), Some(img));
    }

    #[test]
    fn select_accepts_a_readable_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let other = temp_dir.path().join("other");
        fs::create_dir(&other).expect("failed to create dir");
        let img = create_test_image(&other, "o.jpg");

        let mut browser = browser_over(temp_dir.path());

        assert!(browser.select(&other));
        assert_eq!(browser.directory(), other.as_path());
        assert_eq!(browser.current_image(), Some(img));
    }

    #[test]
    fn select_rejects_files_and_missing_paths() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = create_test_image(temp_dir.path(), "a.jpg");

        let mut browser = browser_over(temp_dir.path());

        assert!(!browser.select(&file));
        assert!(!browser.select(&temp_dir.path().join("missing")));
        assert_eq!(browser.directory(), temp_dir.path());
    }

    #[test]
    fn select_keeps_the_cursor_position() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        fs::create_dir(&first).expect("failed to create dir");
        fs::create_dir(&second).expect("failed to create dir");
        create_test_image(&first, "a.jpg");
        create_test_image(&first, "b.jpg");
        create_test_image(&second, "x.jpg");
        let img_y = create_test_image(&second, "y.jpg");
        create_test_image(&second, "z.jpg");

        let mut browser = browser_over(&first);
        browser.next();

        assert!(browser.select(&second));
        assert_eq!(browser.current_image(), Some(img_y));
    }

    #[test]
    fn bound_wraps_into_range() {
        assert_eq!(bound(0, 3), 0);
        assert_eq!(bound(2, 3), 2);
        assert_eq!(bound(3, 3), 0);
        assert_eq!(bound(7, 3), 1);
        assert_eq!(bound(-1, 3), 2);
        assert_eq!(bound(-3, 3), 0);
        assert_eq!(bound(-7, 3), 2);
    }

    #[test]
    fn bound_is_total_at_the_extremes() {
        assert!(bound(i64::MAX, 3) < 3);
        assert!(bound(i64::MIN, 3) < 3);
        assert_eq!(bound(i64::MIN, 1), 0);
        assert_eq!(bound(i64::MAX, 1), 0);
    }
}
