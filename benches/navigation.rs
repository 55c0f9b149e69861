// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for directory listing and circular navigation.
//!
//! Measures the performance of:
//! - Directory snapshots (listing and sorting one directory)
//! - Navigation steps (which re-list the directory every call)
//! - Panorama decoding

use criterion::{criterion_group, criterion_main, Criterion};
use panogaze::browser::ImageBrowser;
use panogaze::config::SortOrder;
use panogaze::directory;
use panogaze::loader;
use std::hint::black_box;
use tempfile::TempDir;

/// Builds a directory of `count` fake image files.
fn fixture_dir(count: usize) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for i in 0..count {
        std::fs::write(
            dir.path().join(format!("pano_{i:04}.jpg")),
            b"fake image data",
        )
        .expect("failed to write fixture");
    }
    dir
}

/// Benchmark taking a fresh directory snapshot.
fn bench_list_images(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let dir = fixture_dir(100);

    group.bench_function("list_images_100", |b| {
        b.iter(|| {
            black_box(directory::list_images(
                dir.path(),
                None,
                SortOrder::Alphabetical,
            ));
        });
    });

    group.finish();
}

/// Benchmark one navigation step, including the re-listing it performs.
fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let dir = fixture_dir(100);
    let mut browser = ImageBrowser::new(dir.path().to_path_buf(), None, SortOrder::Alphabetical);

    group.bench_function("next_over_100", |b| {
        b.iter(|| {
            black_box(browser.next());
        });
    });

    group.finish();
}

/// Benchmark decoding a small panorama into RGBA8.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("sample.png");
    let image = image::RgbaImage::from_pixel(64, 64, image::Rgba([8, 16, 32, 255]));
    image.save(&path).expect("failed to write sample png");

    group.bench_function("decode_panorama_64px", |b| {
        b.iter(|| {
            black_box(loader::decode_panorama(&path).expect("decode should succeed"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_list_images, bench_next, bench_decode);
criterion_main!(benches);
