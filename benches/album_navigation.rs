// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for album navigation operations.
//!
//! Measures the two costs behind the refresh-on-open policy:
//! - the fresh album query performed on every lightbox open
//! - the pure next/previous stepping

use album_lens::gallery::{Gallery, ImageEntry};
use album_lens::ui::lightbox::{Config, Message, State};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::PathBuf;

const GALLERY_SIZE: usize = 1_000;
const ALBUMS: usize = 10;

fn build_gallery() -> Gallery {
    let entries = (0..GALLERY_SIZE)
        .map(|i| ImageEntry {
            path: PathBuf::from(format!("images/{i:04}.jpg")),
            album: Some(format!("album-{}", i % ALBUMS)),
            title: None,
        })
        .collect();
    Gallery::from_entries(entries)
}

fn registered_lightbox() -> State {
    let mut state = State::default();
    state.register(Config {
        container_id: "lightbox".into(),
        image_id: "lightbox-image".into(),
        prev_id: "lightbox-prev".into(),
        next_id: "lightbox-next".into(),
    });
    state
}

/// Benchmark the fresh album query done on every open.
fn bench_album_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("album_navigation");
    let gallery = build_gallery();

    group.bench_function("album_entries", |b| {
        b.iter(|| {
            black_box(gallery.album_entries(black_box("album-3")));
        });
    });

    group.bench_function("open", |b| {
        let clicked = gallery.get(503).unwrap().clone();
        b.iter(|| {
            let mut lightbox = registered_lightbox();
            black_box(lightbox.open(&gallery, &clicked));
        });
    });

    group.finish();
}

/// Benchmark pure navigation stepping without any query.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("album_navigation");
    let gallery = build_gallery();

    let mut lightbox = registered_lightbox();
    lightbox.open(&gallery, &gallery.get(0).unwrap().clone());

    group.bench_function("next", |b| {
        b.iter(|| {
            black_box(lightbox.handle(Message::Next));
        });
    });

    group.bench_function("previous", |b| {
        b.iter(|| {
            black_box(lightbox.handle(Message::Previous));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_album_query, bench_navigate);
criterion_main!(benches);
