// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::domain::PageSize;
use iced_folio::gallery::{Gallery, MemoryStore, RecordingRenderer};
use iced_folio::portfolio::{derive_categories, CategoryTab, Image, PortfolioData};
use std::hint::black_box;

/// A portfolio shaped like a real site export: a few categories of a few
/// hundred photos each.
fn sample_portfolio() -> PortfolioData {
    let tabs = ["Nature", "Street", "Portraits", "Travel", "Architecture"]
        .iter()
        .map(|category| CategoryTab {
            category: (*category).to_string(),
            images: (0..400)
                .map(|n| Image {
                    path: format!("images/{category}/{n:04}.jpg"),
                    name: format!("{n:04}.jpg"),
                    drive_url: Some(format!("https://drive.google.com/file/d/{category}{n}")),
                })
                .collect(),
        })
        .collect();

    PortfolioData {
        tabs,
        all_images: None,
    }
}

fn gallery_pagination_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pagination");
    let data = sample_portfolio();

    group.bench_function("derive_categories", |b| {
        b.iter(|| black_box(derive_categories(black_box(&data))));
    });

    group.bench_function("page_through_all_photos", |b| {
        b.iter(|| {
            let mut renderer = RecordingRenderer::new();
            let mut gallery = Gallery::start(
                &data,
                MemoryStore::default(),
                PageSize::default(),
                &mut renderer,
            );
            while gallery.has_more() {
                gallery.load_more(&mut renderer);
            }
            black_box(gallery.rendered_count())
        });
    });

    group.bench_function("switch_categories", |b| {
        let mut renderer = RecordingRenderer::new();
        let mut gallery = Gallery::start(
            &data,
            MemoryStore::default(),
            PageSize::default(),
            &mut renderer,
        );
        b.iter(|| {
            for name in ["nature", "STREET", "unknown", "Travel"] {
                gallery.select(black_box(name), &mut renderer);
            }
            renderer.take();
        });
    });

    group.finish();
}

criterion_group!(benches, gallery_pagination_benchmark);
criterion_main!(benches);
