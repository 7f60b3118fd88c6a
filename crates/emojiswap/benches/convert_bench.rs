//! Conversion throughput over mixed text.
//!
//! Run with: cargo bench -p emojiswap --bench convert_bench

use std::collections::HashSet;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use emojiswap::{Config, Emojiswap, ImageSet, NoImages};

const SAMPLE: &str = "Shipping today 🚀 with 👍🏽 from the team 👨\u{200D}👩\u{200D}👧 in 🇺🇸 and 🇨🇦. \
Press 1\u{FE0F}\u{20E3} to continue, #5 is plain text, ❤\u{FE0F} and ☺\u{FE0E} too. ";

fn mixed_text(repeat: usize) -> String {
    SAMPLE.repeat(repeat)
}

fn image_keys() -> HashSet<String> {
    [
        "1f680", "1f44d-1f3fd", "1f468", "1f469", "1f467", "1f1fa-1f1f8", "1f1e8-1f1e6", "31-20e3", "2764",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    for repeat in [1, 16, 256] {
        let text = mixed_text(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| emojiswap::segment(black_box(text)))
        });
    }
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let swap = Emojiswap::with_config(
        Config::new()
            .with_image_set(ImageSet::Twemoji)
            .with_revertible(true),
        image_keys(),
    );
    let plain = Emojiswap::new(NoImages);

    for repeat in [1, 16, 256] {
        let text = mixed_text(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("images", repeat), &text, |b, text| {
            b.iter(|| swap.convert(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("no_images", repeat), &text, |b, text| {
            b.iter(|| plain.convert(black_box(text)))
        });
    }
    group.finish();
}

fn bench_revert(c: &mut Criterion) {
    let swap = Emojiswap::with_config(
        Config::new()
            .with_image_set(ImageSet::Twemoji)
            .with_revertible(true),
        image_keys(),
    );
    let doc = swap.convert(&mixed_text(64));
    c.bench_function("revert/64", |b| b.iter(|| swap.revert(black_box(&doc))));
}

criterion_group!(benches, bench_segment, bench_convert, bench_revert);
criterion_main!(benches);
