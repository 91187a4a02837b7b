// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Magnitude - Conversion cost by number of digit groups
// 2. Variants - Plain vs financial glyph sets
// 3. Oral Two - Cost of the two-pass rewriter
// 4. Stages - Assembler and zero collapser in isolation
// ============================================================================

use chinese_numeral::engine::{assemble, collapse_zeros};
use chinese_numeral::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ============================================================================
// Magnitude Benchmarks
// One to four digit groups
// ============================================================================

fn benchmark_magnitudes(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnitude");
    let plain = converter(VariantTag::Plain);

    for value in [
        1234i64,
        12_345_678,
        123_456_781_234,
        1_234_567_812_345_678,
    ]
    .iter()
    {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |b, &value| {
            b.iter(|| black_box(plain.convert(black_box(value), ConversionOptions::default())));
        });
    }

    group.finish();
}

// ============================================================================
// Variant Benchmarks
// ============================================================================

fn benchmark_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variant");

    for tag in VariantTag::ALL {
        let numeral = converter(tag);
        group.bench_with_input(BenchmarkId::from_parameter(tag), &tag, |b, _| {
            b.iter(|| {
                black_box(numeral.convert(black_box(100_200_030_004), ConversionOptions::default()))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Oral Two Benchmarks
// ============================================================================

fn benchmark_oral_two(c: &mut Criterion) {
    let mut group = c.benchmark_group("oral_two");
    let plain = converter(VariantTag::Plain);

    for (name, options) in [
        ("off", ConversionOptions::default()),
        ("on", ConversionOptions::oral()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(plain.convert(black_box(2_222_222_222_222_222), options)));
        });
    }

    group.finish();
}

// ============================================================================
// Stage Benchmarks
// ============================================================================

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let variant = VariantTag::Plain.variant();
    let groups = ["1200", "0000", "0000", "0001"];

    group.bench_function("assemble", |b| {
        b.iter(|| black_box(assemble(black_box(&groups), variant)));
    });

    let assembled = "一千二百兆零零零零零零零一";
    group.bench_function("collapse_zeros", |b| {
        b.iter(|| black_box(collapse_zeros(black_box(assembled), variant.zero())));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_magnitudes,
    benchmark_variants,
    benchmark_oral_two,
    benchmark_stages
);
criterion_main!(benches);
