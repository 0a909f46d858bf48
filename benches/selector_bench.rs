//! Criterion benchmarks for the selector.
//!
//! Uses synthetic pools (integers, generated catalog records) to measure
//! sweep-loop overhead independent of any data source.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_curate::bounds::{max_count, max_duplication, max_percentage, min_percentage};
use u_curate::catalog::{curate, CatalogItem, Image, OfferCounts};
use u_curate::rules::{Rule, RuleSet};
use u_curate::selector::{ItemSelector, SelectorConfig};

// ===========================================================================
// Integers under mixed bounds
// ===========================================================================

fn int_selector() -> ItemSelector<u32> {
    ItemSelector::new(
        RuleSet::new()
            .with_rule(Rule::new("big", |x: &u32| *x % 100 > 90).with_bound(max_percentage(0.1)))
            .with_rule(Rule::new("even", |x: &u32| x % 2 == 0).with_bound(min_percentage(0.4)))
            .with_rule(Rule::new("bucket", |x: &u32| x % 17).with_bound(max_duplication(4)))
            .with_rule(Rule::new("sevens", |x: &u32| x % 7 == 0).with_bound(max_count(5))),
    )
}

fn bench_select_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_ints");
    group.sample_size(10);

    let selector = int_selector();
    for &n in &[100u32, 500, 1000] {
        let pool: Vec<u32> = (0..n).collect();
        let config = SelectorConfig::default().with_count(50).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(pool, config), |b, (p, c)| {
            b.iter(|| {
                let selection = selector.select(black_box(p), black_box(c));
                black_box(selection.len())
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Catalog preset, end to end
// ===========================================================================

fn synthetic_book(i: usize) -> CatalogItem {
    CatalogItem {
        id: format!("b{i}"),
        title: format!("Book {i}"),
        search: format!("term{}", i % 23),
        categories: vec![["Literary", "Horror", "History", "Self-Help"][i % 4].to_string()],
        is_fiction: i % 4 < 2,
        offer_counts: Some(OfferCounts {
            new: 1,
            used: (i % 5) as u32,
            collectible: 1,
            refurbished: 0,
        }),
        published_year: Some(1980 + (i % 45) as i32),
        has_english: true,
        format: Some("Paperback".into()),
        image: Some(Image {
            url: format!("https://img.example/{i}.jpg"),
            width: 100,
            height: 150,
        }),
        pages: Some(200),
        is_adult_only: false,
        tags: None,
    }
}

fn bench_curate_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("curate_catalog");
    group.sample_size(10);

    for &n in &[200usize, 1000] {
        let pool: Vec<CatalogItem> = (0..n).map(synthetic_book).collect();
        let config = SelectorConfig::default().with_count(40).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(pool, config), |b, (p, c)| {
            b.iter(|| {
                let curated = curate(black_box(p), 2024, black_box(c));
                black_box(curated)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select_ints, bench_curate_catalog);
criterion_main!(benches);
