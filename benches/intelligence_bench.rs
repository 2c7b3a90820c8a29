// ABOUTME: Criterion benchmarks for the inventory intelligence engine
// ABOUTME: Measures expiration classification, nutrient aggregation, recipe matching, and dashboards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the inventory intelligence engine.
//!
//! Covers each engine component on its own plus the full dashboard build
//! over households of increasing size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_recipes, generate_snapshot, reference_date, InventorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fridge_intelligence::{ExpirationClassifier, MatchPolicy, NutrientAggregator, RecipeMatcher};
use fridge_inventory::dashboard::{DashboardOptions, InventoryDashboard};
use fridge_inventory::IntelligenceConfig;

const SIZES: [InventorySize; 3] = [InventorySize::Small, InventorySize::Medium, InventorySize::Large];

/// Benchmark expiring-item selection over the flattened inventory
fn bench_expiration(c: &mut Criterion) {
    let mut group = c.benchmark_group("expiration");
    let classifier = ExpirationClassifier::default();
    let today = reference_date();

    for size in SIZES {
        let items = generate_snapshot(size).flatten();
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("expiring_items", size.total_items()),
            &items,
            |b, items| {
                b.iter(|| black_box(classifier.expiring_items(black_box(items), today)));
            },
        );
    }

    group.finish();
}

/// Benchmark canonical nutrient summation and the full report
fn bench_nutrition(c: &mut Criterion) {
    let mut group = c.benchmark_group("nutrition");
    let aggregator = NutrientAggregator::default();

    for size in SIZES {
        let items = generate_snapshot(size).flatten();
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("aggregate", size.total_items()),
            &items,
            |b, items| {
                b.iter(|| black_box(aggregator.aggregate(black_box(items))));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("report", size.total_items()),
            &items,
            |b, items| {
                b.iter(|| black_box(aggregator.report(black_box(items))));
            },
        );
    }

    group.finish();
}

/// Benchmark recipe evaluation under both match policies
fn bench_recipe_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_matching");
    let items = generate_snapshot(InventorySize::Large).flatten();
    let recipes = generate_recipes(50);
    group.throughput(Throughput::Elements(recipes.len() as u64));

    for policy in [MatchPolicy::Exact, MatchPolicy::Substring] {
        let matcher = RecipeMatcher::with_policy(policy);
        group.bench_with_input(
            BenchmarkId::new("evaluate_50_recipes", policy),
            &recipes,
            |b, recipes| {
                b.iter(|| black_box(matcher.evaluate_all(recipes.iter().cloned(), &items)));
            },
        );
    }

    group.finish();
}

/// Benchmark the complete dashboard composition
fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    group.sample_size(50);
    let config = IntelligenceConfig::default();
    let recipes = generate_recipes(20);

    for size in SIZES {
        let snapshot = generate_snapshot(size);
        group.bench_with_input(
            BenchmarkId::new("build", size.total_items()),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    let options = DashboardOptions::default().with_recipes(recipes.clone());
                    black_box(InventoryDashboard::build(
                        snapshot,
                        reference_date(),
                        &config,
                        options,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_expiration,
    bench_nutrition,
    bench_recipe_matching,
    bench_dashboard
);
criterion_main!(benches);
