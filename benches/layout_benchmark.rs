//! Benchmarks for plandoc parsing, layout and export.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic plans of increasing length.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plandoc::{paginate, parse_plan, Exporter, PageGeometry, ScreenRenderer};

/// Creates a synthetic plan with the given number of sections.
fn create_test_plan(sections: usize) -> String {
    let mut plan = String::from("# Marketing Plan\n\n");

    for i in 0..sections {
        plan.push_str(&format!("## Section {}\n", i + 1));
        plan.push_str("**Goal: increase qualified leads**\n");
        plan.push_str("- Launch a referral programme with tiered rewards for existing customers\n");
        plan.push_str("- Run two webinars per month on industry topics\n");
        plan.push_str(&format!("{}. Track weekly conversion rates in the dashboard\n", i + 1));
        plan.push_str(
            "Content marketing remains the primary driver of organic traffic. Each article \
             targets a keyword cluster identified in the quarterly research and links back to \
             a gated resource that captures contact details for the nurture sequence.\n",
        );
        plan.push_str("---\n\n");
    }

    plan
}

/// Benchmark line classification.
fn bench_parsing(c: &mut Criterion) {
    let plan = create_test_plan(50);

    c.bench_function("parse_plan_50_sections", |b| {
        b.iter(|| parse_plan(black_box(&plan)));
    });
}

/// Benchmark screen rendering.
fn bench_screen(c: &mut Criterion) {
    let blocks = parse_plan(&create_test_plan(50));
    let renderer = ScreenRenderer::default();

    c.bench_function("screen_render_50_sections", |b| {
        b.iter(|| renderer.render(black_box(&blocks)));
    });
}

/// Benchmark pagination with different plan sizes.
fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagination");

    for sections in [10, 50, 200] {
        let blocks = parse_plan(&create_test_plan(sections));

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| paginate(black_box(&blocks), PageGeometry::a4()).unwrap());
        });
    }

    group.finish();
}

/// Benchmark PDF serialization.
fn bench_export(c: &mut Criterion) {
    let pages = paginate(parse_plan(&create_test_plan(50)), PageGeometry::a4()).unwrap();
    let exporter = Exporter::new();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    c.bench_function("pdf_render_50_sections", |b| {
        b.iter(|| exporter.render(black_box(&pages), date).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parsing,
    bench_screen,
    bench_pagination,
    bench_export
);
criterion_main!(benches);
