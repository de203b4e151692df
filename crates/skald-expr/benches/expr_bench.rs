//! Benchmarks for skald gate-expression operations
//!
//! Run with: cargo bench -p skald-expr

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use skald_expr::{Gate, GateExpr, parse};

/// An n-qubit CNOT ladder preceded by a Hadamard.
fn ladder(n: u32) -> GateExpr {
    let mut expr: GateExpr = Gate::h(0).into();
    for i in 0..n.saturating_sub(1) {
        expr = expr * Gate::cnot(i, i + 1);
    }
    expr
}

/// Benchmark product construction via the `*` operator.
fn bench_product_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_construction");

    for n in &[8u32, 32, 128] {
        group.bench_with_input(BenchmarkId::new("ladder", n), n, |b, &n| {
            b.iter(|| ladder(black_box(n)));
        });
    }

    group.finish();
}

/// Benchmark parsing of gate-expression text.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for n in &[8u32, 32, 128] {
        let source = ladder(*n).to_string();
        group.bench_with_input(BenchmarkId::new("ladder", n), &source, |b, source| {
            b.iter(|| parse(black_box(source)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_product_construction, bench_parse);
criterion_main!(benches);
