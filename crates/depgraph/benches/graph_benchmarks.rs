//! Benchmarks for dependency graph operations
//!
//! Run with: cargo bench -p ant4eclipse-depgraph

#![allow(clippy::unwrap_used)]

use ant4eclipse_depgraph::DependencyGraph;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate a wide graph with many projects depending on a single runtime
fn generate_wide_graph(project_count: usize) -> DependencyGraph<String> {
    let mut graph = DependencyGraph::new();
    graph.add_vertex("runtime".to_string());

    for i in 0..project_count {
        graph.add_edge(format!("project_{i}"), "runtime".to_string());
    }

    graph
}

/// Generate a deep graph with a linear dependency chain
///
/// Vertices are added parent first, so every reduction pass frees one vertex.
fn generate_deep_graph(depth: usize) -> DependencyGraph<String> {
    let mut graph = DependencyGraph::new();

    for i in 1..depth {
        graph.add_edge(format!("project_{i}"), format!("project_{}", i - 1));
    }

    graph
}

/// Generate a diamond graph (fan-out then fan-in)
fn generate_diamond_graph(width: usize, depth: usize) -> DependencyGraph<String> {
    let mut graph = DependencyGraph::new();
    let mut prev_level: Vec<String> = vec!["runtime".to_string()];

    for level in 0..depth {
        let mut current_level = Vec::new();

        for w in 0..width {
            let name = format!("level_{level}_project_{w}");
            for dep in &prev_level {
                graph.add_edge(name.clone(), dep.clone());
            }
            current_level.push(name);
        }

        prev_level = current_level;
    }

    // Final feature depends on all leaf projects
    for dep in prev_level {
        graph.add_edge("feature".to_string(), dep);
    }

    graph
}

/// Generate a chain whose last project points back at the first
fn generate_cyclic_graph(length: usize) -> DependencyGraph<String> {
    let mut graph = generate_deep_graph(length);
    graph.add_edge("project_0".to_string(), format!("project_{}", length - 1));
    graph
}

fn benchmark_calculate_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_order");

    for count in [50, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let graph = generate_wide_graph(count);
            b.iter(|| black_box(graph.calculate_order().unwrap()));
        });
    }

    group.finish();
}

fn benchmark_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain_order");

    for depth in [10, 20, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let graph = generate_deep_graph(depth);
            b.iter(|| black_box(graph.calculate_order().unwrap()));
        });
    }

    group.finish();
}

fn benchmark_diamond_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("diamond_levels");

    for (width, depth) in [(5, 5), (10, 5), (5, 10), (10, 10)] {
        let label = format!("w{width}_d{depth}");
        group.bench_with_input(
            BenchmarkId::from_parameter(&label),
            &(width, depth),
            |b, &(width, depth)| {
                let graph = generate_diamond_graph(width, depth);
                b.iter(|| black_box(graph.calculate_levels().unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_cycle_reporting(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_reporting");

    for length in [10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let graph = generate_cyclic_graph(length);
            b.iter(|| black_box(graph.calculate_order().unwrap_err()));
        });
    }

    group.finish();
}

fn benchmark_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");

    for count in [100, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let graph = generate_wide_graph(count);
                black_box(graph)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_calculate_order,
    benchmark_deep_chain,
    benchmark_diamond_levels,
    benchmark_cycle_reporting,
    benchmark_graph_construction,
);

criterion_main!(benches);
