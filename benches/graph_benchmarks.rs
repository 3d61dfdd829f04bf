use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use labelgraph::Graph;

/// Square grid with unit-ish weights: vertex "r,c" links right and down
fn grid(side: usize) -> Graph {
    let mut graph = Graph::new();
    for r in 0..side {
        for c in 0..side {
            graph.add_vertex(format!("{},{}", r, c)).unwrap();
        }
    }
    for r in 0..side {
        for c in 0..side {
            let here = format!("{},{}", r, c);
            if c + 1 < side {
                let weight = ((r * 7 + c * 3) % 5 + 1) as u64;
                graph.add_edge(&here, &format!("{},{}", r, c + 1), weight).unwrap();
            }
            if r + 1 < side {
                let weight = ((r * 3 + c * 7) % 5 + 1) as u64;
                graph.add_edge(&here, &format!("{},{}", r + 1, c), weight).unwrap();
            }
        }
    }
    graph
}

/// Benchmark vertex insertion throughput
fn bench_vertex_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = Graph::new();
                for i in 0..size {
                    graph.add_vertex(format!("v{}", i)).unwrap();
                }
                criterion::black_box(graph.vertex_count());
            });
        });
    }
    group.finish();
}

/// Benchmark building a grid including edge validation
fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");

    for side in [10, 30, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, &side| {
            b.iter(|| criterion::black_box(grid(side).edge_count()));
        });
    }
    group.finish();
}

/// Benchmark corner-to-corner shortest path
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for side in [10, 30, 100].iter() {
        let graph = grid(*side);
        let target = format!("{},{}", side - 1, side - 1);

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let result = graph.shortest_path("0,0", &target).unwrap();
                criterion::black_box(result.cost);
            });
        });
    }
    group.finish();
}

/// Benchmark removing a high-degree vertex
fn bench_remove_hub(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_hub");

    for spokes in [100, 1000].iter() {
        let mut template = Graph::new();
        template.add_vertex("hub").unwrap();
        for i in 0..*spokes {
            let spoke = format!("s{}", i);
            template.add_vertex(spoke.as_str()).unwrap();
            template.add_edge("hub", &spoke, 1).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(spokes), spokes, |b, _| {
            b.iter(|| {
                let mut graph = template.clone();
                criterion::black_box(graph.remove_vertex("hub"));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_vertex_insertion,
    bench_grid_build,
    bench_shortest_path,
    bench_remove_hub,
);
criterion_main!(benches);
