use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mig_inventory::{Component, ComponentKind, DependencyRef};
use mig_planner::DependencyGraph;

/// Layered inventory: each component requires up to three in the layer below
fn layered_inventory(size: usize) -> Vec<Component> {
    (0..size)
        .map(|i| {
            let mut component = Component::new(format!("c{i}"), format!("C{i}"), ComponentKind::CodeModule);
            for step in [1, 7, 31] {
                if i >= step {
                    let target = i - step;
                    component = component.with_requires(DependencyRef::new(
                        format!("c{target}"),
                        format!("C{target}"),
                        ComponentKind::CodeModule,
                    ));
                }
            }
            component
        })
        .collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    for size in [1_000, 10_000] {
        let inventory = layered_inventory(size);
        group.bench_with_input(BenchmarkId::new("build_and_plan", size), &inventory, |b, inventory| {
            b.iter(|| DependencyGraph::build(black_box(inventory)).plan());
        });
        let graph = DependencyGraph::build(&inventory);
        group.bench_with_input(BenchmarkId::new("ready_to_migrate", size), &graph, |b, graph| {
            b.iter(|| graph.ready_to_migrate().len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
