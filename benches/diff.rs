use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_tree_diff::{distance, CanonicalTree};
use itertools::Itertools;

fn tree(leaves: Vec<CanonicalTree>, r: usize) -> CanonicalTree {
    if leaves.len() < r {
        CanonicalTree::with_children("n", leaves)
    } else {
        let chunks = (leaves.len() + r - 1) / r;
        CanonicalTree::with_children(
            "n",
            leaves
                .into_iter()
                .chunks(chunks)
                .into_iter()
                .map(|c| tree(c.collect(), r))
                .collect(),
        )
    }
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical tree diff");
    for r in [4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(r),
            &tree(vec![CanonicalTree::new("n"); 60], r),
            |b, t| b.iter(|| distance(t, t)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
