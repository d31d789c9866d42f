use arbor_bt::builder::{parallel, predicate, sequence};
use arbor_bt::{BehaviorTree, BoxedNode, ParallelPolicy};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn always_true(_state: &u64) -> bool {
    true
}

fn predicates(n: usize) -> Vec<BoxedNode<u64>> {
    (0..n).map(|_| predicate(always_true)).collect()
}

fn bench_sequence_tick(c: &mut Criterion) {
    let mut tree = BehaviorTree::new(sequence(predicates(32)));

    let mut state: u64 = 0;
    c.bench_function("arbor-bt/tick(sequence, predicates=32)", |b| {
        b.iter(|| {
            let outcome = tree.tick_fresh(&state);
            black_box(outcome.status);
            state = state.wrapping_add(1);
        })
    });
}

fn bench_parallel_tick(c: &mut Criterion) {
    let branches = (0..8)
        .map(|_| sequence(predicates(4)))
        .collect::<Vec<_>>();
    let policy = ParallelPolicy::all_or_any(branches.len(), true, false);
    let mut tree = BehaviorTree::new(parallel(policy, branches));

    let mut state: u64 = 0;
    c.bench_function("arbor-bt/tick(parallel=8x4)", |b| {
        b.iter(|| {
            let outcome = tree.tick_fresh(&state);
            black_box(outcome.status);
            state = state.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_sequence_tick, bench_parallel_tick);
criterion_main!(benches);
