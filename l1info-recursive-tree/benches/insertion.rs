//! Benchmarks for recursive tree insertion and batch reconstruction.
//!
//! Run with:
//! ```
//! cargo bench -p l1info-recursive-tree --bench insertion
//! ```

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use l1info_recursive_tree::{RecursiveTree, hash_leaf_data, keccak256};

const HEIGHT: u8 = 32;

fn sample_leaves(n: u64) -> Vec<[u8; 32]> {
    (0..n)
        .map(|i| {
            let exit_root = keccak256(&i.to_be_bytes());
            let block_hash = keccak256(&(i ^ u64::MAX).to_be_bytes());
            hash_leaf_data(&exit_root, &block_hash, 1_700_000_000 + i)
        })
        .collect()
}

fn bench_add_leaf(c: &mut Criterion) {
    let leaves = sample_leaves(1);
    c.bench_function("add_leaf", |b| {
        // Insertion mutates the engine and indices must stay contiguous,
        // so each measured call gets a fresh engine from the setup closure.
        b.iter_batched(
            || RecursiveTree::new(HEIGHT).expect("height 32"),
            |mut tree| black_box(tree.add_leaf(0, leaves[0]).expect("insert")),
            BatchSize::SmallInput,
        )
    });
}

fn bench_from_leaves(c: &mut Criterion) {
    for n in [16u64, 256] {
        let leaves = sample_leaves(n);
        c.bench_function(&format!("from_leaves/{}", n), |b| {
            b.iter(|| {
                black_box(RecursiveTree::from_leaves(HEIGHT, &leaves).expect("rebuild"))
            })
        });
    }
}

criterion_group!(benches, bench_add_leaf, bench_from_leaves);
criterion_main!(benches);
