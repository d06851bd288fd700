use criterion::{Criterion, criterion_group, criterion_main};

fn insert(c: &mut Criterion) {
    let mut tree = sanguine::Tree::<usize>::new();
    c.bench_function("sanguine_insert", |b| {
        b.iter(|| {
            for v in 0..100 {
                tree.push(v);
            }
        })
    });
    let mut tree = rbtree::RBTree::<usize, ()>::new();
    c.bench_function("rbtree_insert", |b| {
        b.iter(|| {
            for v in 0..100 {
                tree.insert(v, ());
            }
        })
    });
}

fn find(c: &mut Criterion) {
    let tree: sanguine::Tree<usize> = (0..1000).collect();
    c.bench_function("sanguine_find", |b| {
        b.iter(|| {
            for v in 0..1000 {
                assert!(tree.contains(&v));
            }
        })
    });
    let mut tree = rbtree::RBTree::<usize, ()>::new();
    for v in 0..1000 {
        tree.insert(v, ());
    }
    c.bench_function("rbtree_find", |b| {
        b.iter(|| {
            for v in 0..1000 {
                assert!(tree.contains_key(&v));
            }
        })
    });
}

fn erase(c: &mut Criterion) {
    c.bench_function("sanguine_erase", |b| {
        b.iter(|| {
            let mut tree: sanguine::Tree<usize> = (0..100).collect();
            for v in 0..100 {
                tree.pop(&v);
            }
        })
    });
    c.bench_function("rbtree_erase", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<usize, ()>::new();
            for v in 0..100 {
                tree.insert(v, ());
            }
            for v in 0..100 {
                tree.remove(&v);
            }
        })
    });
}

criterion_group!(benches, insert, find, erase);
criterion_main!(benches);
