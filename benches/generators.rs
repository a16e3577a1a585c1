use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mazegen::{Dims, MazeFactory};

const SIZE: Dims = Dims(50, 50);

fn generate(id: &str) {
    let factory = MazeFactory::new();
    let grid = factory
        .create(black_box(id), black_box(SIZE), 16)
        .unwrap()
        .with_seed(black_box(42))
        .generate()
        .unwrap();
    black_box(grid);
}

pub fn kruskals(c: &mut Criterion) {
    c.bench_function("kruskals_50x50", |b| b.iter(|| generate("kruskal")));
}

pub fn backtracker(c: &mut Criterion) {
    c.bench_function("backtracker_50x50", |b| {
        b.iter(|| generate("recursive-backtracker"))
    });
}

pub fn ellers(c: &mut Criterion) {
    c.bench_function("ellers_50x50", |b| b.iter(|| generate("eller")));
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = kruskals, backtracker, ellers}
criterion_main!(benches);
