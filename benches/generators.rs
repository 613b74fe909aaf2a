use criterion::{criterion_group, criterion_main, Criterion};
use perfect_mazes::{generators, random};

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = random::seeded(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(32, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_350(c: &mut Criterion) {
    let mut rng = random::seeded(350);
    c.bench_function("recursive_backtracker_maze_350", move |b| {
        b.iter(|| generators::recursive_backtracker(350, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_350
);
criterion_main!(benches);
