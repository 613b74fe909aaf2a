use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use perfect_mazes::cells::GridCoordinate;
use perfect_mazes::generators;
use perfect_mazes::pathing;
use perfect_mazes::random;

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let maze = generators::recursive_backtracker(350, &mut random::seeded(1)).unwrap();
        let start_coord = GridCoordinate::new(250, 250);
        b.iter(|| pathing::Distances::new(&maze, start_coord))
    });
}

fn bench_furthest_points(c: &mut Criterion) {
    c.bench_function("furthest_points", |b| {
        let maze = generators::recursive_backtracker(350, &mut random::seeded(1)).unwrap();
        let start_coord = GridCoordinate::new(250, 250);
        let distances = pathing::Distances::new(&maze, start_coord).unwrap();
        b.iter(|| distances.furthest_points_on_grid())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let maze = generators::recursive_backtracker(350, &mut random::seeded(1)).unwrap();
        let start_coord = GridCoordinate::new(250, 250);
        let distances = pathing::Distances::new(&maze, start_coord).unwrap();
        let end_coord = GridCoordinate::new(0, 0);
        b.iter(|| pathing::shortest_path(&maze, &distances, end_coord))
    });
}

fn bench_longest_path(c: &mut Criterion) {
    c.bench_function("longest_path", |b| {
        let maze = generators::recursive_backtracker(350, &mut random::seeded(1)).unwrap();
        b.iter(|| pathing::longest_path(&maze))
    });
}

criterion_group!(benches,
    bench_distances,
    bench_furthest_points,
    bench_shortest_path,
    bench_longest_path
);
criterion_main!(benches);
