use astar_visualizer::{CellState, Grid, Point, Search};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: i32, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(n, n).unwrap();
    for y in 0..n {
        for x in 0..n {
            if rng.gen_bool(0.25) {
                grid.set_state(x, y, CellState::Obstacle).unwrap();
            }
        }
    }
    grid.set_state(0, 0, CellState::Start).unwrap();
    grid.set_state(n - 1, n - 1, CellState::End).unwrap();
    grid.recompute_adjacency();
    grid
}

fn search_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [20, 50] {
        let grid = random_grid(n, &mut rng);
        let start = Point::new(0, 0);
        let end = Point::new(n - 1, n - 1);
        c.bench_function(format!("{n}x{n} random grid").as_str(), |b| {
            b.iter(|| {
                let mut grid = grid.clone();
                black_box(Search::run(&mut grid, start, end))
            })
        });
    }
    let mut open = Grid::new(50, 50).unwrap();
    c.bench_function("50x50 adjacency", |b| {
        b.iter(|| black_box(&mut open).recompute_adjacency())
    });
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
