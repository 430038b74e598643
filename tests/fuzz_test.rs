/// Fuzzes the search on many random grids. A path must be found exactly when the end is reachable,
/// it must be as short as a breadth-first search says, and repeated runs on the same grid must agree.
use astar_visualizer::{manhattan, CellState, Grid, Point, Search, SearchOutcome};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: i32, h: i32, rng: &mut StdRng, obstacle_chance: f64) -> Grid {
    let mut grid = Grid::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            if rng.gen_bool(obstacle_chance) {
                grid.set_state(x, y, CellState::Obstacle).unwrap();
            }
        }
    }
    grid
}

fn mark_endpoints(grid: &mut Grid, start: &Point, end: &Point) {
    grid.set_state(start.x, start.y, CellState::Start).unwrap();
    grid.set_state(end.x, end.y, CellState::End).unwrap();
    grid.recompute_adjacency();
}

/// Breadth-first distances from `start` over walkable cells, `None` where unreachable.
fn bfs_distances(grid: &Grid, start: &Point) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.len()];
    let mut queue = VecDeque::new();
    let start_ix = grid.ix_point(start).unwrap();
    dist[start_ix] = Some(0);
    queue.push_back(*start);
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.ix_point(&p).unwrap()].unwrap();
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let n = Point::new(p.x + dx, p.y + dy);
            if grid.is_walkable(n.x, n.y) {
                let ix = grid.ix_point(&n).unwrap();
                if dist[ix].is_none() {
                    dist[ix] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
    }
    dist
}

fn visualize_grid(grid: &Grid) {
    print!("{}", grid);
}

fn assert_valid_path(grid: &Grid, path: &[Point], start: &Point, end: &Point) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(end));
    for pair in path.windows(2) {
        assert_eq!(manhattan(&pair[0], &pair[1]), 1);
    }
    for p in &path[1..path.len() - 1] {
        assert_eq!(grid.cell_at(p.x, p.y).unwrap().state(), CellState::Path);
    }
}

#[test]
fn fuzz() {
    const N: i32 = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.35);
        mark_endpoints(&mut grid, &start, &end);
        let dist = bfs_distances(&grid, &start);
        let expected = dist[grid.ix_point(&end).unwrap()];

        let outcome = Search::run(&mut grid, start, end).unwrap();
        // Show the grid if the outcome disagrees with reachability
        if outcome.is_found() != expected.is_some() {
            visualize_grid(&grid);
        }
        match outcome {
            SearchOutcome::PathFound(path) => {
                assert_eq!(Some(path.len() - 1), expected);
                assert_valid_path(&grid, &path, &start, &end);
            }
            SearchOutcome::NoPathFound => {
                assert!(expected.is_none());
                for (ix, cell) in grid.cells().enumerate() {
                    assert_ne!(cell.state(), CellState::Path);
                    if dist[ix].is_some() && cell.pos() != start {
                        assert_eq!(cell.state(), CellState::Visited);
                    }
                }
            }
        }
    }
}

#[test]
fn open_grids_give_manhattan_paths() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let w = rng.gen_range(1..12);
        let h = rng.gen_range(1..12);
        let mut grid = Grid::new(w, h).unwrap();
        let start = Point::new(rng.gen_range(0..w), rng.gen_range(0..h));
        let end = Point::new(rng.gen_range(0..w), rng.gen_range(0..h));
        mark_endpoints(&mut grid, &start, &end);
        let outcome = Search::run(&mut grid, start, end).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.len() as u32 - 1, manhattan(&start, &end));
        if start != end {
            assert_valid_path(&grid, path, &start, &end);
        }
    }
}

#[test]
fn repeated_runs_agree() {
    const N: i32 = 10;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    let start = Point::new(0, N - 1);
    let end = Point::new(N - 1, 0);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.2);
        mark_endpoints(&mut grid, &start, &end);
        let mut copy = grid.clone();
        let first = Search::run(&mut grid, start, end).unwrap();
        let second = Search::run(&mut copy, start, end).unwrap();
        assert_eq!(first, second);
        assert_eq!(grid.to_string(), copy.to_string());
    }
}
