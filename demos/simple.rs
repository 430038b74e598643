use astar_visualizer::{CellState, Grid, Point, Search, SearchOutcome};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S    |
// | ### |
// |   # |
// | #   |
// |    E|
//  _____
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(5, 5).unwrap();
    for (x, y) in [(1, 1), (2, 1), (3, 1), (3, 2), (1, 3)] {
        grid.set_state(x, y, CellState::Obstacle).unwrap();
    }
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    grid.set_state(start.x, start.y, CellState::Start).unwrap();
    grid.set_state(end.x, end.y, CellState::End).unwrap();
    grid.recompute_adjacency();
    match Search::run(&mut grid, start, end).unwrap() {
        SearchOutcome::PathFound(path) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        SearchOutcome::NoPathFound => println!("No path found"),
    }
    print!("{}", grid);
}
