//! # astar_visualizer
//!
//! The core of an interactive pathfinding demonstrator. A [Grid] of [Cell]s is edited into
//! start, end and obstacle cells, after which an
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic looks for
//! a shortest 4-connected path. Every cell the search discovers, expands or puts on the path
//! changes state, so a front end only has to draw the cell states, looked up in a [Palette].
//!
//! The [Visualizer] ties these together the way a windowed front end would use them: it turns
//! pointer input into grid edits and runs the search either at once or one step per frame.
//!
//! ```
//! use astar_visualizer::{CellState, Grid, Point, Search};
//!
//! let mut grid = Grid::new(3, 1).unwrap();
//! grid.recompute_adjacency();
//! let outcome = Search::run(&mut grid, Point::new(0, 0), Point::new(2, 0)).unwrap();
//! assert_eq!(outcome.path().map(|p| p.len()), Some(3));
//! assert_eq!(grid.cell_at(1, 0).unwrap().state(), CellState::Path);
//! ```
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod palette;
pub mod search;
pub mod visualizer;

pub use crate::cell::{Cell, CellState};
pub use crate::config::GridConfig;
pub use crate::error::GridError;
pub use crate::grid::Grid;
pub use crate::palette::{Color, Palette};
pub use crate::search::{manhattan, Search, SearchOutcome, SearchStatus};
pub use crate::visualizer::{Prompt, Visualizer};
pub use grid_util::point::Point;
