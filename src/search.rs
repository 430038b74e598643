//! A* over the adjacency lists of a [Grid] with unit edge costs and the Manhattan heuristic.
//!
//! The open set is scanned linearly for the smallest f-score instead of being kept in a heap.
//! Among equal f-scores the cell that entered the open set first wins, and a neighbour is only
//! relaxed on a strict improvement, so the reconstructed path is fully determined by the
//! neighbour order of [DIRECTIONS](crate::grid::DIRECTIONS).
use crate::cell::{CellState, N_NEIGHBOURS};
use crate::error::GridError;
use crate::grid::Grid;
use fxhash::{FxBuildHasher, FxHashMap};
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{info, trace, warn};
use smallvec::SmallVec;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

pub type Cost = u32;

/// Score of cells that have not been reached yet.
const UNREACHED: Cost = Cost::MAX;
/// Cost of moving between two adjacent cells.
const STEP_COST: Cost = 1;

/// Manhattan distance, admissible and consistent on a 4-connected unit-cost grid.
pub fn manhattan(p1: &Point, p2: &Point) -> Cost {
    p1.manhattan_distance(p2) as Cost
}

/// The two normal ways a search ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The cells from start to end, both included.
    PathFound(Vec<Point>),
    NoPathFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            SearchOutcome::NoPathFound => None,
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::PathFound(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Done(SearchOutcome),
}

/// State of a single search. Create one with [Search::new] and advance it with [Search::step],
/// or let [Search::run] drive it to the end. The grid may only be edited between steps.
#[derive(Clone, Debug)]
pub struct Search {
    start: usize,
    end: usize,
    goal: Point,
    open: FxIndexSet<usize>,
    came_from: FxHashMap<usize, usize>,
    g_score: Vec<Cost>,
    f_score: Vec<Cost>,
    expanded: usize,
    outcome: Option<SearchOutcome>,
}

impl Search {
    /// Sets up the scores and the open set. The caller makes sure start and end are distinct
    /// walkable cells and that the adjacency of `grid` is up to date.
    pub fn new(grid: &Grid, start: Point, end: Point) -> Result<Search, GridError> {
        let start_ix = grid.ix_point(&start)?;
        let end_ix = grid.ix_point(&end)?;
        let mut g_score = vec![UNREACHED; grid.len()];
        let mut f_score = vec![UNREACHED; grid.len()];
        g_score[start_ix] = 0;
        f_score[start_ix] = manhattan(&start, &end);
        let mut open = FxIndexSet::default();
        open.insert(start_ix);
        Ok(Search {
            start: start_ix,
            end: end_ix,
            goal: end,
            open,
            came_from: FxHashMap::default(),
            g_score,
            f_score,
            expanded: 0,
            outcome: None,
        })
    }

    /// Runs a search from `start` to `end` to completion, marking cells on `grid` as it goes.
    pub fn run(grid: &mut Grid, start: Point, end: Point) -> Result<SearchOutcome, GridError> {
        let mut search = Search::new(grid, start, end)?;
        loop {
            if let SearchStatus::Done(outcome) = search.step(grid) {
                return Ok(outcome);
            }
        }
    }

    /// Executes one iteration: picks the open cell with the lowest f-score and either finishes
    /// on it or expands it. Once the search is done this keeps returning the same outcome and
    /// leaves the grid untouched. A grid of another size than the one the search was created
    /// for is left untouched too and ends the search without a path.
    pub fn step(&mut self, grid: &mut Grid) -> SearchStatus {
        if let Some(outcome) = &self.outcome {
            return SearchStatus::Done(outcome.clone());
        }
        if grid.len() != self.g_score.len() {
            warn!(
                "Search was set up for {} cells but stepped on a grid of {}",
                self.g_score.len(),
                grid.len()
            );
            return self.finish(SearchOutcome::NoPathFound);
        }
        let Some(current) = self.select_current() else {
            return self.finish(SearchOutcome::NoPathFound);
        };
        trace!(
            "Expanding {} (g = {}, f = {})",
            grid.cell(current).pos(),
            self.g_score[current],
            self.f_score[current]
        );
        if current == self.end {
            let path = self.reconstruct_path(grid);
            return self.finish(SearchOutcome::PathFound(path));
        }
        self.open.shift_remove(&current);

        let neighbours: SmallVec<[usize; N_NEIGHBOURS]> =
            SmallVec::from_slice(grid.cell(current).neighbours());
        let tentative_g = self.g_score[current] + STEP_COST;
        for neighbour in neighbours {
            if tentative_g >= self.g_score[neighbour] {
                continue;
            }
            self.came_from.insert(neighbour, current);
            self.g_score[neighbour] = tentative_g;
            self.f_score[neighbour] = tentative_g + manhattan(&grid.cell(neighbour).pos(), &self.goal);
            if self.open.insert(neighbour) {
                grid.cell_mut(neighbour).set_state(CellState::Frontier);
            }
        }
        if current != self.start {
            grid.cell_mut(current).set_state(CellState::Visited);
        }
        self.expanded += 1;
        SearchStatus::Running
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }
    /// Number of cells expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
    pub fn open_len(&self) -> usize {
        self.open.len()
    }
    /// Best known cost from the start to the cell with index `ix`, if it has been reached.
    pub fn g_score(&self, ix: usize) -> Option<Cost> {
        self.g_score.get(ix).copied().filter(|&g| g != UNREACHED)
    }

    fn select_current(&self) -> Option<usize> {
        // min_by_key keeps the first of several minima, i.e. the earliest inserted cell.
        self.open
            .iter()
            .copied()
            .min_by_key(|&ix| self.f_score[ix])
    }

    /// Follows the predecessors back from the end, marking them as path, then restores the
    /// start and end markers.
    fn reconstruct_path(&self, grid: &mut Grid) -> Vec<Point> {
        let mut path = std::iter::successors(Some(self.end), |ix| self.came_from.get(ix).copied())
            .collect::<Vec<usize>>();
        for &ix in path.iter().skip(1) {
            grid.cell_mut(ix).set_state(CellState::Path);
        }
        grid.cell_mut(self.start).set_state(CellState::Start);
        grid.cell_mut(self.end).set_state(CellState::End);
        path.reverse();
        path.into_iter().map(|ix| grid.cell(ix).pos()).collect()
    }

    fn finish(&mut self, outcome: SearchOutcome) -> SearchStatus {
        match &outcome {
            SearchOutcome::PathFound(path) => info!(
                "Path to {} found with {} cells after expanding {} cells",
                self.goal,
                path.len(),
                self.expanded
            ),
            SearchOutcome::NoPathFound => info!(
                "No path to {} after expanding {} cells",
                self.goal, self.expanded
            ),
        }
        self.outcome = Some(outcome.clone());
        SearchStatus::Done(outcome)
    }
}
