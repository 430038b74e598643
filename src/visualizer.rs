use crate::cell::CellState;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::Grid;
use crate::palette::{Color, Palette};
use crate::search::{Search, SearchOutcome, SearchStatus};
use core::fmt;
use grid_util::point::Point;
use log::{debug, info, warn};

/// The message shown below the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    ChooseStart,
    ChooseEnd,
    AddObstacles,
    PathFound,
    NoPathFound,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Prompt::ChooseStart => "Choose the start node.",
            Prompt::ChooseEnd => "Choose the end node.",
            Prompt::AddObstacles => "Add obstacles and press ENTER.",
            Prompt::PathFound => "Path found! Press SUPPR to clear the window.",
            Prompt::NoPathFound => "No path found! Press SUPPR to clear the window.",
        };
        f.write_str(text)
    }
}

/// Drives a [Grid] from user input: the first painted cell becomes the start, the second the
/// end and every further one an obstacle. Once a search has finished the grid is frozen until
/// [reset](Visualizer::reset) is called.
#[derive(Clone, Debug)]
pub struct Visualizer {
    config: GridConfig,
    grid: Grid,
    palette: Palette,
    start: Option<Point>,
    end: Option<Point>,
    search: Option<Search>,
    result: Option<SearchOutcome>,
}

impl Visualizer {
    pub fn new(config: GridConfig) -> Result<Visualizer, GridError> {
        let grid = config.build_grid()?;
        Ok(Visualizer {
            config,
            grid,
            palette: Palette::default(),
            start: None,
            end: None,
            search: None,
            result: None,
        })
    }
    pub fn config(&self) -> &GridConfig {
        &self.config
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    /// The outcome of the last finished search, until the next reset.
    pub fn result(&self) -> Option<&SearchOutcome> {
        self.result.as_ref()
    }
    pub fn needs_reset(&self) -> bool {
        self.result.is_some()
    }
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }
    fn accepts_edits(&self) -> bool {
        !self.needs_reset() && !self.is_searching()
    }
    /// True if a search can be launched.
    pub fn ready(&self) -> bool {
        self.accepts_edits() && self.start.is_some() && self.end.is_some()
    }

    pub fn prompt(&self) -> Prompt {
        match &self.result {
            Some(SearchOutcome::PathFound(_)) => Prompt::PathFound,
            Some(SearchOutcome::NoPathFound) => Prompt::NoPathFound,
            None if self.start.is_none() => Prompt::ChooseStart,
            None if self.end.is_none() => Prompt::ChooseEnd,
            None => Prompt::AddObstacles,
        }
    }

    /// Primary button on the cell at `(x, y)`. Places the start, then the end, then obstacles.
    pub fn paint(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let ix = self.grid.ix(x, y)?;
        if !self.accepts_edits() {
            return Ok(());
        }
        let p = Point::new(x, y);
        let is_start = self.start == Some(p);
        let is_end = self.end == Some(p);
        if self.start.is_none() && !is_end {
            debug!("Start set to {}", p);
            self.grid.cell_mut(ix).set_state(CellState::Start);
            self.start = Some(p);
        } else if self.end.is_none() && !is_start {
            debug!("End set to {}", p);
            self.grid.cell_mut(ix).set_state(CellState::End);
            self.end = Some(p);
        } else if !is_start && !is_end {
            debug!("Obstacle placed at {}", p);
            self.grid.cell_mut(ix).set_state(CellState::Obstacle);
        }
        Ok(())
    }

    /// Secondary button on the cell at `(x, y)`. Clears the cell, unsetting the start or end
    /// if it was one of them.
    pub fn erase(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let ix = self.grid.ix(x, y)?;
        if !self.accepts_edits() {
            return Ok(());
        }
        let p = Point::new(x, y);
        self.grid.cell_mut(ix).reset();
        if self.start == Some(p) {
            debug!("Start {} removed", p);
            self.start = None;
        } else if self.end == Some(p) {
            debug!("End {} removed", p);
            self.end = None;
        }
        Ok(())
    }

    /// [paint](Self::paint) at a pointer position. Returns the cell that was hit, if any.
    pub fn paint_at(&mut self, px: f32, py: f32) -> Option<Point> {
        let p = self.grid.locate_cell(px, py)?.pos();
        self.paint(p.x, p.y).ok()?;
        Some(p)
    }

    /// [erase](Self::erase) at a pointer position. Returns the cell that was hit, if any.
    pub fn erase_at(&mut self, px: f32, py: f32) -> Option<Point> {
        let p = self.grid.locate_cell(px, py)?.pos();
        self.erase(p.x, p.y).ok()?;
        Some(p)
    }

    /// Recomputes the adjacency and prepares a search to be advanced with [tick](Self::tick).
    /// Returns false if no search could be started.
    pub fn begin_search(&mut self) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            warn!("Cannot search before both start and end are chosen");
            return false;
        };
        if !self.ready() {
            warn!("Cannot search while the grid still shows a previous search");
            return false;
        }
        self.grid.recompute_adjacency();
        match Search::new(&self.grid, start, end) {
            Ok(search) => {
                info!("Searching a path from {} to {}", start, end);
                self.search = Some(search);
                true
            }
            Err(err) => {
                warn!("Cannot search from {} to {}: {}", start, end, err);
                false
            }
        }
    }

    /// Advances a running search by one step. Returns the outcome on the step that finishes it.
    pub fn tick(&mut self) -> Option<SearchOutcome> {
        let search = self.search.as_mut()?;
        match search.step(&mut self.grid) {
            SearchStatus::Running => None,
            SearchStatus::Done(outcome) => {
                self.search = None;
                self.result = Some(outcome.clone());
                Some(outcome)
            }
        }
    }

    /// Runs a whole search at once.
    pub fn launch(&mut self) -> Option<SearchOutcome> {
        if !self.begin_search() {
            return None;
        }
        loop {
            if let Some(outcome) = self.tick() {
                return Some(outcome);
            }
        }
    }

    /// Clears the grid, the endpoints and any search.
    pub fn reset(&mut self) {
        info!("Resetting the grid");
        self.start = None;
        self.end = None;
        self.search = None;
        self.result = None;
        self.grid.reset();
    }

    pub fn color_at(&self, x: i32, y: i32) -> Result<Color, GridError> {
        Ok(self.palette.color(self.grid.cell_at(x, y)?.state()))
    }

    /// Cells that need to be redrawn since the last call.
    pub fn take_redraws(&mut self) -> Vec<Point> {
        self.grid.take_redraws()
    }
}
