use grid_util::point::Point;
use smallvec::SmallVec;

/// Number of neighbours a cell can have on a 4-connected grid.
pub const N_NEIGHBOURS: usize = 4;

/// Number of distinct [CellState]s.
pub const N_STATES: usize = 7;

/// The semantic state of a [Cell]. Exactly one state holds at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Obstacle,
    /// Discovered by the search but not yet expanded.
    Frontier,
    /// Expanded by the search.
    Visited,
    /// Part of the reconstructed path.
    Path,
}

impl CellState {
    pub const ALL: [CellState; N_STATES] = [
        CellState::Empty,
        CellState::Start,
        CellState::End,
        CellState::Obstacle,
        CellState::Frontier,
        CellState::Visited,
        CellState::Path,
    ];

    /// Character used when printing a grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Obstacle => '#',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Path => '*',
        }
    }
}

/// A single square of the grid. The position is fixed at construction, the state and the
/// adjacency list change over time. Neighbours are stored as indices into the owning
/// [Grid](crate::grid::Grid).
#[derive(Clone, Debug)]
pub struct Cell {
    pos: Point,
    state: CellState,
    neighbours: SmallVec<[usize; N_NEIGHBOURS]>,
    needs_redraw: bool,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Cell {
        Cell {
            pos,
            state: CellState::Empty,
            neighbours: SmallVec::new(),
            needs_redraw: true,
        }
    }
    pub fn pos(&self) -> Point {
        self.pos
    }
    pub fn x(&self) -> i32 {
        self.pos.x
    }
    pub fn y(&self) -> i32 {
        self.pos.y
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    /// Overwrites the state and flags the cell for redrawing.
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
        self.needs_redraw = true;
    }
    pub fn reset(&mut self) {
        self.set_state(CellState::Empty);
    }
    /// Obstacles are the only cells that cannot be entered.
    pub fn is_walkable(&self) -> bool {
        self.state != CellState::Obstacle
    }
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }
    pub fn is_obstacle(&self) -> bool {
        self.state == CellState::Obstacle
    }
    /// Indices of the neighbouring cells as of the last adjacency computation.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }
    pub fn clear_neighbours(&mut self) {
        self.neighbours.clear();
    }
    /// Appends a neighbour. Callers avoid duplicates by clearing first.
    pub fn add_neighbour(&mut self, ix: usize) {
        self.neighbours.push(ix);
    }
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }
    pub(crate) fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }
}
