use crate::cell::{Cell, CellState, N_NEIGHBOURS};
use crate::error::GridError;
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::debug;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood in the order neighbours are recorded: up, right, down, left.
/// The y axis points down, as on screen. The order decides which of several equally short
/// paths a search reconstructs.
pub const DIRECTIONS: [(i32, i32); N_NEIGHBOURS] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// A fixed-size grid owning its [Cell]s in row-major order. Besides the cells it records the
/// rendered size of one cell so that pointer positions can be mapped back to cells.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    cell_width: f32,
    cell_height: f32,
}

impl Grid {
    /// Builds a `cols` x `rows` grid of empty cells with a rendered cell size of 1x1.
    pub fn new(cols: i32, rows: i32) -> Result<Grid, GridError> {
        if cols <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        let cells = iproduct!(0..rows, 0..cols)
            .map(|(y, x)| Cell::new(Point::new(x, y)))
            .collect();
        Ok(Grid {
            cols: cols as usize,
            rows: rows as usize,
            cells,
            cell_width: 1.0,
            cell_height: 1.0,
        })
    }
    pub fn width(&self) -> usize {
        self.cols
    }
    pub fn height(&self) -> usize {
        self.rows
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }
    fn get_ix(&self, x: i32, y: i32) -> usize {
        y as usize * self.cols + x as usize
    }
    /// Arena index of the cell at `(x, y)`.
    pub fn ix(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if self.in_bounds(x, y) {
            Ok(self.get_ix(x, y))
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }
    pub fn ix_point(&self, point: &Point) -> Result<usize, GridError> {
        self.ix(point.x, point.y)
    }
    /// The cell with the given arena index. Panics if `ix >= self.len()`.
    pub fn cell(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }
    pub(crate) fn cell_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }
    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell, GridError> {
        let ix = self.ix(x, y)?;
        Ok(&self.cells[ix])
    }
    pub fn cell_at_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell, GridError> {
        let ix = self.ix(x, y)?;
        Ok(&mut self.cells[ix])
    }
    pub fn set_state(&mut self, x: i32, y: i32, state: CellState) -> Result<(), GridError> {
        self.cell_at_mut(x, y)?.set_state(state);
        Ok(())
    }
    /// True if `(x, y)` lies in the grid and is not an obstacle.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.get_ix(x, y)].is_walkable()
    }
    /// All cells in row-major order (y outer, x inner).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }
    pub fn for_each_cell<F>(&self, visit: F)
    where
        F: FnMut(&Cell),
    {
        self.cells.iter().for_each(visit)
    }

    /// Rebuilds every adjacency list from the current obstacle layout. Each cell gets its
    /// in-bounds, walkable neighbours in [DIRECTIONS] order. Later edits are not reflected
    /// until this is called again.
    pub fn recompute_adjacency(&mut self) {
        let mut edges = 0;
        for ix in 0..self.cells.len() {
            let pos = self.cells[ix].pos();
            let neighbours = DIRECTIONS
                .iter()
                .map(|&(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
                .filter(|p| self.is_walkable(p.x, p.y))
                .map(|p| self.get_ix(p.x, p.y))
                .collect::<SmallVec<[usize; N_NEIGHBOURS]>>();
            edges += neighbours.len();
            let cell = &mut self.cells[ix];
            cell.clear_neighbours();
            for n in neighbours {
                cell.add_neighbour(n);
            }
        }
        debug!(
            "Recomputed adjacency of {} cells ({} directed edges)",
            self.cells.len(),
            edges
        );
    }

    /// Sets every cell back to [CellState::Empty] and drops all adjacency.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
            cell.clear_neighbours();
        }
    }

    /// Positions of the cells whose state changed since the last call, in row-major order.
    pub fn take_redraws(&mut self) -> Vec<Point> {
        self.cells
            .iter_mut()
            .filter_map(|cell| cell.take_redraw().then(|| cell.pos()))
            .collect()
    }

    /// Sets the rendered size of a single cell. Non-positive sizes are ignored and the previous
    /// size is kept.
    pub fn set_cell_size(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.cell_width = width;
            self.cell_height = height;
        } else {
            debug!(
                "Ignoring cell size {}x{}, keeping {}x{}",
                width, height, self.cell_width, self.cell_height
            );
        }
    }
    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_width, self.cell_height)
    }
    /// Rendered rectangle of a cell as `(left, top, width, height)`.
    pub fn cell_rect(&self, x: i32, y: i32) -> Result<(f32, f32, f32, f32), GridError> {
        self.ix(x, y)?;
        Ok((
            x as f32 * self.cell_width,
            y as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        ))
    }
    /// Finds the cell whose rendered rectangle contains `(px, py)`. Rectangles include their
    /// edges, a point on a shared edge belongs to the cell that comes first in row-major order.
    pub fn locate_cell(&self, px: f32, py: f32) -> Option<&Cell> {
        let x = axis_index(px, self.cell_width, self.cols)?;
        let y = axis_index(py, self.cell_height, self.rows)?;
        Some(&self.cells[self.get_ix(x, y)])
    }
}

fn axis_index(p: f32, extent: f32, count: usize) -> Option<i32> {
    // Also rejects NaN.
    if !(p >= 0.0 && p <= count as f32 * extent) {
        return None;
    }
    let count = count as i32;
    let mut ix = ((p / extent).ceil() as i32 - 1).clamp(0, count - 1);
    // The division rounds differently from the edges `cell_rect` reports, settle against those.
    while ix > 0 && p <= ix as f32 * extent {
        ix -= 1;
    }
    while ix + 1 < count && p > (ix + 1) as f32 * extent {
        ix += 1;
    }
    Some(ix)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|cell| cell.state().glyph())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
