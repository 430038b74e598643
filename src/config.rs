use crate::error::GridError;
use crate::grid::Grid;

pub const DEFAULT_COLS: i32 = 50;
pub const DEFAULT_ROWS: i32 = 50;
/// Side of the square grid area in pixels.
pub const DEFAULT_SIZE_PX: u32 = 700;
/// Height of the message strip below the grid in pixels.
pub const DEFAULT_INFO_HEIGHT_PX: u32 = 40;

/// Size of the grid and of the window it is drawn in. Owned by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub cols: i32,
    pub rows: i32,
    pub size_px: u32,
    pub info_height_px: u32,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            size_px: DEFAULT_SIZE_PX,
            info_height_px: DEFAULT_INFO_HEIGHT_PX,
        }
    }
}

impl GridConfig {
    pub fn new(cols: i32, rows: i32) -> GridConfig {
        GridConfig {
            cols,
            rows,
            ..GridConfig::default()
        }
    }
    /// Width of a cell in whole pixels. Leftover pixels on the right stay unused.
    pub fn cell_width(&self) -> u32 {
        if self.cols > 0 {
            self.size_px / self.cols as u32
        } else {
            0
        }
    }
    /// Height of a cell in whole pixels.
    pub fn cell_height(&self) -> u32 {
        if self.rows > 0 {
            self.size_px / self.rows as u32
        } else {
            0
        }
    }
    /// Window size as `(width, height)`, the grid plus the message strip.
    pub fn window_size(&self) -> (u32, u32) {
        (self.size_px, self.size_px + self.info_height_px)
    }
    /// Builds an empty grid of the configured size with the cell geometry set up for hit testing.
    /// When `size_px` is smaller than `cols` or `rows` a cell would be zero pixels wide; that
    /// size is ignored and the grid keeps its 1x1 default, see [Grid::set_cell_size].
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.cols, self.rows)?;
        grid.set_cell_size(self.cell_width() as f32, self.cell_height() as f32);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let config = GridConfig::default();
        assert_eq!(config.cell_width(), 14);
        assert_eq!(config.cell_height(), 14);
        assert_eq!(config.window_size(), (700, 740));
        let grid = config.build_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (50, 50));
        assert_eq!(grid.cell_size(), (14.0, 14.0));
    }

    #[test]
    fn cell_size_uses_integer_division() {
        let config = GridConfig::new(30, 7);
        assert_eq!(config.cell_width(), 23);
        assert_eq!(config.cell_height(), 100);
    }

    #[test]
    fn zero_pixel_cells_keep_default_size() {
        let config = GridConfig::new(800, 10);
        assert_eq!(config.cell_width(), 0);
        let grid = config.build_grid().unwrap();
        assert_eq!(grid.cell_size(), (1.0, 1.0));
    }

    #[test]
    fn invalid_sizes_fail_to_build() {
        let config = GridConfig::new(0, 10);
        assert_eq!(config.cell_width(), 0);
        assert_eq!(
            config.build_grid().unwrap_err(),
            GridError::InvalidDimensions { cols: 0, rows: 10 }
        );
    }
}
