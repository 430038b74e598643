use core::fmt;

/// Errors raised by [Grid](crate::grid::Grid) construction and coordinate lookups.
///
/// Not finding a path is not an error, see [SearchOutcome](crate::search::SearchOutcome).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one column and one row.
    InvalidDimensions { cols: i32, rows: i32 },
    /// The coordinates lie outside `[0, cols) x [0, rows)`.
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { cols, rows } => {
                write!(f, "invalid grid dimensions {cols}x{rows}, both must be positive")
            }
            GridError::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = GridError::InvalidDimensions { cols: 0, rows: 3 };
        assert_eq!(
            err.to_string(),
            "invalid grid dimensions 0x3, both must be positive"
        );
        let err = GridError::OutOfBounds { x: -1, y: 7 };
        assert_eq!(err.to_string(), "cell (-1, 7) is outside the grid");
    }
}
