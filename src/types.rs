//! Coordinate and cell-code types shared by the maze model and the solver.

/// Cell code marking an open cell and, on the bottom row, an exit.
pub const OPEN: u32 = 0;

/// Cell code marking a wall unless the caller configures another one.
pub const DEFAULT_WALL: u32 = 9;

/// Grid coordinates of a single labyrinth cell.
///
/// The `x` axis runs along columns and the `y` axis along rows, so `Point::new(2, 0)` is the third
/// cell of the top row. Paths are reported the other way around, as `(row, column)` pairs, which
/// is what [`Point::row_col`] produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Point {
    /// Builds a point from a column and a row index.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the point as a `(row, column)` pair.
    #[must_use]
    pub const fn row_col(self) -> (usize, usize) {
        (self.y, self.x)
    }
}

/// Cell code configuration.
///
/// Every value in a maze is a cell code. The `wall` code marks impassable cells, every other code
/// is the cost of entering the cell. The `open` code is the one searched for along the bottom row
/// to find exits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellCodes {
    /// Code of cells that count as exits when found on the bottom row.
    pub open: u32,
    /// Code of impassable cells.
    pub wall: u32,
}

impl Default for CellCodes {
    fn default() -> Self {
        Self {
            open: OPEN,
            wall: DEFAULT_WALL,
        }
    }
}
