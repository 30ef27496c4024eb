//! Error conditions reported by the maze model and the solver.
//!
//! An unreachable exit is not an error: the solver reports it with an empty path. Everything here
//! is a broken precondition the caller has to fix before a route can be computed at all.

/// Errors raised while building a maze or solving it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// The maze has no cells.
    #[error("maze has no cells")]
    EmptyMaze,

    /// A row does not have the same length as the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A token in a map file is not a non-negative integer.
    #[error("invalid cell {token:?} at row {row}, column {column}")]
    InvalidCell {
        /// Zero-based row of the token.
        row: usize,
        /// Zero-based column of the token.
        column: usize,
        /// The token as found in the input.
        token: String,
    },

    /// No open cell exists on the bottom row, so there is no goal to route to.
    #[error("no exit on the bottom row")]
    NoExit,

    /// The start coordinates fall outside the maze.
    #[error("start ({x}, {y}) is outside the {width}x{height} maze")]
    StartOutOfBounds {
        /// Requested start column.
        x: usize,
        /// Requested start row.
        y: usize,
        /// Maze width in columns.
        width: usize,
        /// Maze height in rows.
        height: usize,
    },

    /// The goal coordinates fall outside the maze.
    #[error("goal ({x}, {y}) is outside the {width}x{height} maze")]
    GoalOutOfBounds {
        /// Requested goal column.
        x: usize,
        /// Requested goal row.
        y: usize,
        /// Maze width in columns.
        width: usize,
        /// Maze height in rows.
        height: usize,
    },
}
