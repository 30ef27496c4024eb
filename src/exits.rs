//! Exit detection along the bottom row of a maze.

use log::debug;

use crate::{
    errors::MazeError,
    map::Maze,
    types::{CellCodes, Point},
};

/// Bottom-row cells holding the open code, left to right.
///
/// This function only looks at the last row of the maze. Open cells elsewhere on the border are
/// never exits.
#[must_use]
pub fn exit_candidates(maze: &Maze, codes: CellCodes) -> Vec<Point> {
    let row = maze.height() - 1;

    maze.bottom_row()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == codes.open)
        .map(|(column, _)| Point::new(column, row))
        .collect()
}

/// Picks the exit the solver routes to.
///
/// Candidates are walked in discovery order while keeping a running minimum of their cell codes,
/// seeded from the first candidate. A candidate whose code is lower than or equal to the running
/// minimum becomes the selection. Every candidate holds the open code, so the comparison always
/// succeeds and the rightmost open cell of the bottom row is the one selected, wherever the start
/// is.
///
/// # Errors
///
/// - [`MazeError::NoExit`] if the bottom row has no open cell.
pub fn select_exit(maze: &Maze, codes: CellCodes) -> Result<Point, MazeError> {
    let candidates = exit_candidates(maze, codes);
    let first = *candidates.first().ok_or(MazeError::NoExit)?;

    let mut lowest = maze.get(first).ok_or(MazeError::NoExit)?;
    let mut selected = first;
    for &candidate in &candidates {
        let Some(code) = maze.get(candidate) else {
            continue;
        };
        if code <= lowest {
            lowest = code;
            selected = candidate;
        }
    }

    debug!(
        "selected exit at column {} of {} candidates",
        selected.x,
        candidates.len()
    );

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(text: &str) -> Maze {
        text.parse().expect("valid maze")
    }

    #[test]
    fn test_candidates_are_open_bottom_cells() {
        let maze = maze("0 0 0 0\n0 5 0 0");

        assert_eq!(
            exit_candidates(&maze, CellCodes::default()),
            vec![Point::new(0, 1), Point::new(2, 1), Point::new(3, 1)]
        );
    }

    #[test]
    fn test_selects_rightmost_open_cell() {
        let maze = maze("0 0 0 0\n0 5 0 0");

        assert_eq!(
            select_exit(&maze, CellCodes::default()),
            Ok(Point::new(3, 1))
        );
    }

    #[test]
    fn test_selection_ignores_rows_above_bottom() {
        let maze = maze("0 0 0\n9 9 9\n0 9 9");

        assert_eq!(
            select_exit(&maze, CellCodes::default()),
            Ok(Point::new(0, 2))
        );
    }

    #[test]
    fn test_custom_open_code() {
        let maze = maze("1 1 1\n1 2 1");
        let codes = CellCodes { open: 1, wall: 2 };

        assert_eq!(select_exit(&maze, codes), Ok(Point::new(2, 1)));
    }

    #[test]
    fn test_no_exit() {
        let maze = maze("0 0\n9 9");

        assert!(exit_candidates(&maze, CellCodes::default()).is_empty());
        assert_eq!(
            select_exit(&maze, CellCodes::default()),
            Err(MazeError::NoExit)
        );
    }

    #[test]
    fn test_single_cell_maze_is_its_own_exit() {
        let maze = maze("0");

        assert_eq!(
            select_exit(&maze, CellCodes::default()),
            Ok(Point::new(0, 0))
        );
    }
}
