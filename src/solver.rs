//! Maze to route pipeline: bounds check, exit selection, graph build and search.

use log::info;

use crate::{
    errors::MazeError,
    exits::select_exit,
    graph::GridGraph,
    map::Maze,
    pathfinding::{route_cost, PathFinder},
    types::{CellCodes, Point},
};

/// Outcome of routing a maze to its exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Exit the route leads to.
    pub exit: Point,
    /// `(row, column)` pairs from start to exit, or empty when the exit cannot be reached.
    pub route: Vec<(usize, usize)>,
    /// Sum of the costs of every cell entered along the route.
    pub cost: u64,
}

impl Solution {
    /// Whether the exit was reached.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.route.is_empty()
    }
}

/// Routes from `start` to the maze's exit using the default cell codes.
///
/// # Errors
///
/// See [`solve_with`].
pub fn solve(maze: &Maze, start: Point) -> Result<Vec<(usize, usize)>, MazeError> {
    solve_with(maze, start, CellCodes::default())
}

/// Routes from `start` to the maze's exit and returns the `(row, column)` pairs of the route.
///
/// # Errors
///
/// - [`MazeError::StartOutOfBounds`] if `start` lies outside the maze.
/// - [`MazeError::NoExit`] if the bottom row has no open cell.
pub fn solve_with(
    maze: &Maze,
    start: Point,
    codes: CellCodes,
) -> Result<Vec<(usize, usize)>, MazeError> {
    route_to_exit(maze, start, codes).map(|solution| solution.route)
}

/// Routes from `start` to the maze's exit and reports the exit and route cost alongside the route.
///
/// # Errors
///
/// - [`MazeError::StartOutOfBounds`] if `start` lies outside the maze.
/// - [`MazeError::NoExit`] if the bottom row has no open cell.
pub fn route_to_exit(maze: &Maze, start: Point, codes: CellCodes) -> Result<Solution, MazeError> {
    if !maze.contains(start) {
        return Err(MazeError::StartOutOfBounds {
            x: start.x,
            y: start.y,
            width: maze.width(),
            height: maze.height(),
        });
    }

    let exit = select_exit(maze, codes)?;
    let graph = GridGraph::new(maze, codes);
    let route = PathFinder::new(&graph).search(start, exit)?;
    let cost = route_cost(&graph, &route);
    info!(
        "routed ({}, {}) to exit ({}, {}): {} cells, cost {cost}",
        start.x,
        start.y,
        exit.x,
        exit.y,
        route.len()
    );

    Ok(Solution { exit, route, cost })
}
