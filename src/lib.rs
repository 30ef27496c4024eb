//! Shortest routes out of weighted grid labyrinths.
//!
//! A labyrinth is a rectangular matrix of cell codes. One code marks walls; every other code is
//! the cost of stepping onto the cell. The exit is picked among the open cells of the bottom row
//! and reached from a start cell with an A* search guided by the Manhattan distance, moving in the
//! four orthogonal directions only.
//!
//! The pieces can be used on their own: [`Maze`] parses and holds the matrix, [`select_exit`]
//! picks the goal, [`GridGraph`] turns the matrix into searchable nodes, [`PathFinder`] runs the
//! search on top of the [`PriorityQueue`] min-heap. [`solve`] chains them together and the
//! [`App`] type drives the same pipeline from the command line.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod errors;
mod exits;
mod file_loader;
mod graph;
mod heap;
mod map;
mod pathfinding;
mod solver;
mod types;

pub use app::{App, Args};
pub use errors::MazeError;
pub use exits::{exit_candidates, select_exit};
pub use graph::{GridGraph, Node};
pub use heap::PriorityQueue;
pub use map::{Map, Maze};
pub use pathfinding::{manhattan, route_cost, PathFinder};
pub use solver::{route_to_exit, solve, solve_with, Solution};
pub use types::{CellCodes, Point, DEFAULT_WALL, OPEN};
