//! Node grid built from a maze.
//!
//! The grid is immutable once built. Per-search state lives with the search, so one graph can be
//! searched any number of times without resetting anything here.

use crate::{
    map::Maze,
    types::{CellCodes, Point},
};

/// One cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
    /// Cell code, which doubles as the cost of entering the cell.
    pub cost: u32,
}

impl Node {
    /// Coordinates of the node.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Grid of nodes addressed by index.
///
/// This structure holds one [`Node`] per maze cell in row-major order, so the node at column `x`
/// and row `y` has index `y * width + x`. Searches refer to nodes by that index and keep their own
/// state alongside, which leaves the grid itself read-only after construction.
#[derive(Clone, Debug)]
pub struct GridGraph {
    /// Nodes, row after row.
    nodes: Vec<Node>,
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Code of impassable nodes.
    ///
    /// This field is compared against the cost of a node to tell walls apart from passable cells.
    wall: u32,
}

impl GridGraph {
    /// Builds one node per maze cell.
    ///
    /// This function copies the cell codes of the maze into nodes that remember their coordinates
    /// and records the wall code from `codes`. The open code plays no role in the grid.
    #[must_use]
    pub fn new(maze: &Maze, codes: CellCodes) -> Self {
        let nodes = maze
            .rows()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(x, &cost)| Node { x, y, cost })
            })
            .collect();

        Self {
            nodes,
            width: maze.width(),
            height: maze.height(),
            wall: codes.wall,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no nodes. Never true for a grid built from a [`Maze`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at the given index.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Index of the node at the given point, or `None` outside the grid.
    #[must_use]
    pub const fn index_of(&self, point: Point) -> Option<usize> {
        if point.x < self.width && point.y < self.height {
            Some(point.y * self.width + point.x)
        } else {
            None
        }
    }

    /// Whether the node is impassable. Unknown indices are treated as walls.
    #[must_use]
    pub fn is_wall(&self, index: usize) -> bool {
        self.node(index).map_or(true, |node| node.cost == self.wall)
    }

    /// Orthogonal neighbours of a node.
    ///
    /// This method yields the indices of the cells directly above, below, to the left of and to the
    /// right of the node, in that order, skipping those that fall outside the grid. Walls are
    /// included; filtering them out is left to the caller. An unknown index has no neighbours.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let candidates = self.node(index).map_or([None; 4], |node| {
            [
                node.y.checked_sub(1).map(|y| Point::new(node.x, y)),
                (node.y + 1 < self.height).then(|| Point::new(node.x, node.y + 1)),
                node.x.checked_sub(1).map(|x| Point::new(x, node.y)),
                (node.x + 1 < self.width).then(|| Point::new(node.x + 1, node.y)),
            ]
        });

        candidates
            .into_iter()
            .flatten()
            .filter_map(move |point| self.index_of(point))
    }
}
