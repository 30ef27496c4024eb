//! Pathfinding algorithm module.
//!
//! This module contains the A* search over a [`GridGraph`], the Manhattan heuristic it is guided by
//! and a helper to price a route once it has been found.
//!
//! The heuristic assumes a unit cost per step. It never overestimates, and routes are therefore
//! optimal, only when every passable cell costs at least 1 to enter. Mazes with cheaper cells (open
//! cells have code 0 and so cost nothing) still get a valid route, just not necessarily the
//! cheapest one.

use log::{debug, trace};

use crate::{errors::MazeError, graph::GridGraph, heap::PriorityQueue, types::Point};

/// Search state of a single node during one search.
#[derive(Clone, Copy, Debug, Default)]
struct Visit {
    /// Cost of the best known route from the start.
    g: u64,
    /// Estimated remaining cost to the goal, computed on discovery.
    h: u64,
    /// `g + h`, the queue priority.
    f: u64,
    /// Whether the node has been reached at least once.
    discovered: bool,
    /// Whether the node has been expanded and will not be revisited.
    finalized: bool,
    /// Index of the predecessor on the best known route.
    parent: Option<usize>,
}

/// A* search over a grid.
///
/// The finder only borrows the grid. All per-search state is created by [`PathFinder::search`] and
/// dropped when it returns, so the same finder can be reused for any number of start and goal
/// pairs.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'graph> {
    /// Grid being searched.
    graph: &'graph GridGraph,
}

impl<'graph> PathFinder<'graph> {
    /// Creates a finder over the given grid.
    #[must_use]
    pub const fn new(graph: &'graph GridGraph) -> Self {
        Self { graph }
    }

    /// Finds a route from `start` to `goal`.
    ///
    /// The route is returned as `(row, column)` pairs from start to goal, both included. It is
    /// empty when the goal cannot be reached. Neither endpoint is checked for being a wall: a wall
    /// goal is simply never reached, unless it is also the start.
    ///
    /// # Errors
    ///
    /// - [`MazeError::StartOutOfBounds`] if `start` lies outside the grid.
    /// - [`MazeError::GoalOutOfBounds`] if `goal` lies outside the grid.
    pub fn search(&self, start: Point, goal: Point) -> Result<Vec<(usize, usize)>, MazeError> {
        let (width, height) = (self.graph.width(), self.graph.height());
        let start_index = self
            .graph
            .index_of(start)
            .ok_or(MazeError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width,
                height,
            })?;
        let goal_index = self
            .graph
            .index_of(goal)
            .ok_or(MazeError::GoalOutOfBounds {
                x: goal.x,
                y: goal.y,
                width,
                height,
            })?;

        Ok(self.run(start_index, goal_index, goal))
    }

    /// Runs the search between two valid node indices.
    fn run(&self, start: usize, goal: usize, goal_point: Point) -> Vec<(usize, usize)> {
        let mut visits = vec![Visit::default(); self.graph.len()];
        let mut open = PriorityQueue::new();
        let mut expanded = 0_usize;

        open.push(start, |index: usize| f_score(&visits, index));

        while let Some(current) = open.pop_min(|index: usize| f_score(&visits, index)) {
            if current == goal {
                let route = self.reconstruct(&visits, goal);
                debug!(
                    "reached goal after expanding {expanded} nodes, route has {} cells",
                    route.len()
                );
                return route;
            }

            let Some(visit) = visits.get_mut(current) else {
                continue;
            };
            visit.finalized = true;
            let current_g = visit.g;
            expanded += 1;
            trace!("expanding node {current} with g = {current_g}");

            for neighbor in self.graph.neighbors(current) {
                if self.graph.is_wall(neighbor) {
                    continue;
                }
                let (Some(node), Some(visit)) =
                    (self.graph.node(neighbor), visits.get_mut(neighbor))
                else {
                    continue;
                };
                if visit.finalized {
                    continue;
                }

                let tentative = current_g.saturating_add(u64::from(node.cost));
                let newly_discovered = !visit.discovered;
                if newly_discovered || tentative < visit.g {
                    if newly_discovered {
                        visit.h = manhattan(node.point(), goal_point);
                        visit.discovered = true;
                    }
                    visit.parent = Some(current);
                    visit.g = tentative;
                    visit.f = tentative.saturating_add(visit.h);

                    if newly_discovered {
                        open.push(neighbor, |index: usize| f_score(&visits, index));
                    } else {
                        let queued =
                            open.rescored(neighbor, |index: usize| f_score(&visits, index));
                        debug_assert!(
                            queued,
                            "discovered node {neighbor} missing from the open queue"
                        );
                    }
                }
            }
        }

        debug!("goal unreachable after expanding {expanded} nodes");
        Vec::new()
    }

    /// Follows predecessor links back from the goal and returns the route in start to goal order.
    fn reconstruct(&self, visits: &[Visit], goal: usize) -> Vec<(usize, usize)> {
        let mut route = Vec::new();
        let mut cursor = Some(goal);
        while let Some(index) = cursor {
            if let Some(node) = self.graph.node(index) {
                route.push(node.point().row_col());
            }
            cursor = visits.get(index).and_then(|visit| visit.parent);
        }
        route.reverse();

        route
    }
}

/// Queue priority of a node; unknown indices sort last.
fn f_score(visits: &[Visit], index: usize) -> u64 {
    visits.get(index).map_or(u64::MAX, |visit| visit.f)
}

/// Manhattan distance between two points.
#[must_use]
pub fn manhattan(from: Point, to: Point) -> u64 {
    let distance = from.x.abs_diff(to.x).saturating_add(from.y.abs_diff(to.y));
    u64::try_from(distance).unwrap_or(u64::MAX)
}

/// Total cost of walking a route of `(row, column)` pairs.
///
/// Every cell after the first is entered once and adds its cost; the start cell is free. Cells
/// outside the grid are ignored.
#[must_use]
pub fn route_cost(graph: &GridGraph, route: &[(usize, usize)]) -> u64 {
    route
        .iter()
        .skip(1)
        .filter_map(|&(row, column)| graph.index_of(Point::new(column, row)))
        .filter_map(|index| graph.node(index))
        .map(|node| u64::from(node.cost))
        .fold(0, u64::saturating_add)
}
