use grid_util::point::Point;

use crate::strategy::Priority;
use crate::terrain::Terrain;

/// Membership of a [Node] with respect to the frontier and the closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FrontierState {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// A single board cell together with the bookkeeping of the current search run.
///
/// The predecessor is an index into the owning [Grid](crate::Grid)'s row-major storage. It
/// always refers to a node expanded earlier in the same run, so the links form a tree
/// rooted at the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    row: usize,
    col: usize,
    terrain: Terrain,
    pub(crate) cost_so_far: Option<u32>,
    pub(crate) hops: u32,
    pub(crate) priority: Priority,
    pub(crate) predecessor: Option<usize>,
    pub(crate) state: FrontierState,
}

impl Node {
    pub(crate) fn new(row: usize, col: usize, terrain: Terrain) -> Node {
        let mut node = Node {
            row,
            col,
            terrain,
            cost_so_far: None,
            hops: 0,
            priority: Priority::ZERO,
            predecessor: None,
            state: FrontierState::Unvisited,
        };
        node.reset();
        node
    }

    /// Clears all search state. Walls start every run closed so they never enter the frontier.
    pub(crate) fn reset(&mut self) {
        self.cost_so_far = None;
        self.hops = 0;
        self.priority = Priority::ZERO;
        self.predecessor = None;
        self.state = if self.terrain.is_passable() {
            FrontierState::Unvisited
        } else {
            FrontierState::Closed
        };
    }

    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    /// Position as a [Point] with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }
    pub fn is_wall(&self) -> bool {
        !self.terrain.is_passable()
    }
    /// Accumulated terrain cost from the start, [None] while undiscovered (infinite).
    pub fn cost_so_far(&self) -> Option<u32> {
        self.cost_so_far
    }
    /// Number of moves on the best known route from the start.
    pub fn hops(&self) -> u32 {
        self.hops
    }
    pub fn priority(&self) -> Priority {
        self.priority
    }
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }
    pub fn state(&self) -> FrontierState {
        self.state
    }
    pub fn is_open(&self) -> bool {
        self.state == FrontierState::Open
    }
    pub fn is_closed(&self) -> bool {
        self.state == FrontierState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_start_closed() {
        let wall = Node::new(0, 0, Terrain::Wall);
        assert!(wall.is_closed());
        let mut road = Node::new(2, 1, Terrain::Road);
        assert_eq!(road.state(), FrontierState::Unvisited);
        assert_eq!(road.point(), Point::new(1, 2));

        road.state = FrontierState::Closed;
        road.cost_so_far = Some(4);
        road.predecessor = Some(3);
        road.reset();
        assert_eq!(road.state(), FrontierState::Unvisited);
        assert_eq!(road.cost_so_far(), None);
        assert_eq!(road.predecessor(), None);
    }
}
