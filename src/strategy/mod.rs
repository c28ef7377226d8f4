use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;

use crate::error::Error;
use crate::node::Node;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

use astar::AstarStrategy;
use bfs::BreadthFirstStrategy;
use dijkstra::DijkstraStrategy;

/// A route to a node found while expanding one of its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Accumulated terrain cost from the start.
    pub cost: u32,
    /// Number of moves from the start.
    pub hops: u32,
}

/// Frontier key, compared lexicographically: terrain cost first, then the number of steps
/// taken plus the estimated steps remaining.
///
/// Plain ground costs nothing to enter, so a distance estimate added straight onto the terrain
/// cost would overestimate. Counting steps in a second component keeps the estimate a lower
/// bound of the remaining (cost, steps) pair while still steering the search toward the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    pub cost: u32,
    pub steps: u32,
}

impl Priority {
    pub const ZERO: Priority = Priority { cost: 0, steps: 0 };

    pub fn new(cost: u32, steps: u32) -> Priority {
        Priority { cost, steps }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.cost, self.steps)
    }
}

/// Ordering policy of the frontier. The engine, the node bookkeeping and the frontier are
/// shared by all algorithms; a strategy only decides which discovered node is expanded next
/// and when a rediscovered node counts as improved.
pub trait FrontierStrategy: fmt::Debug + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Lower bound on the number of steps from `point` to `goal`. Zero when there is no goal.
    fn heuristic(&self, point: &Point, goal: Option<&Point>) -> u32;

    /// Frontier key of a node reached by `candidate`. Lower keys are expanded first.
    fn priority(&self, candidate: &Candidate, point: &Point, goal: Option<&Point>) -> Priority {
        Priority::new(
            candidate.cost,
            candidate.hops.saturating_add(self.heuristic(point, goal)),
        )
    }

    /// Whether `candidate` should replace the route currently recorded in `node`.
    /// Undiscovered nodes always accept a candidate.
    fn improves(&self, candidate: &Candidate, node: &Node) -> bool {
        node.cost_so_far()
            .map_or(true, |cost| candidate.cost < cost)
    }
}

/// Selects one of the three search strategies for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    AStar,
    BreadthFirst,
    Dijkstra,
}

static ASTAR: AstarStrategy = AstarStrategy;
static BREADTH_FIRST: BreadthFirstStrategy = BreadthFirstStrategy;
static DIJKSTRA: DijkstraStrategy = DijkstraStrategy;

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::BreadthFirst, Algorithm::Dijkstra];

    pub fn strategy(&self) -> &'static dyn FrontierStrategy {
        match self {
            Algorithm::AStar => &ASTAR,
            Algorithm::BreadthFirst => &BREADTH_FIRST,
            Algorithm::Dijkstra => &DIJKSTRA,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "best-first" => Ok(Algorithm::AStar),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dijkstra" | "uniform-cost" => Ok(Algorithm::Dijkstra),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}
