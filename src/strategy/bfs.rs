use grid_util::point::Point;

use crate::node::Node;
use crate::strategy::{Algorithm, Candidate, FrontierStrategy, Priority};

/// Breadth-first search. Every node gets the same key, so the frontier degenerates to a queue
/// in discovery order. Moves count as one step each whatever the terrain: a node is only
/// improved by a route with fewer hops, which a queue never produces once the node is known.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstStrategy;

impl FrontierStrategy for BreadthFirstStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn heuristic(&self, _: &Point, _: Option<&Point>) -> u32 {
        0
    }

    fn priority(&self, _: &Candidate, _: &Point, _: Option<&Point>) -> Priority {
        Priority::ZERO
    }

    fn improves(&self, candidate: &Candidate, node: &Node) -> bool {
        node.cost_so_far().is_none() || candidate.hops < node.hops()
    }
}
