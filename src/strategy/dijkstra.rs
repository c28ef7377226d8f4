use grid_util::point::Point;

use crate::strategy::{Algorithm, Candidate, FrontierStrategy, Priority};

/// Uniform-cost search: always expands the cheapest discovered node, earliest discovery first
/// among equally cheap ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraStrategy;

impl FrontierStrategy for DijkstraStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn heuristic(&self, _: &Point, _: Option<&Point>) -> u32 {
        0
    }

    fn priority(&self, candidate: &Candidate, _: &Point, _: Option<&Point>) -> Priority {
        Priority::new(candidate.cost, 0)
    }
}
