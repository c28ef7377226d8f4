use grid_util::point::Point;

use crate::node::Node;
use crate::strategy::{Algorithm, Candidate, FrontierStrategy};

/// Best-first search guided by the
/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal.
///
/// Nodes are ordered by [Priority](crate::strategy::Priority): terrain cost so far, then steps
/// so far plus the distance left. Every move costs (terrain >= 0, 1 step) and the distance never
/// exceeds the steps still needed, so the estimate is consistent and the first path to reach
/// the goal has the lowest terrain cost (and the fewest steps among those).
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarStrategy;

impl FrontierStrategy for AstarStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn heuristic(&self, point: &Point, goal: Option<&Point>) -> u32 {
        goal.map_or(0, |goal| point.manhattan_distance(goal).unsigned_abs())
    }

    /// A route improves a node if it is cheaper, or equally cheap in fewer steps.
    fn improves(&self, candidate: &Candidate, node: &Node) -> bool {
        node.cost_so_far()
            .map_or(true, |cost| (candidate.cost, candidate.hops) < (cost, node.hops()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Priority;
    use crate::Grid;

    #[test]
    fn manhattan_heuristic() {
        let goal = Point::new(4, 1);
        assert_eq!(AstarStrategy.heuristic(&Point::new(0, 0), Some(&goal)), 5);
        assert_eq!(AstarStrategy.heuristic(&goal, Some(&goal)), 0);
        assert_eq!(AstarStrategy.heuristic(&Point::new(7, 3), None), 0);
        let candidate = Candidate { cost: 10, hops: 2 };
        assert_eq!(
            AstarStrategy.priority(&candidate, &Point::new(0, 0), Some(&goal)),
            Priority::new(10, 7)
        );
    }

    #[test]
    fn improves_on_cost_then_steps() {
        let grid = Grid::parse(&["A.B"]).unwrap();
        let mut node = grid.node(1).clone();
        let candidate = Candidate { cost: 5, hops: 3 };
        assert!(AstarStrategy.improves(&candidate, &node));
        node.cost_so_far = Some(5);
        node.hops = 3;
        assert!(!AstarStrategy.improves(&candidate, &node));
        node.hops = 4;
        assert!(AstarStrategy.improves(&candidate, &node));
        node.cost_so_far = Some(4);
        node.hops = 1;
        assert!(!AstarStrategy.improves(&candidate, &node));
        node.cost_so_far = Some(6);
        assert!(AstarStrategy.improves(&candidate, &node));
    }
}
