//! The step-wise search engine shared by all three algorithms.
//!
//! A [Search] owns its [Grid] and performs one expansion per [step](Search::step), handing the
//! grid to a [StepObserver] afterwards so callers can animate the search. Running to completion
//! is the same loop without pauses.
use core::fmt;

use grid_util::point::Point;
use log::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::node::{FrontierState, Node};
use crate::strategy::{Algorithm, Candidate, Priority};

/// Lifecycle of a search run. `Succeeded` and `Exhausted` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    Ready,
    Running,
    Succeeded,
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Succeeded | SearchState::Exhausted)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SearchState::Ready => "ready",
            SearchState::Running => "running",
            SearchState::Succeeded => "succeeded",
            SearchState::Exhausted => "exhausted",
        })
    }
}

/// Receives the grid after every expansion. `terminal` is [true] exactly once, on the
/// notification that ends the run; no notifications follow it.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid, terminal: bool);
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl StepObserver for NoObserver {
    fn on_step(&mut self, _: &Grid, _: bool) {}
}

impl<F> StepObserver for F
where
    F: FnMut(&Grid, bool),
{
    fn on_step(&mut self, grid: &Grid, terminal: bool) {
        self(grid, terminal)
    }
}

/// Summary of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub state: SearchState,
    /// Start to goal inclusive; empty unless the search succeeded.
    pub path: Vec<Point>,
    /// Terrain cost of every cell entered along the path, [None] unless the search succeeded.
    pub cost: Option<u32>,
    /// Number of nodes closed and expanded. Reaching the goal is not an expansion.
    pub expansions: usize,
    /// Largest number of open nodes held at once.
    pub max_frontier: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.state == SearchState::Succeeded
    }
}

/// Single-source, single-goal search over a [Grid] with a selectable [Algorithm].
///
/// The engine is the only mutator of the grid's node state. A run goes
/// `Ready -> Running -> {Succeeded, Exhausted}`; searching again requires
/// [reset](Self::reset), which can also switch the algorithm without reparsing the board.
pub struct Search {
    grid: Grid,
    algorithm: Algorithm,
    frontier: Frontier<Priority>,
    state: SearchState,
    path: Vec<Point>,
    cost: Option<u32>,
    expansions: usize,
}

impl Search {
    pub fn new(grid: Grid, algorithm: Algorithm) -> Search {
        let mut search = Search {
            grid,
            algorithm,
            frontier: Frontier::new(),
            state: SearchState::Ready,
            path: Vec::new(),
            cost: None,
            expansions: 0,
        };
        search.reset(algorithm);
        search
    }

    /// Clears all node state, the frontier and the closed set, then seeds the frontier with
    /// the start node. Valid in every state.
    pub fn reset(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.grid.reset_search_state();
        self.frontier.clear();
        self.path.clear();
        self.cost = None;
        self.expansions = 0;

        let strategy = algorithm.strategy();
        let start_ix = self.grid.start_index();
        let goal = self.grid.goal().map(Node::point);
        let origin = Candidate { cost: 0, hops: 0 };
        let start = self.grid.node_mut(start_ix);
        let priority = strategy.priority(&origin, &start.point(), goal.as_ref());
        start.cost_so_far = Some(origin.cost);
        start.hops = origin.hops;
        start.priority = priority;
        start.state = FrontierState::Open;
        self.frontier.insert_or_update(start_ix, priority);
        self.state = SearchState::Ready;
    }

    /// Switches the algorithm of a search that has not started yet.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        if self.state != SearchState::Ready {
            return Err(Error::NotReady { state: self.state });
        }
        self.reset(algorithm);
        Ok(())
    }

    pub fn state(&self) -> SearchState {
        self.state
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn into_grid(self) -> Grid {
        self.grid
    }
    pub fn expansions(&self) -> usize {
        self.expansions
    }
    /// Path found so far; empty until the search succeeds.
    pub fn path(&self) -> &[Point] {
        &self.path
    }
    /// Storage indices of the open nodes.
    pub fn open_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.frontier.indices()
    }

    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome {
            algorithm: self.algorithm,
            state: self.state,
            path: self.path.clone(),
            cost: self.cost,
            expansions: self.expansions,
            max_frontier: self.frontier.high_water(),
        }
    }

    /// Performs one transition and notifies `observer` unless the search had already
    /// terminated, in which case nothing happens and the terminal state is returned again.
    pub fn step<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> SearchState {
        match self.state {
            SearchState::Succeeded | SearchState::Exhausted => return self.state,
            SearchState::Ready => self.start(),
            SearchState::Running => {}
        }

        let Some((current, priority)) = self.frontier.pop() else {
            self.finish(SearchState::Exhausted);
            observer.on_step(&self.grid, true);
            return self.state;
        };

        self.grid.node_mut(current).state = FrontierState::Closed;
        if Some(current) == self.grid.goal_index() {
            self.reconstruct_path(current);
            self.finish(SearchState::Succeeded);
            observer.on_step(&self.grid, true);
            return self.state;
        }

        self.expansions += 1;
        self.expand(current);
        debug!(
            "Expanded {} at priority {}, {} open",
            self.grid.node(current).point(),
            priority,
            self.frontier.len()
        );
        observer.on_step(&self.grid, false);
        self.state
    }

    /// Steps until the search terminates. A search that already terminated must be
    /// [reset](Self::reset) first.
    pub fn run<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<SearchOutcome> {
        if self.state.is_terminal() {
            return Err(Error::NotReady { state: self.state });
        }
        while !self.step(observer).is_terminal() {}
        Ok(self.outcome())
    }

    /// [run](Self::run) without an observer.
    pub fn solve(&mut self) -> Result<SearchOutcome> {
        self.run(&mut NoObserver)
    }

    fn start(&mut self) {
        let goal = self.grid.goal().map(Node::point);
        match goal {
            Some(goal) if self.grid.goal_reachable() => info!(
                "Starting {} search from {} to {}",
                self.algorithm,
                self.grid.start().point(),
                goal
            ),
            Some(goal) => info!(
                "Starting {} search from {}; {} is not reachable and the search will exhaust",
                self.algorithm,
                self.grid.start().point(),
                goal
            ),
            None => info!(
                "Starting {} search from {} without a goal",
                self.algorithm,
                self.grid.start().point()
            ),
        }
        self.state = SearchState::Running;
    }

    /// Relaxes every neighbour of a freshly closed node.
    fn expand(&mut self, current: usize) {
        let strategy = self.algorithm.strategy();
        let goal = self.grid.goal().map(Node::point);
        let node = self.grid.node(current);
        // Every node leaving the frontier was discovered, so it has a cost.
        let cost = node.cost_so_far().unwrap_or_default();
        let hops = node.hops();

        for n in self.grid.neighbors(current) {
            let neighbour = self.grid.node(n);
            // Walls are closed from the start of every run
            if neighbour.is_closed() {
                continue;
            }
            let candidate = Candidate {
                cost: cost.saturating_add(neighbour.terrain().cost()),
                hops: hops + 1,
            };
            if !strategy.improves(&candidate, neighbour) {
                continue;
            }
            let point = neighbour.point();
            let priority = strategy.priority(&candidate, &point, goal.as_ref());
            trace!(
                "Relaxing {} to cost {} in {} hops, priority {}",
                point,
                candidate.cost,
                candidate.hops,
                priority
            );
            let neighbour = self.grid.node_mut(n);
            neighbour.predecessor = Some(current);
            neighbour.cost_so_far = Some(candidate.cost);
            neighbour.hops = candidate.hops;
            neighbour.priority = priority;
            neighbour.state = FrontierState::Open;
            self.frontier.insert_or_update(n, priority);
        }
    }

    /// Walks the predecessor links back from the goal and records the path start first.
    fn reconstruct_path(&mut self, goal: usize) {
        let grid = &self.grid;
        let mut path = std::iter::successors(Some(goal), |&ix| grid.node(ix).predecessor())
            .map(|ix| grid.node(ix).point())
            .collect::<Vec<Point>>();
        path.reverse();
        self.cost = grid.node(goal).cost_so_far();
        self.path = path;
    }

    fn finish(&mut self, state: SearchState) {
        self.state = state;
        match state {
            SearchState::Succeeded => info!(
                "{} search succeeded after {} expansions: {} cells, cost {}",
                self.algorithm,
                self.expansions,
                self.path.len(),
                self.cost.unwrap_or_default()
            ),
            _ => {
                info!(
                    "{} search exhausted after {} expansions",
                    self.algorithm, self.expansions
                );
                if self.grid.goal_reachable() {
                    warn!("Reachable goal could not be pathed to, is reachable graph correct?");
                }
            }
        }
    }
}
