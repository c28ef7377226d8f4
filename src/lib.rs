//! # terrain_pathfinding
//!
//! Single-source, single-goal search on a 4-connected grid of weighted terrain. Three
//! strategies share one engine: [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! guided by the Manhattan distance, plain
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! uniform-cost search ([Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)).
//!
//! Boards are text: `A` is the start, `B` the goal, `#` a wall and `.` open ground, while
//! water (`w`), mountains (`m`), forest (`f`), grass (`g`) and roads (`r`) add a cost to
//! every path entering them. The engine runs one expansion per [Search::step] so that a caller
//! can render the search as it progresses, or runs to completion with [Search::run].
//!
//! ```
//! use terrain_pathfinding::{Algorithm, Grid, Search};
//!
//! let grid = Grid::parse(&["A.w.", "....", "..#B"]).unwrap();
//! let mut search = Search::new(grid, Algorithm::AStar);
//! let outcome = search.solve().unwrap();
//! assert_eq!(outcome.cost, Some(0));
//! assert_eq!(outcome.path.len(), 6);
//! ```
pub mod board;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod node;
pub mod search;
pub mod strategy;
pub mod terrain;

pub use board::{BoardSource, FileBoardSource};
pub use error::{Error, MalformedBoard, Result};
pub use grid::Grid;
pub use node::{FrontierState, Node};
pub use search::{NoObserver, Search, SearchOutcome, SearchState, StepObserver};
pub use strategy::{Algorithm, FrontierStrategy, Priority};
pub use terrain::{terrain_cost, Terrain};
