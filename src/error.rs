use thiserror::Error;

use crate::search::SearchState;

/// Convenient result alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a board definition is rejected at parse time. No partial [Grid](crate::Grid)
/// is produced when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedBoard {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board has no start cell")]
    MissingStart,

    /// Positions are given as (row, column).
    #[error("board has a second start cell at {second:?}, first one at {first:?}")]
    DuplicateStart {
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error("board has a second goal cell at {second:?}, first one at {first:?}")]
    DuplicateGoal {
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] MalformedBoard),

    /// Only the search engine indexes the grid, so this signals a bug rather than bad input.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        height: usize,
        width: usize,
    },

    /// A step or run was requested out of sequence. Recoverable by resetting the search.
    #[error("search is {state}; reset it before searching again")]
    NotReady { state: SearchState },

    #[error("unknown algorithm {0:?}; expected astar, bfs or dijkstra")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
