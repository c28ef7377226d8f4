use core::fmt;

use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::board::BoardSource;
use crate::error::{Error, MalformedBoard, Result};
use crate::node::{FrontierState, Node};
use crate::terrain::Terrain;

/// Up, down, left, right as (row, column) offsets. The order is part of the contract:
/// frontier tie-breaking follows discovery order, which follows this order.
const NEIGHBOUR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const PATH_SYMBOL: char = 'o';
pub const CLOSED_SYMBOL: char = 'x';
pub const OPEN_SYMBOL: char = '+';

/// [Grid] owns every [Node] of a board in row-major order. Besides the cells it records the
/// start, the optional goal and the 4-connected components of passable cells in a
/// [UnionFind] structure, so reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    start: usize,
    goal: Option<usize>,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from rows of symbols. Line terminators are ignored; all rows must have the
    /// same number of symbols and exactly one of them must be the start.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Grid> {
        let rows = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .filter(|c| *c != '\n' && *c != '\r')
                    .collect::<Vec<char>>()
            })
            .collect::<Vec<_>>();
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MalformedBoard::Empty.into());
        }

        let mut nodes = Vec::with_capacity(width * height);
        let mut start: Option<usize> = None;
        let mut goal: Option<usize> = None;
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != width {
                return Err(MalformedBoard::RaggedRow {
                    row,
                    expected: width,
                    found: symbols.len(),
                }
                .into());
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let ix = nodes.len();
                let terrain = Terrain::from_symbol(symbol);
                match terrain {
                    Terrain::Start => {
                        if let Some(first) = start {
                            return Err(MalformedBoard::DuplicateStart {
                                first: (first / width, first % width),
                                second: (row, col),
                            }
                            .into());
                        }
                        start = Some(ix);
                    }
                    Terrain::Goal => {
                        if let Some(first) = goal {
                            return Err(MalformedBoard::DuplicateGoal {
                                first: (first / width, first % width),
                                second: (row, col),
                            }
                            .into());
                        }
                        goal = Some(ix);
                    }
                    _ => {}
                }
                nodes.push(Node::new(row, col, terrain));
            }
        }
        let start = start.ok_or(MalformedBoard::MissingStart)?;

        let mut grid = Grid {
            width,
            height,
            nodes,
            start,
            goal,
            components: UnionFind::new(width * height),
        };
        grid.generate_components();
        info!(
            "Parsed {}x{} board, start {}, goal {}",
            height,
            width,
            grid.start().point(),
            grid.goal()
                .map_or_else(|| "absent".to_owned(), |g| g.point().to_string())
        );
        Ok(grid)
    }

    /// Parses the rows supplied by a [BoardSource].
    pub fn from_source<B: BoardSource + ?Sized>(source: &B) -> Result<Grid> {
        Grid::parse(&source.rows()?)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start_index(&self) -> usize {
        self.start
    }
    pub fn goal_index(&self) -> Option<usize> {
        self.goal
    }
    pub fn start(&self) -> &Node {
        &self.nodes[self.start]
    }
    pub fn goal(&self) -> Option<&Node> {
        self.goal.map(|ix| &self.nodes[ix])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
    /// Node stored at a storage index obtained from this grid.
    pub fn node(&self, ix: usize) -> &Node {
        &self.nodes[ix]
    }
    pub(crate) fn node_mut(&mut self, ix: usize) -> &mut Node {
        &mut self.nodes[ix]
    }

    /// Row-major storage index of (row, col), bounds-checked.
    pub fn index_of(&self, row: i64, col: i64) -> Result<usize> {
        if self.in_bounds(row, col) {
            Ok(row as usize * self.width + col as usize)
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }
    pub fn at(&self, row: usize, col: usize) -> Result<&Node> {
        self.index_of(row as i64, col as i64)
            .map(|ix| &self.nodes[ix])
    }
    /// Like [at](Self::at) with `x` the column and `y` the row.
    pub fn at_point(&self, point: &Point) -> Result<&Node> {
        self.index_of(point.y as i64, point.x as i64)
            .map(|ix| &self.nodes[ix])
    }
    fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Storage indices of the in-bounds 4-neighbours of the node at `ix`, ordered up, down,
    /// left, right. Walls are included; filtering them is up to the caller.
    pub fn neighbors(&self, ix: usize) -> SmallVec<[usize; 4]> {
        let node = &self.nodes[ix];
        let (row, col) = (node.row() as i64, node.col() as i64);
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|(dr, dc)| self.index_of(row + dr, col + dc).ok())
            .collect()
    }

    /// Clears the search bookkeeping of every node, leaving walls closed.
    pub(crate) fn reset_search_state(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset();
        }
    }

    /// Links every pair of adjacent passable cells in a fresh [UnionFind].
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.nodes.len());
        for ix in 0..self.nodes.len() {
            if self.nodes[ix].is_wall() {
                continue;
            }
            // Looking down and right covers every edge exactly once.
            for n in self.neighbors(ix).into_iter().filter(|&n| n > ix) {
                if !self.nodes[n].is_wall() {
                    self.components.union(ix, n);
                }
            }
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Result<usize> {
        let ix = self.index_of(point.y as i64, point.x as i64)?;
        Ok(self.components.find(ix))
    }

    /// Checks if two passable cells are on the same component. Out-of-bounds points and walls
    /// are never reachable.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        match (self.at_point(from), self.at_point(to)) {
            (Ok(a), Ok(b)) if !a.is_wall() && !b.is_wall() => {
                self.components.equiv(self.ix(a), self.ix(b))
            }
            _ => false,
        }
    }

    /// Checks if the board has a goal on the same component as the start.
    pub fn goal_reachable(&self) -> bool {
        self.goal
            .is_some_and(|goal| self.components.equiv(self.start, goal))
    }

    fn ix(&self, node: &Node) -> usize {
        node.row() * self.width + node.col()
    }

    /// Sum of the terrain costs of every cell the path enters, i.e. all but the first.
    pub fn path_cost(&self, path: &[Point]) -> Result<u32> {
        path.iter()
            .skip(1)
            .try_fold(0, |acc, p| Ok(acc + self.at_point(p)?.terrain().cost()))
    }

    /// Checks that consecutive points of a path are 4-adjacent.
    pub fn is_contiguous(path: &[Point]) -> bool {
        path.iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
    }

    /// Text picture of the current search state: path cells become `o`, other closed cells
    /// `x` and open cells `+`. Walls, unvisited cells, the start and the goal keep their symbol.
    pub fn render(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.nodes.chunks(self.width) {
            for node in row {
                let symbol = match (node.terrain(), node.state()) {
                    (Terrain::Start | Terrain::Goal | Terrain::Wall, _) => node.terrain().symbol(),
                    _ if path.contains(&node.point()) => PATH_SYMBOL,
                    (_, FrontierState::Closed) => CLOSED_SYMBOL,
                    (_, FrontierState::Open) => OPEN_SYMBOL,
                    (terrain, FrontierState::Unvisited) => terrain.symbol(),
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.width) {
            let line = row.iter().map(|n| n.terrain().symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
