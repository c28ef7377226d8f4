use core::fmt;

/// Cost of entering a water cell.
pub const WATER_COST: u32 = 100;
/// Cost of entering a mountain cell.
pub const MOUNTAIN_COST: u32 = 50;
/// Cost of entering a forest cell.
pub const FOREST_COST: u32 = 10;
/// Cost of entering a grass cell.
pub const GRASS_COST: u32 = 5;
/// Cost of entering a road cell.
pub const ROAD_COST: u32 = 1;

pub const START_SYMBOL: char = 'A';
pub const GOAL_SYMBOL: char = 'B';
pub const WALL_SYMBOL: char = '#';
pub const PLAIN_SYMBOL: char = '.';

/// The immutable kind of a board cell, decoded from its single-character symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Start,
    Goal,
    Wall,
    Plain,
    Water,
    Mountain,
    Forest,
    Grass,
    Road,
    /// Any symbol without a dedicated meaning. Treated as free open terrain.
    Other(char),
}

impl Terrain {
    pub fn from_symbol(symbol: char) -> Terrain {
        match symbol {
            START_SYMBOL => Terrain::Start,
            GOAL_SYMBOL => Terrain::Goal,
            WALL_SYMBOL => Terrain::Wall,
            PLAIN_SYMBOL => Terrain::Plain,
            'w' => Terrain::Water,
            'm' => Terrain::Mountain,
            'f' => Terrain::Forest,
            'g' => Terrain::Grass,
            'r' => Terrain::Road,
            other => Terrain::Other(other),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Terrain::Start => START_SYMBOL,
            Terrain::Goal => GOAL_SYMBOL,
            Terrain::Wall => WALL_SYMBOL,
            Terrain::Plain => PLAIN_SYMBOL,
            Terrain::Water => 'w',
            Terrain::Mountain => 'm',
            Terrain::Forest => 'f',
            Terrain::Grass => 'g',
            Terrain::Road => 'r',
            Terrain::Other(c) => *c,
        }
    }

    /// Cost paid when a path enters a cell of this terrain. Markers, walls and unknown
    /// symbols cost nothing; walls are kept out of the search by [is_passable](Self::is_passable).
    pub fn cost(&self) -> u32 {
        match self {
            Terrain::Water => WATER_COST,
            Terrain::Mountain => MOUNTAIN_COST,
            Terrain::Forest => FOREST_COST,
            Terrain::Grass => GRASS_COST,
            Terrain::Road => ROAD_COST,
            _ => 0,
        }
    }

    pub fn is_passable(&self) -> bool {
        *self != Terrain::Wall
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Traversal cost of a raw board symbol. Total: unrecognised symbols cost 0.
pub fn terrain_cost(symbol: char) -> u32 {
    Terrain::from_symbol(symbol).cost()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_table() {
        assert_eq!(terrain_cost('w'), 100);
        assert_eq!(terrain_cost('m'), 50);
        assert_eq!(terrain_cost('f'), 10);
        assert_eq!(terrain_cost('g'), 5);
        assert_eq!(terrain_cost('r'), 1);
        for marker in ['A', 'B', '#', '.', 'z', ' '] {
            assert_eq!(terrain_cost(marker), 0);
        }
    }

    #[test]
    fn symbols_survive_decoding() {
        for c in "AB#.wmfgrQ".chars() {
            assert_eq!(Terrain::from_symbol(c).symbol(), c);
        }
        assert_eq!(Terrain::from_symbol('Q'), Terrain::Other('Q'));
        assert!(!Terrain::Wall.is_passable());
        assert!(Terrain::Water.is_passable());
    }
}
