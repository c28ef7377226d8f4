use grid_util::point::Point;
use terrain_pathfinding::{
    Algorithm, Error, FileBoardSource, Grid, MalformedBoard, Search, SearchState,
};

fn solve(board: &str, algorithm: Algorithm) -> terrain_pathfinding::SearchOutcome {
    let grid = Grid::from_source(board).unwrap();
    Search::new(grid, algorithm).solve().unwrap()
}

#[test]
fn open_corridor_under_astar() {
    let outcome = solve("A.B", Algorithm::AStar);
    assert_eq!(outcome.state, SearchState::Succeeded);
    assert_eq!(
        outcome.path,
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
    );
    assert_eq!(outcome.cost, Some(0));
    assert_eq!(outcome.expansions, 2);
}

#[test]
fn walled_corridor_exhausts() {
    for algorithm in Algorithm::ALL {
        let outcome = solve("A#B", algorithm);
        assert_eq!(outcome.state, SearchState::Exhausted);
        assert!(outcome.path.is_empty());
    }
}

#[test]
fn water_corridor_costs_the_same_for_every_strategy() {
    let dijkstra = solve("AwB", Algorithm::Dijkstra);
    let bfs = solve("AwB", Algorithm::BreadthFirst);
    assert_eq!(dijkstra.path, bfs.path);
    assert_eq!(dijkstra.cost, Some(100));
    assert_eq!(bfs.cost, Some(100));
}

#[test]
fn same_grid_searched_with_every_algorithm() {
    // |A.ffff.B|
    // |........|
    let board = "A.ffff.B\n........\n";
    let mut search = Search::new(Grid::from_source(board).unwrap(), Algorithm::AStar);
    let mut costs = Vec::new();
    for algorithm in Algorithm::ALL {
        search.reset(algorithm);
        let outcome = search.solve().unwrap();
        assert!(outcome.found());
        costs.push((algorithm, outcome.cost.unwrap(), outcome.path.len()));
    }
    // The cheapest route detours through the bottom row, the shortest one crosses the forest
    assert!(costs
        .iter()
        .filter(|(a, _, _)| *a != Algorithm::BreadthFirst)
        .all(|(_, cost, _)| *cost == 0));
    assert_eq!(costs[1], (Algorithm::BreadthFirst, 40, 8));
    assert_eq!(costs[0].2, 10);
}

#[test]
fn rendering_after_search() {
    let grid = Grid::from_source("A.\n#B\n").unwrap();
    let mut search = Search::new(grid, Algorithm::AStar);
    let outcome = search.solve().unwrap();
    assert_eq!(search.grid().render(&outcome.path), "Ao\n#B\n");
}

#[test]
fn malformed_boards_are_rejected() {
    assert!(matches!(
        Grid::from_source("A..\n..\n"),
        Err(Error::MalformedBoard(MalformedBoard::RaggedRow { row: 1, .. }))
    ));
    assert!(matches!(
        Grid::from_source("...\n..B\n"),
        Err(Error::MalformedBoard(MalformedBoard::MissingStart))
    ));
}

#[test]
fn bundled_boards_are_solvable() {
    for name in ["boards/lakes.txt", "boards/valley.txt"] {
        let grid = Grid::from_source(&FileBoardSource::new(name)).unwrap();
        assert!(grid.goal_reachable());
        let mut search = Search::new(grid, Algorithm::AStar);
        let astar = search.solve().unwrap();
        search.reset(Algorithm::Dijkstra);
        let dijkstra = search.solve().unwrap();
        assert!(astar.found());
        assert_eq!(astar.cost, dijkstra.cost);
    }
}
