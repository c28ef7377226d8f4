use terrain_pathfinding::{Algorithm, Grid, Search};

// In this example a path is searched on the board
//  ________
// |A.ffff.B|
// |..##....|
// |........|
//  ________
// where
// - A marks the start, B the goal
// - # marks a wall
// - f marks forest, which costs 10 to enter
//
// with each of the three algorithms on the same grid.

fn main() {
    let grid = Grid::parse(&["A.ffff.B", "..##....", "........"]).unwrap();
    println!("{}", grid);
    let mut search = Search::new(grid, Algorithm::AStar);
    for algorithm in Algorithm::ALL {
        search.reset(algorithm);
        let outcome = search.solve().unwrap();
        println!(
            "{}: cost {:?}, {} cells, {} expansions",
            algorithm,
            outcome.cost,
            outcome.path.len(),
            outcome.expansions
        );
        println!("{}", search.grid().render(&outcome.path));
    }
}
