use std::env;
use std::thread;
use std::time::Duration;

use terrain_pathfinding::{Algorithm, FileBoardSource, Grid, Search, SearchState};

// Replays a search step by step on a board file, redrawing the board after every expansion.
//
//     cargo run --example animate -- boards/lakes.txt dijkstra 50
//
// Arguments are the board path, the algorithm (astar, bfs or dijkstra) and the delay between
// frames in milliseconds.

fn main() -> terrain_pathfinding::Result<()> {
    let mut args = env::args().skip(1);
    let board = args.next().unwrap_or_else(|| "boards/lakes.txt".to_owned());
    let algorithm = args
        .next()
        .map(|a| a.parse::<Algorithm>())
        .transpose()?
        .unwrap_or_default();
    let delay = Duration::from_millis(args.next().and_then(|d| d.parse().ok()).unwrap_or(0));

    let grid = Grid::from_source(&FileBoardSource::new(&board))?;
    let mut search = Search::new(grid, algorithm);
    let mut frame = 0;
    let mut draw = |grid: &Grid, terminal: bool| {
        frame += 1;
        if !terminal {
            // Clears the terminal and moves the cursor home
            print!("\x1b[2J\x1b[H");
            println!("{} step {}", algorithm, frame);
            print!("{}", grid.render(&[]));
            thread::sleep(delay);
        }
    };
    while !search.step(&mut draw).is_terminal() {}

    let outcome = search.outcome();
    print!("{}", search.grid().render(&outcome.path));
    match outcome.state {
        SearchState::Succeeded => println!(
            "Found a path of {} cells costing {} after {} expansions",
            outcome.path.len(),
            outcome.cost.unwrap_or_default(),
            outcome.expansions
        ),
        _ => println!("No path after {} expansions", outcome.expansions),
    }
    Ok(())
}
