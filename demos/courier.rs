//! Shortest tour through a duct maze.
//!
//! Run: cargo run --bin courier [input-file]

use statewalk_demos::courier::{Ducts, SAMPLE};
use statewalk_demos::{init_logging, read_input};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let (text, _) = read_input(SAMPLE)?;
    let ducts = Ducts::parse(&text)?;
    log::info!(
        "{}x{} maze, {} points",
        ducts.maze().grid().width(),
        ducts.maze().grid().height(),
        ducts.points().len()
    );

    for (part, return_home) in [(1, false), (2, true)] {
        match ducts.shortest_tour(return_home) {
            Some(steps) => println!("part {part}: {steps}"),
            None => println!("part {part}: some point is unreachable"),
        }
    }
    Ok(())
}
