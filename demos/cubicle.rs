//! Distances through a generated cubicle farm.
//!
//! Run: cargo run --bin cubicle [input-file]

use statewalk_core::Coord;
use statewalk_demos::cubicle::{SAMPLE, STEP_BUDGET, office, parse_designer, reachable, steps_to};
use statewalk_demos::{init_logging, read_input};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let (text, sample) = read_input(SAMPLE)?;
    let designer = parse_designer(&text)?;

    // The worked example only covers a 10x7 corner of the office.
    let (maze, target) = if sample {
        (office(designer, 10, 7), Coord::new(4, 7))
    } else {
        (office(designer, 50, 50), Coord::new(39, 31))
    };
    log::debug!("office layout:\n{maze}");

    match steps_to(&maze, target) {
        Some(steps) => println!("part 1: {steps}"),
        None => println!("part 1: ({target}) is walled off"),
    }
    println!("part 2: {}", reachable(&maze, STEP_BUDGET));
    Ok(())
}
