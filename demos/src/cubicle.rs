//! Walking a cubicle farm whose walls come from a designer's number.
//!
//! The cell at column `x`, row `y` is a wall when
//! `x*x + 3*x + 2*x*y + y + y*y + designer` has an odd number of set bits.

use statewalk_core::{Coord, Grid};
use statewalk_search::{Maze, MazeNode};

use crate::PuzzleError;

/// Designer number of the worked example.
pub const SAMPLE: &str = "10";

/// Where every walk starts.
pub const ENTRANCE: Coord = Coord::new(1, 1);

/// Step budget for the reachability question.
pub const STEP_BUDGET: i32 = 50;

/// Read the designer number from puzzle text.
pub fn parse_designer(text: &str) -> Result<i64, PuzzleError> {
    let word = text.split_whitespace().next().unwrap_or_default();
    word.parse()
        .map_err(|_| PuzzleError::NotANumber(word.to_string()))
}

/// Whether the cell is a wall for this designer.
pub fn is_wall(designer: i64, c: Coord) -> bool {
    let (x, y) = (i64::from(c.col), i64::from(c.row));
    let v = (x * x + 3 * x + 2 * x * y + y + y * y).wrapping_add(designer);
    v.count_ones() % 2 == 1
}

/// The office as a `width × height` maze.
pub fn office(designer: i64, width: i32, height: i32) -> Maze {
    Maze::from_grid(Grid::from_size(width, height, |c| MazeNode {
        obstacle: is_wall(designer, c),
        ..MazeNode::default()
    }))
}

/// Fewest steps from [`ENTRANCE`] to `target`, `None` if walled off.
pub fn steps_to(maze: &Maze, target: Coord) -> Option<i32> {
    let d = maze.score(ENTRANCE, target);
    (d != statewalk_search::UNREACHABLE).then_some(d)
}

/// Number of distinct cells reachable from [`ENTRANCE`] in at most
/// `budget` steps.
pub fn reachable(maze: &Maze, budget: i32) -> usize {
    maze.reachable_within(ENTRANCE, budget).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_layout() {
        let maze = office(10, 10, 7);
        let top: String = maze.to_string().lines().take(2).collect::<Vec<_>>().join("\n");
        assert_eq!(top, ".#.####.##\n..#..#...#");
    }

    #[test]
    fn sample_distance() {
        let maze = office(parse_designer(SAMPLE).unwrap(), 10, 7);
        assert_eq!(steps_to(&maze, Coord::new(4, 7)), Some(11));
        assert_eq!(steps_to(&maze, Coord::new(0, 1)), None);
    }

    #[test]
    fn sample_reachability() {
        let maze = office(10, 10, 7);
        assert_eq!(reachable(&maze, 5), 11);
        assert_eq!(reachable(&maze, STEP_BUDGET), 19);
        assert_eq!(reachable(&office(10, 50, 50), STEP_BUDGET), 151);
    }

    #[test]
    fn designer_number_parsing() {
        assert_eq!(parse_designer(" 1352\n").unwrap(), 1352);
        assert!(matches!(
            parse_designer("abc"),
            Err(PuzzleError::NotANumber(s)) if s == "abc"
        ));
        assert!(parse_designer("").is_err());
        assert_eq!(parse_designer("9000000000").unwrap(), 9_000_000_000);
    }

    #[test]
    fn large_designer_numbers() {
        let maze = office(i64::MAX, 4, 4);
        assert_eq!(maze.grid().len(), 16);
        // At the origin the value is the designer number itself.
        assert!(!is_wall((1i64 << 40) + 1, Coord::new(0, 0)));
        assert!(is_wall(i64::from(i32::MAX), Coord::new(0, 0)));
    }
}
