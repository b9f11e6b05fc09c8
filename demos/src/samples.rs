//! Built-in sample maps.

use gridstar_core::{Grid, GridError, Point};

/// 20x20 corridor maze. `.` is walkable, `#` is blocked.
pub const MAZE: &str = "\
...#.....#.....#....
.#.#.###.#.###.###..
.#.....#.....#...#..
.#####.#####.###.##.
.....#.....#...#....
####.#####.###.####.
...#.....#...#....#.
.#.#####.###.####.#.
.#.....#...#....#...
.#####.###.####.###.
.....#...#....#.....
.###.###.####.#####.
...#...#....#.....#.
.#.###.####.#####.#.
.#...#....#.....#...
.###.####.#####.###.
...#....#.....#.....
.#.####.#####.####..
.#....#.....#....#..
....................";

pub const MAZE_START: Point = Point::new(0, 0);
pub const MAZE_END: Point = Point::new(5, 12);

/// 30x30 cost field. The walls hold the maximum value, 10; the openings in
/// them are cheap.
pub const COST_FIELD: &str = "\
10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10
10 -3  1  2  3  4  5 10  6  7  8 10  9  0 -1 10  1  2  3 10  4  5  6 10  7  8  9 10  0 10
10 -4  2  3  4  5  6  1  7  8  9  1  0 -1 -2  1  2  3  4  1  5  6  7  1  8  9  0  1 -1 10
10 -5  3  4  5  6  7 10  8  9  0 10 -1 -2 -3 10  3  4  5 10  6  7  8 10  9  0 -1 10 -2 10
10 10 10  1 10 10 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10 10
10 -6  4  5  6  7  8 10  9  0 -1 10 -2 -3 -4 10  4  5  6 10  7  8  9 10  0 -1 -2 10 -3 10
10 -7  5  6  7  8  9  1  0 -1 -2  1 -3 -4 -5  1  5  6  7  1  8  9  0  1 -1 -2 -3  1 -4 10
10 -8  6  7  8  9  0 10 -1 -2 -3 10 -4 -5 -6 10  6  7  8 10  9  0 -1 10 -2 -3 -4 10 -5 10
10 -9  7  8  9  0 -1 -1 -2 -3 -4 10 -5 -6 -7 10  7  8  9 10  0 -1 -2 10 -3 -4 -5 10 -6 10
10 10  1 10 10 -1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10 10
10  0 -1 -2 -3 -4 -5 10 -6 -7 -8 10 -9  1  2 10  3  4  5 10  6  7  8 10  9  0 -1 10 -2 10
10  1 -2 -3 -4 -5 -6  1 -7 -8 -9 10  0  2  3 10  4  5  6 10  7  8  9 10  0  1  2 10 -3 10
10  2 -3 -4 -5 -6 -7 10 -8 -9  0  1  1  3  4 -1  5  6  7  1  8  9  0  1  1  2  3  1 -4 10
10  3 -4 -5 -6 -7 -8 10 -9  0  1 10  2  4  5 10  6  7  8 10  9  0  1 10  2  3  4 10 -5 10
10 10 10  1 10 10 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10 10
10  4  5  6  7  8  9 10  0 -1 -2 10 -3 -4 -5 10  5  6  7 10  8  9  0 10 -1 -2 -3 10 -4 10
10  5  6  7  8  9  0  1 -1 -2 -3 10 -4 -5 -6 10  6  7  8 10  9  0 -1 10 -2 -3 -4 10 -5 10
10  6  7  8  9  0 -1 10 -2 -3 -4  1 -5 -6 -7  1  7  8  9  1  0 -1 -2 -1 -3 -4 -5  1 -6 10
10  7  8  9  0 -1 -2 10 -3 -4 -5 10 -6 -7 -8 10  8  9  0 10 -1 -2 -3 10 -4 -5 -6 10 -7 10
10 10 10 10  1 10 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10 -1 10 10 10  1 10 10 10 10
10  8  9  0 -1 -2 -3 10 -4 -5 -6 10 -7 -8 -9 10  9  0  1 10  2  3  4 10  5  6  7 10 -8 10
10  9  0 -1 -2 -3 -4  1 -5 -6 -7 10 -8 -9  0 10  1  2  3 10  4  5  6 10  7  8  9 10 -9 10
10  0 -1 -2 -3 -4 -5 10 -6 -7 -8  1 -9  0  1  1  2  3  4  1  5  6  7  1  8  9  0  1  1 10
10  1 -2 -3 -4 -5 -6 10 -7 -8 -9 10  0  1  2 10  3  4  5 10  6  7  8 10  9  0  1 10  2 10
10 10 10  1 10 10 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10  1 10 10 10 10
10  2  3  4  5  6  7 10  8  9  0 10  1  2  3 10  4  5  6 10  7  8  9 10  0  1  2 10  3 10
10  3  4  5  6  7  8  1  9  0  1 10  2  3  4 10  5  6  7 10  8  9  0 10  1  2  3 10  4 10
10  4  5  6  7  8  9 10  0  1  2  1  3  4  5  1  6  7  8  1  9  0  1  1  2  3  4  1  5 10
10  5  6  7  8  9  0 10  1  2  3 10  4  5  6 10  7  8  9 10  0  1  2 10  3  4  5 10  6 10
10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10 10";

pub const COST_FIELD_START: Point = Point::new(1, 1);
pub const COST_FIELD_END: Point = Point::new(28, 28);

/// Parse a `.`/`#` maze, one buffer row per line.
pub fn parse_maze(text: &str) -> Result<Grid<bool>, GridError> {
    Grid::from_rows(
        text.lines()
            .map(|line| line.chars().map(|c| c == '.').collect())
            .collect(),
    )
}

/// Parse whitespace-separated integers, one buffer row per line.
pub fn parse_costs(text: &str) -> Result<Grid<i32>, Box<dyn std::error::Error>> {
    let rows = text
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(str::parse::<i32>)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Grid::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Axes;

    #[test]
    fn samples_parse() {
        let maze = parse_maze(MAZE).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (20, 20));
        assert_eq!(maze.get(MAZE_START, Axes::RowY), Some(&true));
        assert_eq!(maze.get(Point::new(3, 0), Axes::RowY), Some(&false));

        let field = parse_costs(COST_FIELD).unwrap();
        assert_eq!((field.rows(), field.cols()), (30, 30));
        assert_eq!(field.get(COST_FIELD_START, Axes::RowY), Some(&-3));
    }
}
