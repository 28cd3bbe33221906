//! Pipe-maze traversal.
//!
//! A maze is a [`Grid`] of pipe tiles with exactly one start tile `S` of unknown shape.
//! [`PipeMaze::new`] works out which pipe hides under `S` from the neighbours that link back
//! to it, [`PipeMaze::walk`] follows the loop through it, and [`Cycle`] measures what the loop
//! encloses.

use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;
use log::debug;

use crate::error::{Error, Result};
use crate::grid::{Direction, Grid, Pos};

const START: u8 = b'S';
const PIPES: &[u8] = b"|-LJ7F";

/// Whether `symbol` has an opening toward `dir`.
fn opens(symbol: u8, dir: Direction) -> bool {
    use Direction::*;
    matches!(
        (symbol, dir),
        (b'|', North | South)
            | (b'-', East | West)
            | (b'L', North | East)
            | (b'J', North | West)
            | (b'7', South | West)
            | (b'F', South | East)
    )
}

#[derive(Clone, Debug)]
pub struct PipeMaze {
    grid: Grid,
    start: Pos,
}

impl PipeMaze {
    /// Locates the start tile and replaces it with the pipe its two linked neighbours imply.
    pub fn new(grid: Grid) -> Result<PipeMaze> {
        let start = grid.find(START).ok_or(Error::MissingStart)?;
        let links: ArrayVec<Direction, 4> = Direction::ALL
            .into_iter()
            .filter(|&dir| {
                grid.neighbour(start, dir)
                    .and_then(|pos| grid.get(pos))
                    .is_some_and(|symbol| opens(symbol, dir.opposite()))
            })
            .collect();
        let unresolved = || Error::UnresolvedStart { col: start.0, row: start.1, links: links.len() };
        let [a, b] = links[..] else { return Err(unresolved()) };
        let symbol = PIPES
            .iter()
            .copied()
            .find(|&symbol| opens(symbol, a) && opens(symbol, b))
            .ok_or_else(unresolved)?;
        debug!("start tile at {start:?} is '{}'", symbol as char);
        Ok(PipeMaze { grid: grid.with_cell(start, symbol), start })
    }

    pub fn parse(input: &str) -> Result<PipeMaze> {
        PipeMaze::new(Grid::parse(input)?)
    }

    /// The maze with the start tile already resolved.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    /// Follows the link from `pos` toward `dir` if both tiles open onto each other.
    fn link(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        if !opens(self.grid.get(pos)?, dir) {
            return None;
        }
        let next = self.grid.neighbour(pos, dir)?;
        opens(self.grid.get(next)?, dir.opposite()).then_some(next)
    }

    pub fn walk(&self) -> Result<Cycle> {
        let mut cells = Vec::new();
        let mut pos = self.start;
        let mut back: Option<Direction> = None;
        loop {
            cells.push(pos);
            let moves: ArrayVec<(Direction, Pos), 4> = Direction::ALL
                .into_iter()
                .filter(|&dir| Some(dir) != back)
                .filter_map(|dir| self.link(pos, dir).map(|next| (dir, next)))
                .collect();
            // either way out of the start tile closes the same loop
            let (dir, next) = match (back, &moves[..]) {
                (None, [first, ..]) | (Some(_), [first]) => *first,
                _ => return Err(Error::NoValidMove { col: pos.0, row: pos.1 }),
            };
            pos = next;
            back = Some(dir.opposite());
            if pos == self.start {
                break;
            }
        }
        debug!("loop through {:?} is {} tiles long", self.start, cells.len());
        Ok(Cycle { cells })
    }
}

/// A closed loop of tiles, starting at the maze's start tile. The step back to the start is
/// implied, so no tile appears twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    cells: Vec<Pos>,
}

impl Cycle {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Steps from the start to the tile farthest along the loop.
    pub fn farthest(&self) -> usize {
        self.len() / 2
    }

    /// Twice the area enclosed by the loop, by the Shoelace formula.
    pub fn doubled_area(&self) -> i64 {
        self.cells
            .iter()
            .circular_tuple_windows()
            .map(|(&(x1, y1), &(x2, y2))| x1 as i64 * y2 as i64 - x2 as i64 * y1 as i64)
            .sum::<i64>()
            .abs()
    }

    /// Lattice points strictly inside the loop, from area = interior + boundary / 2 - 1.
    pub fn interior_points(&self) -> i64 {
        (self.doubled_area() - self.len() as i64 + 2) / 2
    }

    /// Lattice points strictly inside the loop, counted tile by tile.
    ///
    /// Scanning each row left to right, every loop tile with a northward opening flips the
    /// inside/outside state; tiles off the loop are counted while inside. `grid` must be the
    /// resolved maze the loop was walked on.
    pub fn interior_points_scanned(&self, grid: &Grid) -> i64 {
        let width = grid.width();
        let mut on_loop = bitvec![0; width * grid.height()];
        for &(col, row) in &self.cells {
            on_loop.set(row * width + col, true);
        }

        let mut count = 0;
        for (row, tiles) in grid.rows().enumerate() {
            let mut inside = false;
            for (col, &tile) in tiles.iter().enumerate() {
                if on_loop[row * width + col] {
                    if opens(tile, Direction::North) {
                        inside = !inside;
                    }
                } else if inside {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = ".....\n.S-7.\n.|.|.\n.L-J.\n.....";

    const WINDING: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...";

    const POCKETS: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";

    const SQUEEZED: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........";

    #[test]
    fn start_is_resolved_from_neighbours() {
        let maze = PipeMaze::parse(SQUARE).unwrap();
        assert_eq!(maze.start(), (1, 1));
        assert_eq!(maze.grid().get((1, 1)), Some(b'F'));

        let maze = PipeMaze::parse(WINDING).unwrap();
        assert_eq!(maze.start(), (0, 2));
        assert_eq!(maze.grid().get((0, 2)), Some(b'F'));
    }

    #[test]
    fn square_loop() {
        let maze = PipeMaze::parse(SQUARE).unwrap();
        let cycle = maze.walk().unwrap();
        assert_eq!(cycle.len(), 8);
        assert_eq!(cycle.cells()[0], (1, 1));
        assert_eq!(cycle.farthest(), 4);
        assert_eq!(cycle.doubled_area(), 8);
        assert_eq!(cycle.interior_points(), 1);
        assert_eq!(cycle.interior_points_scanned(maze.grid()), 1);
    }

    #[test]
    fn loops_have_even_length_and_no_repeats() {
        for input in [SQUARE, WINDING, POCKETS, SQUEEZED] {
            let cycle = PipeMaze::parse(input).unwrap().walk().unwrap();
            assert_eq!(cycle.len() % 2, 0, "{input}");
            assert_eq!(cycle.cells().iter().unique().count(), cycle.len());
        }
    }

    #[test]
    fn winding_loop_farthest_point() {
        let cycle = PipeMaze::parse(WINDING).unwrap().walk().unwrap();
        assert_eq!(cycle.len(), 16);
        assert_eq!(cycle.farthest(), 8);
    }

    #[test]
    fn interior_counts_agree() {
        for input in [SQUARE, WINDING, POCKETS, SQUEEZED] {
            let maze = PipeMaze::parse(input).unwrap();
            let cycle = maze.walk().unwrap();
            assert_eq!(cycle.interior_points(), cycle.interior_points_scanned(maze.grid()), "{input}");
        }
    }

    #[test]
    fn pockets_outside_the_loop_are_not_interior() {
        for input in [POCKETS, SQUEEZED] {
            let cycle = PipeMaze::parse(input).unwrap().walk().unwrap();
            assert_eq!(cycle.interior_points(), 4);
        }
    }

    #[test]
    fn missing_start() {
        assert!(matches!(PipeMaze::parse("F7\nLJ"), Err(Error::MissingStart)));
    }

    #[test]
    fn start_without_two_links() {
        let err = PipeMaze::parse("...\n.S-\n...").unwrap_err();
        assert!(matches!(err, Error::UnresolvedStart { col: 1, row: 1, links: 1 }));
    }

    #[test]
    fn broken_loop_has_no_valid_move() {
        // the loop is cut at (3, 2)
        let maze = PipeMaze::parse(".....\n.S-7.\n.|...\n.L-J.\n.....").unwrap();
        let err = maze.walk().unwrap_err();
        assert!(matches!(err, Error::NoValidMove { col: 3, row: 1 }));
    }
}

