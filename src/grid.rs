//! Rectangular byte grids addressed by `(column, row)`.
//!
//! A [`Grid`] never changes after construction; [`Grid::with_cell`] hands back an edited copy.

use crate::error::{Error, Result};

/// `(column, row)`, origin in the top-left corner.
pub type Pos = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Moves one cell; `None` when stepping past the top or left edge.
    pub fn step(self, (col, row): Pos) -> Option<Pos> {
        match self {
            Direction::North => Some((col, row.checked_sub(1)?)),
            Direction::East => Some((col + 1, row)),
            Direction::South => Some((col, row + 1)),
            Direction::West => Some((col.checked_sub(1)?, row)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Grid> {
        Grid::from_rows(input.trim().lines().map(str::trim_end))
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: impl IntoIterator<Item = R>) -> Result<Grid> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (ri, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(Error::RaggedGrid { row: ri, expected, found: row.len() })
                }
                Some(_) => (),
            }
            cells.extend_from_slice(row);
            height += 1;
        }
        match width {
            Some(width) if width > 0 => Ok(Grid { cells, width, height }),
            _ => Err(Error::parse("empty grid")),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, (col, row): Pos) -> Option<u8> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.width..][..self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (col, row)))
    }

    pub fn find(&self, symbol: u8) -> Option<Pos> {
        self.cells
            .iter()
            .position(|&cell| cell == symbol)
            .map(|ix| (ix % self.width, ix / self.width))
    }

    /// The adjacent position in `dir`, if it lies inside the grid.
    pub fn neighbour(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        dir.step(pos).filter(|&(col, row)| col < self.width && row < self.height)
    }

    /// All in-grid positions of the 8-neighbourhood of `pos`.
    pub fn surrounding(&self, (col, row): Pos) -> impl Iterator<Item = Pos> + '_ {
        (row.saturating_sub(1)..=row + 1).flat_map(move |r| {
            (col.saturating_sub(1)..=col + 1)
                .filter(move |&c| (c, r) != (col, row) && c < self.width && r < self.height)
                .map(move |c| (c, r))
        })
    }

    pub fn transpose(&self) -> Grid {
        let cells = (0..self.width)
            .flat_map(|col| (0..self.height).map(move |row| self.cells[row * self.width + col]))
            .collect();
        Grid { cells, width: self.height, height: self.width }
    }

    pub fn with_cell(&self, (col, row): Pos, symbol: u8) -> Grid {
        let mut edited = self.clone();
        edited.cells[row * self.width + col] = symbol;
        edited
    }
}
