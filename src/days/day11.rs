use bitvec::prelude::*;
use itertools::Itertools;

use crate::grid::Grid;
use crate::{Part, Result};

const GALAXY: u8 = b'#';

/// Sum of the Manhattan distances between all pairs of galaxies once every empty row and
/// column has grown to `factor` rows or columns.
pub fn total_distance(input: &str, factor: i64) -> Result<i64> {
    let grid = Grid::parse(input)?;
    let galaxies = grid.positions().filter(|&pos| grid.get(pos) == Some(GALAXY)).collect::<Vec<_>>();

    let mut empty_cols = bitvec![1; grid.width()];
    let mut empty_rows = bitvec![1; grid.height()];
    for &(col, row) in &galaxies {
        empty_cols.set(col, false);
        empty_rows.set(row, false);
    }
    let expand = |empty: &BitSlice, ix: usize| ix as i64 + empty[..ix].count_ones() as i64 * (factor - 1);

    Ok(galaxies
        .iter()
        .map(|&(col, row)| (expand(&empty_cols, col), expand(&empty_rows, row)))
        .tuple_combinations()
        .map(|((c1, r1), (c2, r2))| (c1 - c2).abs() + (r1 - r2).abs())
        .sum())
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    match part {
        Part::One => total_distance(input, 2),
        Part::Two => total_distance(input, 1_000_000),
    }
}
