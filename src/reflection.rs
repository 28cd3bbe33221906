//! Mirror lines in sequences of equally long lines.
//!
//! A split after `n` lines is a reflection when the first `n` lines, read backwards, line up
//! with the remaining lines. Lines beyond the shorter side are ignored.

use std::iter::zip;

use log::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symmetry {
    /// Both sides are identical.
    Exact,
    /// Both sides differ in exactly one cell.
    Smudged,
}

impl Symmetry {
    fn allowed_mismatches(self) -> usize {
        match self {
            Symmetry::Exact => 0,
            Symmetry::Smudged => 1,
        }
    }

    pub fn holds(self, mismatches: usize) -> bool {
        mismatches == self.allowed_mismatches()
    }
}

/// Cells that differ between `lines[..split]` reversed and `lines[split..]`. Counting stops
/// once `limit` is exceeded.
pub fn mismatches<L: AsRef<[u8]>>(lines: &[L], split: usize, limit: usize) -> usize {
    lines[..split]
        .iter()
        .rev()
        .zip(&lines[split..])
        .flat_map(|(left, right)| zip(left.as_ref(), right.as_ref()))
        .filter(|(left, right)| left != right)
        .take(limit + 1)
        .count()
}

/// Number of lines before the first split satisfying `symmetry`.
pub fn find_split<L: AsRef<[u8]>>(lines: &[L], symmetry: Symmetry) -> Option<usize> {
    let limit = symmetry.allowed_mismatches();
    (1..lines.len()).find(|&split| symmetry.holds(mismatches(lines, split, limit)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reflection {
    /// Horizontal mirror below this many rows.
    Rows(usize),
    /// Vertical mirror right of this many columns.
    Columns(usize),
}

impl Reflection {
    pub fn summary(self) -> usize {
        match self {
            Reflection::Rows(n) => 100 * n,
            Reflection::Columns(n) => n,
        }
    }
}

/// Looks for a horizontal mirror first, then a vertical one in the transposed pattern.
pub fn find_reflection(pattern: &Grid, symmetry: Symmetry) -> Result<Reflection> {
    let rows: Vec<&[u8]> = pattern.rows().collect();
    if let Some(split) = find_split(&rows, symmetry) {
        debug!("{symmetry:?} mirror below row {split}");
        return Ok(Reflection::Rows(split));
    }

    let transposed = pattern.transpose();
    let columns: Vec<&[u8]> = transposed.rows().collect();
    let split = find_split(&columns, symmetry).ok_or(Error::NoReflectionFound {
        width: pattern.width(),
        height: pattern.height(),
    })?;
    debug!("{symmetry:?} mirror right of column {split}");
    Ok(Reflection::Columns(split))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTICAL: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.";

    const HORIZONTAL: &str = "\
#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#";

    #[test]
    fn exact_mirrors() {
        let vertical = Grid::parse(VERTICAL).unwrap();
        assert_eq!(find_reflection(&vertical, Symmetry::Exact).unwrap(), Reflection::Columns(5));

        let horizontal = Grid::parse(HORIZONTAL).unwrap();
        assert_eq!(find_reflection(&horizontal, Symmetry::Exact).unwrap(), Reflection::Rows(4));
    }

    #[test]
    fn smudged_mirrors() {
        let vertical = Grid::parse(VERTICAL).unwrap();
        assert_eq!(find_reflection(&vertical, Symmetry::Smudged).unwrap(), Reflection::Rows(3));

        let horizontal = Grid::parse(HORIZONTAL).unwrap();
        assert_eq!(find_reflection(&horizontal, Symmetry::Smudged).unwrap(), Reflection::Rows(1));
    }

    #[test]
    fn found_split_has_the_required_mismatches() {
        for input in [VERTICAL, HORIZONTAL] {
            let grid = Grid::parse(input).unwrap();
            for symmetry in [Symmetry::Exact, Symmetry::Smudged] {
                for axis in [grid.clone(), grid.transpose()] {
                    let lines: Vec<&[u8]> = axis.rows().collect();
                    if let Some(split) = find_split(&lines, symmetry) {
                        assert!(symmetry.holds(mismatches(&lines, split, usize::MAX - 1)));
                    }
                }
            }
        }
    }

    #[test]
    fn split_compares_up_to_the_shorter_side() {
        let lines = ["ab", "ab", "xy", "zz", "qq"];
        assert_eq!(find_split(&lines, Symmetry::Exact), Some(1));
        assert_eq!(find_split(&lines[2..], Symmetry::Exact), None);
        assert_eq!(find_split(&["ab", "cd", "cd"], Symmetry::Exact), Some(2));
    }

    #[test]
    fn summary_weights_rows() {
        assert_eq!(Reflection::Rows(4).summary(), 400);
        assert_eq!(Reflection::Columns(5).summary(), 5);
    }

    #[test]
    fn no_reflection_on_either_axis() {
        let grid = Grid::parse("#.\n..").unwrap();
        let err = find_reflection(&grid, Symmetry::Exact).unwrap_err();
        assert!(matches!(err, Error::NoReflectionFound { width: 2, height: 2 }));
        assert_eq!(find_reflection(&grid, Symmetry::Smudged).unwrap(), Reflection::Rows(1));
    }
}
