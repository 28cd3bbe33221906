use log::{debug, error};

use crate::grid::Grid;
use crate::reflection::{find_reflection, Symmetry};
use crate::{Part, Result};

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let symmetry = match part {
        Part::One => Symmetry::Exact,
        Part::Two => Symmetry::Smudged,
    };

    input
        .trim()
        .split("\n\n")
        .enumerate()
        .map(|(ix, block)| -> Result<i64> {
            let pattern = Grid::parse(block)?;
            let reflection = find_reflection(&pattern, symmetry)
                .inspect_err(|_| error!("pattern {ix} has no {symmetry:?} mirror"))?;
            debug!("pattern {ix}: {reflection:?}");
            Ok(reflection.summary() as i64)
        })
        .sum()
}
