use itertools::Itertools;

use crate::{Part, Result};

/// The values one step before and one step after `history`, found by differencing until
/// nothing but zeros remain.
fn extrapolate(history: &[i64]) -> (i64, i64) {
    let mut row = history.to_vec();
    let mut firsts = Vec::new();
    let mut next = 0;
    while row.iter().any(|&v| v != 0) {
        firsts.push(row[0]);
        next += row[row.len() - 1];
        row = row.iter().tuple_windows().map(|(a, b)| b - a).collect();
    }
    let previous = firsts.iter().rev().fold(0, |below, &first| first - below);
    (previous, next)
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    input
        .trim()
        .lines()
        .map(|line| -> Result<i64> {
            let history = line.split_whitespace().map(str::parse).collect::<std::result::Result<Vec<i64>, _>>()?;
            let (previous, next) = extrapolate(&history);
            Ok(match part {
                Part::One => next,
                Part::Two => previous,
            })
        })
        .sum()
}
