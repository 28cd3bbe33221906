//! Advent of Code 2023 solutions.
//!
//! Every day is a pure function of its puzzle input; [`solve`] dispatches to it. The
//! reusable pieces live in their own modules:
//! - [`pipes`] walks a pipe maze and measures the loop it finds
//! - [`reflection`] finds mirror lines under an exact or smudged comparison
//! - [`remap`] chains piecewise-linear interval remappings

pub mod days;
pub mod error;
pub mod grid;
pub mod pipes;
pub mod reflection;
pub mod remap;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::debug;

pub use error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];
}

/// How day 10 counts the tiles enclosed by the loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Shoelace area and the lattice-point identity
    #[default]
    Pick,
    /// Row-by-row point-in-polygon scan
    RayCast,
}

pub fn solve(day: u8, part: Part, method: Method, input: &str) -> Result<i64> {
    match day {
        1 => days::day01::solve(part, input),
        2 => days::day02::solve(part, input),
        3 => days::day03::solve(part, input),
        4 => days::day04::solve(part, input),
        5 => days::day05::solve(part, input),
        6 => days::day06::solve(part, input),
        7 => days::day07::solve(part, input),
        8 => days::day08::solve(part, input),
        9 => days::day09::solve(part, input),
        10 => days::day10::solve(part, method, input),
        11 => days::day11::solve(part, input),
        13 => days::day13::solve(part, input),
        15 => days::day15::solve(part, input),
        _ => Err(Error::UnknownDay(day)),
    }
}

/// `day{day}.in`, or `day{day}test{test}.in` for an example input.
pub fn input_path(dir: &Path, day: u8, test: Option<u8>) -> PathBuf {
    match test {
        Some(test) => dir.join(format!("day{day}test{test}.in")),
        None => dir.join(format!("day{day}.in")),
    }
}

pub fn read_input(path: &Path) -> Result<String> {
    debug!("reading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}
