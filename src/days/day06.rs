use std::iter::zip;

use crate::{Error, Part, Result};

/// Hold times `h` in `0..=time` that travel `h * (time - h)`, strictly beyond `record`.
fn winning_holds(time: i64, record: i64) -> i64 {
    let beats = |hold: i64| hold * (time - hold) > record;
    let discriminant = time * time - 4 * record;
    if discriminant <= 0 {
        return 0;
    }
    // the float root only seeds the search; the integer checks decide
    let mut shortest = ((time as f64 - (discriminant as f64).sqrt()) / 2.0).floor().max(0.0) as i64;
    while shortest > 0 && beats(shortest - 1) {
        shortest -= 1;
    }
    while shortest <= time / 2 && !beats(shortest) {
        shortest += 1;
    }
    if shortest > time / 2 {
        return 0;
    }
    time - 2 * shortest + 1
}

fn numbers(line: Option<&str>, label: &str, part: Part) -> Result<Vec<i64>> {
    let line = line.unwrap_or_default();
    let values = line.strip_prefix(label).ok_or_else(|| Error::parse(line))?;
    Ok(match part {
        Part::One => values.split_whitespace().map(str::parse).collect::<std::result::Result<Vec<i64>, _>>()?,
        Part::Two => vec![values.split_whitespace().collect::<String>().parse::<i64>()?],
    })
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let mut lines = input.trim().lines();
    let times = numbers(lines.next(), "Time:", part)?;
    let records = numbers(lines.next(), "Distance:", part)?;
    if times.len() != records.len() {
        return Err(Error::parse(format!("{} times but {} records", times.len(), records.len())));
    }
    Ok(zip(times, records).map(|(time, record)| winning_holds(time, record)).product())
}
