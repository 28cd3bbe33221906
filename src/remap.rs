//! Chains of piecewise-linear integer remappings.
//!
//! A [`RemapStage`] moves values inside any of its half-open source intervals by a fixed
//! offset and leaves every other value alone. A [`RemapChain`] feeds each stage's output into
//! the next stage. Source intervals of one stage are expected not to overlap; overlaps are
//! reported but not rejected, and a value then follows the interval that starts first.

use std::ops::Range;

use itertools::Itertools;
use log::{debug, warn};
use regex::Regex;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
    pub offset: i64,
}

impl Interval {
    /// `[source_start, source_start + length)` onto `destination_start..`.
    pub fn new(destination_start: i64, source_start: i64, length: i64) -> Interval {
        Interval { start: source_start, end: source_start + length, offset: destination_start - source_start }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.start..self.end).contains(&value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemapStage {
    source: String,
    destination: String,
    intervals: Vec<Interval>,
}

impl RemapStage {
    /// Builds a stage from `(destination_start, source_start, length)` triples. Triples that
    /// cover no values are dropped.
    pub fn from_triples(
        source: &str,
        destination: &str,
        triples: impl IntoIterator<Item = (i64, i64, i64)>,
    ) -> RemapStage {
        let mut intervals = triples
            .into_iter()
            .map(|(destination_start, source_start, length)| Interval::new(destination_start, source_start, length))
            .filter(|interval| {
                let empty = interval.end <= interval.start;
                if empty {
                    warn!("{source}-to-{destination}: skipping empty interval at {}", interval.start);
                }
                !empty
            })
            .collect::<Vec<_>>();
        intervals.sort_unstable_by_key(|interval| interval.start);
        for (a, b) in intervals.iter().tuple_windows() {
            if b.start < a.end {
                warn!("{source}-to-{destination}: {}..{} overlaps {}..{}", a.start, a.end, b.start, b.end);
            }
        }
        debug!("{source}-to-{destination}: {} intervals", intervals.len());
        RemapStage { source: source.to_owned(), destination: destination.to_owned(), intervals }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Source intervals, ordered by start.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn apply(&self, value: i64) -> i64 {
        match self.intervals.iter().find(|interval| interval.contains(value)) {
            Some(interval) => value + interval.offset,
            None => value,
        }
    }

    /// Remaps whole ranges, splitting them where interval boundaries cut through.
    pub fn apply_ranges(&self, ranges: &[Range<i64>]) -> Vec<Range<i64>> {
        let mut remapped = Vec::with_capacity(ranges.len());
        for range in ranges {
            let mut cursor = range.start;
            for interval in &self.intervals {
                if cursor >= range.end || interval.start >= range.end {
                    break;
                }
                if interval.end <= cursor {
                    continue;
                }
                if interval.start > cursor {
                    remapped.push(cursor..interval.start);
                    cursor = interval.start;
                }
                let end = interval.end.min(range.end);
                remapped.push(cursor + interval.offset..end + interval.offset);
                cursor = end;
            }
            if cursor < range.end {
                remapped.push(cursor..range.end);
            }
        }
        remapped
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemapChain {
    stages: Vec<RemapStage>,
}

impl RemapChain {
    pub fn new() -> RemapChain {
        RemapChain::default()
    }

    /// Appends `stage` after all stages already in the chain.
    pub fn push(&mut self, stage: RemapStage) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[RemapStage] {
        &self.stages
    }

    pub fn apply(&self, value: i64) -> i64 {
        self.stages.iter().fold(value, |value, stage| stage.apply(value))
    }

    pub fn apply_ranges(&self, ranges: &[Range<i64>]) -> Vec<Range<i64>> {
        self.stages.iter().fold(ranges.to_vec(), |ranges, stage| stage.apply_ranges(&ranges))
    }
}

impl FromIterator<RemapStage> for RemapChain {
    fn from_iter<I: IntoIterator<Item = RemapStage>>(iter: I) -> RemapChain {
        RemapChain { stages: iter.into_iter().collect() }
    }
}

/// Seed list plus the chain of category maps that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub chain: RemapChain,
}

impl Almanac {
    pub fn parse(input: &str) -> Result<Almanac> {
        let header = Regex::new(r"^([a-z]+)-to-([a-z]+) map:$").unwrap();
        let mut blocks = input.trim().split("\n\n");

        let seeds_line = blocks.next().unwrap_or_default();
        let seeds = seeds_line
            .strip_prefix("seeds:")
            .ok_or_else(|| Error::parse(seeds_line))?
            .split_whitespace()
            .map(str::parse)
            .collect::<std::result::Result<Vec<i64>, _>>()?;

        let chain = blocks
            .map(|block| -> Result<RemapStage> {
                let mut lines = block.lines();
                let title = lines.next().unwrap_or_default().trim_end();
                let names = header.captures(title).ok_or_else(|| Error::parse(title))?;
                let triples = lines
                    .map(|line| -> Result<(i64, i64, i64)> {
                        let numbers = line
                            .split_whitespace()
                            .map(str::parse)
                            .collect::<std::result::Result<Vec<i64>, _>>()?;
                        let [destination_start, source_start, length] = numbers[..] else {
                            return Err(Error::parse(line));
                        };
                        Ok((destination_start, source_start, length))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RemapStage::from_triples(&names[1], &names[2], triples))
            })
            .collect::<Result<RemapChain>>()?;

        Ok(Almanac { seeds, chain })
    }

    /// Seeds read pairwise as `start length`.
    pub fn seed_ranges(&self) -> Result<Vec<Range<i64>>> {
        if self.seeds.len() % 2 != 0 {
            return Err(Error::parse(format!("odd number of seed range bounds: {}", self.seeds.len())));
        }
        Ok(self.seeds.chunks(2).map(|pair| pair[0]..pair[0] + pair[1]).collect())
    }
}
