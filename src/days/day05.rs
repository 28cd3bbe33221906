use log::debug;

use crate::remap::Almanac;
use crate::{Error, Part, Result};

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let almanac = Almanac::parse(input)?;
    let lowest = match part {
        Part::One => almanac.seeds.iter().map(|&seed| almanac.chain.apply(seed)).min(),
        Part::Two => {
            let locations = almanac.chain.apply_ranges(&almanac.seed_ranges()?);
            debug!("seed ranges end up in {} location ranges", locations.len());
            locations.iter().map(|range| range.start).min()
        }
    };
    lowest.ok_or_else(|| Error::parse("almanac lists no seeds"))
}
