use crate::{Error, Part, Result};

const BOXES: usize = 256;

/// The HASH algorithm: `(h + byte) * 17 mod 256` over every byte.
pub fn hash(s: &str) -> usize {
    s.bytes().fold(0, |h, b| (h + b as usize) * 17 % BOXES)
}

/// Lenses per box in slot order, as `(label, focal length)`.
fn arrange<'a>(steps: impl Iterator<Item = &'a str>) -> Result<Vec<Vec<(&'a str, i64)>>> {
    let mut boxes = vec![Vec::new(); BOXES];
    for step in steps {
        if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label)].retain(|&(l, _)| l != label);
        } else if let Some((label, focal)) = step.split_once('=') {
            let focal = focal.parse()?;
            let lenses: &mut Vec<(&str, i64)> = &mut boxes[hash(label)];
            match lenses.iter_mut().find(|(l, _)| *l == label) {
                Some(lens) => lens.1 = focal,
                None => lenses.push((label, focal)),
            }
        } else {
            return Err(Error::parse(step));
        }
    }
    Ok(boxes)
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let steps = input.trim().split(',').map(str::trim);
    Ok(match part {
        Part::One => steps.map(|step| hash(step) as i64).sum(),
        Part::Two => arrange(steps)?
            .iter()
            .zip(1..)
            .flat_map(|(lenses, b)| lenses.iter().zip(1..).map(move |(&(_, focal), slot)| b * slot * focal))
            .sum(),
    })
}
