use rustc_hash::FxHashSet;

use crate::{Error, Part, Result};

/// How many of the numbers on a card are winning numbers.
fn winning_count(line: &str) -> Result<usize> {
    let (_, numbers) = line.split_once(':').ok_or_else(|| Error::parse(line))?;
    let (winning, have) = numbers.split_once('|').ok_or_else(|| Error::parse(line))?;
    let winning = winning.split_whitespace().map(str::parse).collect::<std::result::Result<FxHashSet<u32>, _>>()?;
    let have = have.split_whitespace().map(str::parse).collect::<std::result::Result<Vec<u32>, _>>()?;
    Ok(have.iter().filter(|&n| winning.contains(n)).count())
}

/// One point for the first match, doubled for every further match.
fn points(matches: usize) -> Option<i64> {
    match matches {
        0 => Some(0),
        m => 2i64.checked_pow(u32::try_from(m - 1).ok()?),
    }
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let matches = input.trim().lines().map(winning_count).collect::<Result<Vec<_>>>()?;
    match part {
        Part::One => matches
            .iter()
            .try_fold(0i64, |total, &m| total.checked_add(points(m)?))
            .ok_or_else(|| Error::Overflow("total scratchcard points".into())),
        Part::Two => {
            // every copy of card i wins one copy of each of the next matches[i] cards
            let overflow = || Error::Overflow("scratchcard copies".into());
            let mut copies = vec![1i64; matches.len()];
            for (card, &m) in matches.iter().enumerate() {
                for won in card + 1..(card + 1 + m).min(matches.len()) {
                    copies[won] = copies[won].checked_add(copies[card]).ok_or_else(overflow)?;
                }
            }
            copies.iter().try_fold(0i64, |total, &n| total.checked_add(n)).ok_or_else(overflow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    #[test]
    fn total_points() {
        assert_eq!(solve(Part::One, CARDS).unwrap(), 13);
    }

    #[test]
    fn cascading_copies() {
        assert_eq!(solve(Part::Two, CARDS).unwrap(), 30);
    }

    #[test]
    fn winning_numbers_per_card() {
        let counts = CARDS.lines().map(winning_count).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(counts, vec![4, 2, 2, 1, 0, 0]);
    }

    fn card_with_matches(n: u32) -> String {
        let numbers = (1..=n).map(|x| x.to_string()).collect::<Vec<_>>().join(" ");
        format!("Card 1: {numbers} | {numbers}")
    }

    #[test]
    fn points_up_to_the_largest_answer() {
        assert_eq!(solve(Part::One, &card_with_matches(63)).unwrap(), 1 << 62);
        assert_eq!(points(0), Some(0));
        assert_eq!(points(3), Some(4));
    }

    #[test]
    fn points_beyond_the_largest_answer() {
        for n in [64, 70] {
            let err = solve(Part::One, &card_with_matches(n)).unwrap_err();
            assert!(matches!(err, Error::Overflow(_)));
        }
        assert_eq!(solve(Part::Two, &card_with_matches(70)).unwrap(), 1);
    }

    #[test]
    fn card_without_separator() {
        assert!(matches!(solve(Part::One, "Card 1: 1 2 3"), Err(Error::Parse(_))));
    }
}
