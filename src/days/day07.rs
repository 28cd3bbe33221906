use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::{Error, Part, Result};

const ORDER: &[u8] = b"23456789TJQKA";
const JOKER_ORDER: &[u8] = b"J23456789TQKA";

/// Sizes of the groups of equal cards, largest first. Comparing these lexicographically
/// orders hand types: `[5] > [4, 1] > [3, 2] > [3, 1, 1] > [2, 2, 1] > ...`
type Kind = ArrayVec<u8, 5>;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Hand {
    kind: Kind,
    strengths: [u8; 5],
    bid: i64,
}

impl Hand {
    fn parse(line: &str, part: Part) -> Result<Hand> {
        let (cards, bid) = line.split_once(' ').ok_or_else(|| Error::parse(line))?;
        let order = match part {
            Part::One => ORDER,
            Part::Two => JOKER_ORDER,
        };
        let strengths: [u8; 5] = cards
            .bytes()
            .map(|card| order.iter().position(|&o| o == card).map(|ix| ix as u8))
            .collect::<Option<Vec<_>>>()
            .and_then(|strengths| strengths.try_into().ok())
            .ok_or_else(|| Error::parse(cards))?;

        let mut counts = [0u8; 13];
        for &s in &strengths {
            counts[s as usize] += 1;
        }
        let jokers = match part {
            Part::One => 0,
            Part::Two => std::mem::take(&mut counts[0]),
        };
        let mut kind: Kind = counts.iter().copied().filter(|&c| c > 0).sorted_unstable_by(|a, b| b.cmp(a)).collect();
        match kind.first_mut() {
            Some(largest) => *largest += jokers,
            None => kind.push(jokers),
        }

        Ok(Hand { kind, strengths, bid: bid.trim().parse()? })
    }
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let mut hands = input.trim().lines().map(|line| Hand::parse(line, part)).collect::<Result<Vec<_>>>()?;
    hands.sort_unstable();
    Ok(hands.iter().zip(1..).map(|(hand, rank)| rank * hand.bid).sum())
}
