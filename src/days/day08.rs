use log::debug;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::{Error, Part, Result};

fn gcd(a: i64, b: i64) -> i64 {if b == 0 {a} else {gcd(b, a % b)}}
fn lcm(a: i64, b: i64) -> i64 {a / gcd(a, b) * b}

#[derive(Debug)]
struct Network<'a> {
    turns: &'a [u8],
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Result<Network<'a>> {
        let node = Regex::new(r"^(\w{3}) = \((\w{3}), (\w{3})\)$").unwrap();
        let mut lines = input.trim().lines();
        let turns = lines.next().unwrap_or_default().trim_end();
        if turns.is_empty() || !turns.bytes().all(|turn| turn == b'L' || turn == b'R') {
            return Err(Error::parse(turns));
        }

        let nodes = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| -> Result<(&'a str, (&'a str, &'a str))> {
                let caps = node.captures(line.trim_end()).ok_or_else(|| Error::parse(line))?;
                let (_, [name, left, right]) = caps.extract();
                Ok((name, (left, right)))
            })
            .collect::<Result<FxHashMap<_, _>>>()?;

        Ok(Network { turns: turns.as_bytes(), nodes })
    }

    /// Steps from `start` until `arrived` holds, turning as the instructions say, repeating them
    /// as often as needed.
    ///
    /// A walk that has not arrived after one step per `(node, turn)` state has entered a loop
    /// and never will.
    fn steps(&self, start: &'a str, arrived: impl Fn(&str) -> bool) -> Result<i64> {
        let states = self.nodes.len() * self.turns.len();
        let mut node = start;
        for (step, &turn) in (1..).zip(self.turns.iter().cycle()).take(states) {
            let &(left, right) = self.nodes.get(node).ok_or_else(|| Error::parse(node))?;
            node = if turn == b'L' {left} else {right};
            if arrived(node) {
                return Ok(step);
            }
        }
        Err(Error::NeverArrives(start.to_owned()))
    }
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let network = Network::parse(input)?;
    match part {
        Part::One => network.steps("AAA", |node| node == "ZZZ"),
        Part::Two => {
            // every ghost's walk is assumed to loop back to its end node with the same period
            let starts = network.nodes.keys().filter(|name| name.ends_with('A')).collect::<Vec<_>>();
            if starts.is_empty() {
                return Err(Error::parse("no ghost start nodes"));
            }
            let mut total = 1;
            for &start in starts {
                let steps = network.steps(start, |node| node.ends_with('Z'))?;
                debug!("{start} reaches an end node after {steps} steps");
                total = lcm(total, steps);
            }
            Ok(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_route() {
        let input = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)";
        assert_eq!(solve(Part::One, input).unwrap(), 2);
    }

    #[test]
    fn repeated_instructions() {
        let input = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)";
        assert_eq!(solve(Part::One, input).unwrap(), 6);
    }

    #[test]
    fn ghosts_walk_together() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)";
        assert_eq!(solve(Part::Two, input).unwrap(), 6);
    }

    #[test]
    fn lcm_of_step_counts() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(1, 7), 7);
        assert_eq!(gcd(12, 18), 6);
    }

    #[test]
    fn unreachable_end_node() {
        let err = solve(Part::One, "L\n\nAAA = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)").unwrap_err();
        assert!(matches!(err, Error::NeverArrives(ref start) if start == "AAA"));

        let ghosts = "LR\n\n11A = (11B, 11B)\n11B = (11A, 11A)\n11Z = (11Z, 11Z)";
        assert!(matches!(solve(Part::Two, ghosts), Err(Error::NeverArrives(_))));
    }

    #[test]
    fn arrival_within_the_state_bound() {
        // five nodes and one turn: the end node is four steps away
        let input = "R\n\nAAA = (AAA, BBB)\nBBB = (BBB, CCC)\nCCC = (CCC, DDD)\nDDD = (DDD, ZZZ)\nZZZ = (ZZZ, ZZZ)";
        assert_eq!(solve(Part::One, input).unwrap(), 4);
    }

    #[test]
    fn no_ghosts() {
        assert!(matches!(solve(Part::Two, "L\n\nBBB = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)"), Err(Error::Parse(_))));
    }

    #[test]
    fn malformed_network() {
        assert!(matches!(solve(Part::One, "LX\n\nAAA = (AAA, AAA)"), Err(Error::Parse(_))));
        assert!(matches!(solve(Part::One, "L\n\nAAA -> BBB"), Err(Error::Parse(_))));
        assert!(matches!(solve(Part::One, "L\n\nAAA = (BBB, BBB)"), Err(Error::Parse(_))));
    }
}
