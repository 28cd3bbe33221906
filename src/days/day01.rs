use regex::Regex;

use crate::{Error, Part, Result};

const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

fn digit_value(token: &str) -> Option<i64> {
    match token.as_bytes() {
        [d @ b'0'..=b'9'] => Some((d - b'0') as i64),
        _ => WORDS.iter().position(|&word| word == token).map(|ix| ix as i64 + 1),
    }
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    // anchored so that overlapping words such as "eightwo" yield both digits
    let pattern = match part {
        Part::One => Regex::new(r"^[0-9]").unwrap(),
        Part::Two => Regex::new(&format!(r"^(?:[0-9]|{})", WORDS.join("|"))).unwrap(),
    };

    input
        .trim()
        .lines()
        .map(|line| -> Result<i64> {
            let digits = (0..line.len())
                .filter_map(|ix| line.get(ix..))
                .filter_map(|rest| pattern.find(rest))
                .map(|m| digit_value(m.as_str()).ok_or_else(|| Error::parse(m.as_str())))
                .collect::<Result<Vec<_>>>()?;
            match (digits.first(), digits.last()) {
                (Some(first), Some(last)) => Ok(10 * first + last),
                _ => Err(Error::parse(line)),
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        let input = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
        assert_eq!(solve(Part::One, input).unwrap(), 142);
    }

    #[test]
    fn spelled_digits() {
        let input = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen";
        assert_eq!(solve(Part::Two, input).unwrap(), 281);
    }

    #[test]
    fn overlapping_words_count_twice() {
        assert_eq!(solve(Part::Two, "eightwo").unwrap(), 82);
        assert_eq!(solve(Part::One, "eightwo7").unwrap(), 77);
    }

    #[test]
    fn line_without_digits() {
        assert!(matches!(solve(Part::One, "abc"), Err(Error::Parse(_))));
        assert!(matches!(solve(Part::Two, "abc"), Err(Error::Parse(_))));
    }

    #[test]
    fn only_ascii_digits_count() {
        assert!(matches!(solve(Part::One, "a\u{0663}b"), Err(Error::Parse(_))));
        assert_eq!(solve(Part::One, "\u{0663}7x\u{0663}").unwrap(), 77);
        assert_eq!(solve(Part::Two, "\u{0663}one").unwrap(), 11);
    }

    #[test]
    fn token_values() {
        assert_eq!(digit_value("7"), Some(7));
        assert_eq!(digit_value("eight"), Some(8));
        assert_eq!(digit_value("\u{0663}"), None);
    }
}
