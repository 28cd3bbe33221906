use regex::Regex;

use crate::{Error, Part, Result};

/// Cubes of each colour in one draw, or the most seen in a whole game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cubes {
    red: i64,
    green: i64,
    blue: i64,
}

const BAG: Cubes = Cubes { red: 12, green: 13, blue: 14 };

impl Cubes {
    fn fits_in(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(self) -> i64 {
        self.red * self.green * self.blue
    }

    fn parse(draw: &str) -> Result<Cubes> {
        let mut cubes = Cubes::default();
        for item in draw.split(',') {
            let (count, colour) = item.trim().split_once(' ').ok_or_else(|| Error::parse(item))?;
            let count = count.parse()?;
            match colour {
                "red" => cubes.red = count,
                "green" => cubes.green = count,
                "blue" => cubes.blue = count,
                _ => return Err(Error::parse(item)),
            }
        }
        Ok(cubes)
    }
}

struct Game {
    id: i64,
    draws: Vec<Cubes>,
}

impl Game {
    fn minimal_bag(&self) -> Cubes {
        self.draws.iter().fold(Cubes::default(), |bag, &draw| bag.max(draw))
    }
}

fn parse_games(input: &str) -> Result<Vec<Game>> {
    let header = Regex::new(r"^Game (\d+): (.*)$").unwrap();
    input
        .trim()
        .lines()
        .map(|line| -> Result<Game> {
            let caps = header.captures(line.trim_end()).ok_or_else(|| Error::parse(line))?;
            let draws = caps[2].split(';').map(Cubes::parse).collect::<Result<_>>()?;
            Ok(Game { id: caps[1].parse()?, draws })
        })
        .collect()
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let games = parse_games(input)?;
    Ok(match part {
        Part::One => games
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_in(BAG)))
            .map(|game| game.id)
            .sum(),
        Part::Two => games.iter().map(|game| game.minimal_bag().power()).sum(),
    })
}
