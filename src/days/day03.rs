use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::grid::{Grid, Pos};
use crate::{Part, Result};

const GEAR: u8 = b'*';

fn is_symbol(cell: u8) -> bool {
    cell != b'.' && !cell.is_ascii_digit()
}

/// Every number in the schematic with the symbol cells touching it.
fn part_numbers(grid: &Grid) -> Vec<(i64, Vec<Pos>)> {
    let mut numbers = Vec::new();
    for (row, cells) in grid.rows().enumerate() {
        let mut col = 0;
        while col < cells.len() {
            if !cells[col].is_ascii_digit() {
                col += 1;
                continue;
            }
            let start = col;
            while col < cells.len() && cells[col].is_ascii_digit() {
                col += 1;
            }
            let number = cells[start..col].iter().fold(0, |n, &d| 10 * n + (d - b'0') as i64);
            let symbols = (start..col)
                .flat_map(|c| grid.surrounding((c, row)))
                .filter(|&pos| grid.get(pos).is_some_and(is_symbol))
                .unique()
                .collect();
            numbers.push((number, symbols));
        }
    }
    numbers
}

pub fn solve(part: Part, input: &str) -> Result<i64> {
    let grid = Grid::parse(input)?;
    let numbers = part_numbers(&grid);
    Ok(match part {
        Part::One => numbers.iter().filter(|(_, symbols)| !symbols.is_empty()).map(|(n, _)| n).sum(),
        Part::Two => {
            let mut gears: FxHashMap<Pos, Vec<i64>> = FxHashMap::default();
            for (n, symbols) in &numbers {
                for &pos in symbols.iter().filter(|&&pos| grid.get(pos) == Some(GEAR)) {
                    gears.entry(pos).or_default().push(*n);
                }
            }
            gears
                .values()
                .filter_map(|ratios| match ratios[..] {
                    [a, b] => Some(a * b),
                    _ => None,
                })
                .sum()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMATIC: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    #[test]
    fn numbers_next_to_symbols() {
        assert_eq!(solve(Part::One, SCHEMATIC).unwrap(), 4361);
    }

    #[test]
    fn gear_ratios() {
        assert_eq!(solve(Part::Two, SCHEMATIC).unwrap(), 467835);
    }

    #[test]
    fn numbers_at_the_right_edge() {
        let grid = Grid::parse("..12\n.#..").unwrap();
        assert_eq!(part_numbers(&grid), vec![(12, vec![(1, 1)])]);
    }
}
