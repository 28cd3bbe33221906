use std::path::{Path, PathBuf};

use aoc2023::{input_path, read_input, solve, Method, Part};
use clap::Parser;
use log::{info, LevelFilter};

/// Solve an Advent of Code 2023 puzzle.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Day of the puzzle
    day: u8,

    /// Part of the daily puzzle; both parts are solved when omitted
    #[arg(value_enum, short, long)]
    part: Option<Part>,

    /// How day 10 counts enclosed tiles
    #[arg(value_enum, short, long, default_value_t = Method::Pick)]
    method: Method,

    /// Read example input number N (`day{DAY}test{N}.in`)
    #[arg(short, long, value_name = "N", conflicts_with = "input")]
    test: Option<u8>,

    /// Read the puzzle input from this file instead of `day{DAY}.in`
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let path = args.input.unwrap_or_else(|| input_path(Path::new("."), args.day, args.test));
    let input = read_input(&path)?;
    let parts = match args.part {
        Some(part) => vec![part],
        None => Part::ALL.to_vec(),
    };

    let time = std::time::Instant::now();
    for part in parts {
        println!("{}", solve(args.day, part, args.method, &input)?);
    }
    info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
