use crate::pipes::PipeMaze;
use crate::{Method, Part, Result};

pub fn solve(part: Part, method: Method, input: &str) -> Result<i64> {
    let maze = PipeMaze::parse(input)?;
    let cycle = maze.walk()?;
    Ok(match (part, method) {
        (Part::One, _) => cycle.farthest() as i64,
        (Part::Two, Method::Pick) => cycle.interior_points(),
        (Part::Two, Method::RayCast) => cycle.interior_points_scanned(maze.grid()),
    })
}
