use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot parse {0:?}")]
    Parse(String),

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error("grid row {row} is {found} cells wide, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("no start tile 'S' in the maze")]
    MissingStart,

    #[error("start tile at ({col}, {row}) links to {links} neighbours, expected 2")]
    UnresolvedStart { col: usize, row: usize, links: usize },

    #[error("no valid move from ({col}, {row})")]
    NoValidMove { col: usize, row: usize },

    #[error("no reflection found in a {width}x{height} pattern")]
    NoReflectionFound { width: usize, height: usize },

    #[error("walk from {0} never reaches an end node")]
    NeverArrives(String),

    #[error("{0} does not fit in a 64-bit answer")]
    Overflow(String),

    #[error("no solution for day {0}")]
    UnknownDay(u8),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(what: impl Into<String>) -> Self {
        Error::Parse(what.into())
    }
}
