use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Side length of the square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BoardSize {
    Five,
    Seven,
    Nine,
}

impl BoardSize {
    pub fn dimension(&self) -> usize {
        match self {
            BoardSize::Five => 5,
            BoardSize::Seven => 7,
            BoardSize::Nine => 9,
        }
    }

    /// Number of tiles on the board.
    pub fn cells(&self) -> usize {
        self.dimension() * self.dimension()
    }

    pub fn all() -> &'static [BoardSize] {
        &[BoardSize::Five, BoardSize::Seven, BoardSize::Nine]
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.dimension() as u8
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(BoardSize::Five),
            7 => Ok(BoardSize::Seven),
            9 => Ok(BoardSize::Nine),
            other => Err(ParseError::BoardSize(other.to_string())),
        }
    }
}

impl FromStr for BoardSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map_err(|_| ParseError::BoardSize(s.to_string()))
            .and_then(BoardSize::try_from)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension())
    }
}

/// A single movable letter. Its board position is its index in the tile sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub value: char,
}

impl Tile {
    pub fn new(index: usize, value: char) -> Self {
        Tile {
            id: format!("tile-{}", index),
            value,
        }
    }
}
