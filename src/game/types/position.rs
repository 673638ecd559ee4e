//! Board positions and algebraic coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::CoordError;

/// A cell on the board as (row, column). Row 0 is the top row (rank 8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position(pub usize, pub usize); // (row, column)

impl Position {
    /// Get the row (0-7 on a chess board, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7 on a chess board, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0, self.1)
    }
}

/// An algebraic board coordinate: file 'a'..='h' followed by rank 1..=8.
///
/// This is the external representation of a square. Conversion to the
/// internal [`Position`] follows `row = 8 - rank`, `column = file - 'a'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    file: char,
    rank: u8,
}

impl Coord {
    /// Create a coordinate with range checking
    pub fn new(file: char, rank: u8) -> Result<Self, CoordError> {
        if !('a'..='h').contains(&file) {
            return Err(CoordError::FileOutOfRange { file });
        }
        if !(1..=8).contains(&rank) {
            return Err(CoordError::RankOutOfRange { rank });
        }
        Ok(Coord { file, rank })
    }

    /// Get the file letter ('a'-'h')
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        self.file
    }

    /// Get the rank digit (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Convert to the internal (row, column) position
    #[inline]
    #[must_use]
    pub fn to_position(self) -> Position {
        Position(8 - self.rank as usize, self.file as usize - 'a' as usize)
    }

    /// Convert back from an internal position.
    ///
    /// The position must lie within the 8x8 chess area.
    #[must_use]
    pub fn from_position(pos: Position) -> Self {
        debug_assert!(pos.row() < 8 && pos.column() < 8);
        Coord {
            file: (b'a' + pos.column() as u8) as char,
            rank: 8 - pos.row() as u8,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(CoordError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => chars[0],
            _ => {
                return Err(CoordError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            '1'..='8' => chars[1] as u8 - b'0',
            _ => {
                return Err(CoordError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Coord { file, rank })
    }
}
