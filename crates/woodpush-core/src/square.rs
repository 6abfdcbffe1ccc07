//! Board square representation.
//!
//! Squares carry row/column coordinates matching the board grid: row 0 is
//! rank 8 (black's back row), row 7 is rank 1, column 0 is file `a`.

use std::fmt;
use thiserror::Error;

/// Error returned when parsing algebraic notation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    /// Input was not exactly two characters.
    #[error("expected two characters, got {0:?}")]
    BadLength(String),
    /// File character outside `a`-`h`.
    #[error("invalid file character {0:?}")]
    BadFile(char),
    /// Rank character outside `1`-`8`.
    #[error("invalid rank character {0:?}")]
    BadRank(char),
}

/// A square on the chess board, addressed by row and column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, returning `None` if either coordinate is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from coordinates known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 8 or more; callers must bound-check
    /// first. Use [`Square::new`] or [`Square::offset`] for untrusted input.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Returns the square displaced by the given row/column deltas, or
    /// `None` if it falls off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses algebraic notation (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, SquareParseError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                if !('a'..='h').contains(&file) {
                    return Err(SquareParseError::BadFile(file));
                }
                if !('1'..='8').contains(&rank) {
                    return Err(SquareParseError::BadRank(rank));
                }
                let col = file as u8 - b'a';
                let row = b'8' - rank as u8;
                Ok(Square { row, col })
            }
            _ => Err(SquareParseError::BadLength(s.to_string())),
        }
    }

    /// Returns the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 = file `a`, 7 = file `h`).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the file letter (`a`-`h`).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit (`1`-`8`).
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
