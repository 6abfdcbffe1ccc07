//! Chess piece representation.

use crate::Color;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// Returns the index of this piece type (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if a pawn may promote to this piece type.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen
        )
    }

    /// Returns the letter for this piece type (lowercase).
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece together with its owner, the value held by an occupied board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub color: Color,
    pub piece: Piece,
}

impl ColoredPiece {
    /// Creates a colored piece.
    #[inline]
    pub const fn new(color: Color, piece: Piece) -> Self {
        ColoredPiece { color, piece }
    }

    /// Returns the letter for this piece, uppercase for White.
    pub const fn to_char(self) -> char {
        match self.color {
            Color::White => self.piece.to_char().to_ascii_uppercase(),
            Color::Black => self.piece.to_char(),
        }
    }
}

impl std::fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_index() {
        assert_eq!(Piece::Pawn.index(), 0);
        assert_eq!(Piece::King.index(), 5);
    }

    #[test]
    fn is_promotable() {
        assert!(!Piece::Pawn.is_promotable());
        assert!(Piece::Knight.is_promotable());
        assert!(Piece::Bishop.is_promotable());
        assert!(Piece::Rook.is_promotable());
        assert!(Piece::Queen.is_promotable());
        assert!(!Piece::King.is_promotable());
    }

    #[test]
    fn colored_piece_char() {
        assert_eq!(ColoredPiece::new(Color::White, Piece::Knight).to_char(), 'N');
        assert_eq!(ColoredPiece::new(Color::Black, Piece::Knight).to_char(), 'n');
        assert_eq!(ColoredPiece::new(Color::White, Piece::Pawn).to_char(), 'P');
    }

    #[test]
    fn display() {
        let bn = ColoredPiece::new(Color::Black, Piece::Knight);
        assert_eq!(format!("{}", bn), "Black Knight");
    }
}
