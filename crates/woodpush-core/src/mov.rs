//! Move representation.

use crate::{Board, ColoredPiece, Piece, Square};
use std::fmt;

/// Marks the special move kinds that need extra handling during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    /// Ordinary move or capture.
    Normal,
    /// En passant capture; the captured pawn sits beside the destination.
    EnPassant,
    /// Castling; the move describes the king's two-square step.
    Castle,
}

/// An immutable description of one ply.
///
/// The moved and captured pieces are snapshotted from the board at creation
/// time. The board cells change as the game continues, so the snapshot is
/// what makes undo possible after arbitrary replay.
///
/// Equality is structural: two moves with the same endpoints, snapshots and
/// flag compare equal regardless of where they were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// The piece standing on `from` when the move was created.
    pub moved: ColoredPiece,
    /// The piece this move captures, if any.
    ///
    /// For en passant this is the pawn beside the destination, not the
    /// (empty) destination cell itself.
    pub captured: Option<ColoredPiece>,
    /// Special-move marker.
    pub flag: MoveFlag,
}

impl Move {
    /// Creates a move, snapshotting the moved and captured pieces from the board.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty; generators only create moves for occupied
    /// origin squares.
    pub fn new(from: Square, to: Square, board: &Board, flag: MoveFlag) -> Self {
        let moved = board
            .piece_at(from)
            .expect("move origin must be occupied");
        let captured = match flag {
            MoveFlag::EnPassant => board.piece_at(Square::at(from.row(), to.col())),
            _ => board.piece_at(to),
        };
        Move {
            from,
            to,
            moved,
            captured,
            flag,
        }
    }

    /// Returns true if this move promotes a pawn.
    ///
    /// Promotion is derived, not flagged: a pawn arriving on the farthest
    /// row from its side promotes. Which piece it becomes is an input to
    /// move execution, not part of the move itself.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.moved.piece == Piece::Pawn && self.to.row() == self.moved.color.promotion_row()
    }

    /// Returns true if this is a pawn's initial two-square advance.
    #[inline]
    pub fn is_double_advance(&self) -> bool {
        self.moved.piece == Piece::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Returns two-square coordinate notation, e.g. "e2e4".
    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn snapshots_moved_and_captured() {
        let mut board = Board::empty();
        board.place(sq("e4"), ColoredPiece::new(Color::White, Piece::Rook));
        board.place(sq("e8"), ColoredPiece::new(Color::Black, Piece::Knight));

        let quiet = Move::new(sq("e4"), sq("e5"), &board, MoveFlag::Normal);
        assert_eq!(quiet.moved, ColoredPiece::new(Color::White, Piece::Rook));
        assert_eq!(quiet.captured, None);

        let capture = Move::new(sq("e4"), sq("e8"), &board, MoveFlag::Normal);
        assert_eq!(
            capture.captured,
            Some(ColoredPiece::new(Color::Black, Piece::Knight))
        );
    }

    #[test]
    fn en_passant_captures_displaced_pawn() {
        let mut board = Board::empty();
        board.place(sq("e5"), ColoredPiece::new(Color::White, Piece::Pawn));
        board.place(sq("d5"), ColoredPiece::new(Color::Black, Piece::Pawn));

        let m = Move::new(sq("e5"), sq("d6"), &board, MoveFlag::EnPassant);
        assert_eq!(m.captured, Some(ColoredPiece::new(Color::Black, Piece::Pawn)));
        assert_eq!(board.piece_at(sq("d6")), None);
    }

    #[test]
    fn promotion_is_derived() {
        let mut board = Board::empty();
        board.place(sq("a7"), ColoredPiece::new(Color::White, Piece::Pawn));
        board.place(sq("a2"), ColoredPiece::new(Color::Black, Piece::Pawn));
        board.place(sq("h7"), ColoredPiece::new(Color::White, Piece::Rook));

        assert!(Move::new(sq("a7"), sq("a8"), &board, MoveFlag::Normal).is_promotion());
        assert!(Move::new(sq("a2"), sq("a1"), &board, MoveFlag::Normal).is_promotion());
        // A rook reaching the back row does not promote.
        assert!(!Move::new(sq("h7"), sq("h8"), &board, MoveFlag::Normal).is_promotion());
        // A pawn move that stops short does not promote.
        assert!(!Move::new(sq("a2"), sq("a3"), &board, MoveFlag::Normal).is_promotion());
    }

    #[test]
    fn double_advance() {
        let board = Board::standard();
        assert!(Move::new(sq("e2"), sq("e4"), &board, MoveFlag::Normal).is_double_advance());
        assert!(!Move::new(sq("e2"), sq("e3"), &board, MoveFlag::Normal).is_double_advance());
        assert!(!Move::new(sq("g1"), sq("f3"), &board, MoveFlag::Normal).is_double_advance());
    }

    #[test]
    fn algebraic_notation() {
        let board = Board::standard();
        let m = Move::new(sq("e2"), sq("e4"), &board, MoveFlag::Normal);
        assert_eq!(m.to_algebraic(), "e2e4");
        assert_eq!(format!("{}", m), "e2e4");
    }

    #[test]
    fn structural_equality() {
        let board = Board::standard();
        let a = Move::new(sq("g1"), sq("f3"), &board, MoveFlag::Normal);
        let b = Move::new(sq("g1"), sq("f3"), &board, MoveFlag::Normal);
        let c = Move::new(sq("b1"), sq("c3"), &board, MoveFlag::Normal);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
