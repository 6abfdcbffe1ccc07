//! The 8x8 board grid.

use crate::{Color, ColoredPiece, Piece, Square};
use std::fmt;

/// Back-row piece order shared by both colors.
const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid of piece cells.
///
/// Pure data: the board offers indexed access and cell writes, nothing more.
/// During play it is mutated only by the game state's make/undo protocol;
/// [`Board::place`] and [`Board::clear`] exist for setting up custom
/// positions before play starts.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            board.place(Square::at(0, col), ColoredPiece::new(Color::Black, piece));
            board.place(Square::at(1, col), ColoredPiece::new(Color::Black, Piece::Pawn));
            board.place(Square::at(6, col), ColoredPiece::new(Color::White, Piece::Pawn));
            board.place(Square::at(7, col), ColoredPiece::new(Color::White, piece));
        }
        board
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Writes a cell, occupied or empty.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<ColoredPiece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Puts a piece on a square.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: ColoredPiece) {
        self.set(sq, Some(piece));
    }

    /// Empties a square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set(sq, None);
    }

    /// Returns the grid read-only, row 0 first (rank 8), for rendering.
    #[inline]
    pub fn rows(&self) -> &[[Option<ColoredPiece>; 8]; 8] {
        &self.cells
    }

    /// Iterates over all occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::at(row as u8, col as u8), piece))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, " {}", piece.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}
