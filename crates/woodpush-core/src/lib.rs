//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`ColoredPiece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is rank 8)
//! - [`Board`] - the 8x8 grid of piece cells
//! - [`Move`] - an immutable one-ply description with piece snapshots

mod board;
mod color;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use mov::{Move, MoveFlag};
pub use piece::{ColoredPiece, Piece};
pub use square::{Square, SquareParseError};
