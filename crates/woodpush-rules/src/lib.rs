//! Chess rules engine.
//!
//! This crate provides full rule enforcement on top of the `woodpush-core`
//! value types:
//! - [`GameState`] - board, turn, logs, and the make/undo protocol
//! - [`CastleRights`] - the four independent castling flags
//! - Legal move generation through the pipeline: pseudo-legal generation,
//!   pin/check analysis, legality filtering
//!
//! # Architecture
//!
//! Legality is computed in three stages. A ray-walking analyzer classifies
//! every line from the king as pinned, checking, or clear; per-piece
//! generators produce pseudo-legal moves restricted by those pins; and the
//! legality filter applies the check state (single check narrows targets,
//! double check leaves only king moves). Moves are executed reversibly:
//! every [`GameState::make_move`] can be retracted by
//! [`GameState::undo_move`], which restores each mutated field, so search
//! clients can replay lines freely.
//!
//! # Example
//!
//! ```
//! use woodpush_rules::GameState;
//!
//! let mut game = GameState::new();
//! let moves = game.valid_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let opening = *moves
//!     .iter()
//!     .find(|m| m.to_algebraic() == "e2e4")
//!     .expect("pawn push is legal");
//! game.make_move(opening, None).unwrap();
//! assert_eq!(game.valid_moves().len(), 20);
//!
//! game.undo_move();
//! game.undo_move(); // undo on an empty log is a safe no-op
//! ```

mod analysis;
mod castling;
mod game;
mod movegen;

pub use castling::CastleRights;
pub use game::{GameError, GameState};
