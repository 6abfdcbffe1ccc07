//! Game state orchestration: legality filtering and reversible execution.

use crate::analysis::{self, Check, Pin};
use crate::castling::CastleRights;
use crate::movegen;
use thiserror::Error;
use woodpush_core::{Board, Color, ColoredPiece, Move, MoveFlag, Piece, Square};

/// Error type for game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The promotion choice was not a queen, rook, bishop or knight.
    #[error("cannot promote a pawn to a {0}")]
    InvalidPromotion(Piece),
    /// A custom position is missing one of the kings.
    #[error("position has no {0} king")]
    MissingKing(Color),
}

/// The full state of one chess game.
///
/// Owns the board, the side to move, the king-location cache, the move and
/// castling-rights logs, and the terminal flags. [`valid_moves`] is the
/// single authoritative legality computation; [`make_move`] and
/// [`undo_move`] are exact inverses, so a search client may replay and
/// retract lines arbitrarily on the same instance.
///
/// Single-threaded by design: one logical game session mutates a given
/// `GameState` at a time, and every operation runs to completion.
///
/// [`valid_moves`]: GameState::valid_moves
/// [`make_move`]: GameState::make_move
/// [`undo_move`]: GameState::undo_move
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    /// Cached king coordinates, indexed by `Color::index`. Always equal to
    /// the actual king cells after any completed make or undo.
    king_square: [Square; 2],
    move_log: Vec<Move>,
    castle_rights: CastleRights,
    /// One snapshot more than moves played; the extra is the pre-game state.
    castle_rights_log: Vec<CastleRights>,
    /// Valid only for the ply after a two-square pawn advance.
    en_passant_target: Option<Square>,
    /// Mirrors the rights log so undo restores the exact prior target.
    en_passant_log: Vec<Option<Square>>,
    in_check: bool,
    pins: Vec<Pin>,
    checks: Vec<Check>,
    checkmate: bool,
    stalemate: bool,
}

impl GameState {
    /// Creates a game from the standard starting position, white to move,
    /// full castling rights.
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Color::White, CastleRights::ALL, None)
            .expect("standard board has both kings")
    }

    /// Creates a game from a custom position.
    ///
    /// The board is scanned for the two kings to seed the location cache;
    /// a position without both kings is rejected.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant_target: Option<Square>,
    ) -> Result<Self, GameError> {
        let mut kings: [Option<Square>; 2] = [None; 2];
        for (sq, piece) in board.pieces() {
            if piece.piece == Piece::King {
                kings[piece.color.index()] = Some(sq);
            }
        }
        let white = kings[Color::White.index()].ok_or(GameError::MissingKing(Color::White))?;
        let black = kings[Color::Black.index()].ok_or(GameError::MissingKing(Color::Black))?;

        Ok(GameState {
            board,
            side_to_move,
            king_square: [white, black],
            move_log: Vec::new(),
            castle_rights,
            castle_rights_log: vec![castle_rights],
            en_passant_target,
            en_passant_log: vec![en_passant_target],
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            checkmate: false,
            stalemate: false,
        })
    }

    /// Computes every legal move for the side to move.
    ///
    /// This is the one operation that derives check, pin and terminal state:
    /// `in_check`, `is_checkmate` and `is_stalemate` are recomputed fresh on
    /// every call. An empty result means checkmate when in check, stalemate
    /// otherwise.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let side = self.side_to_move;
        let king = self.king_square[side.index()];
        let safety = analysis::analyze(&self.board, king, side);
        self.in_check = safety.in_check;
        self.pins = safety.pins;
        self.checks = safety.checks;

        let moves = if !self.in_check {
            let mut working_pins = self.pins.clone();
            let mut moves = movegen::pseudo_legal_moves(
                &self.board,
                side,
                &mut working_pins,
                self.en_passant_target,
            );
            movegen::castle_moves(&self.board, side, king, self.castle_rights, &mut moves);
            moves
        } else if self.checks.len() == 1 {
            // Single check: a non-king move must land on the checking ray
            // (or the checker itself); king moves filter themselves.
            let mut working_pins = self.pins.clone();
            let mut moves = movegen::pseudo_legal_moves(
                &self.board,
                side,
                &mut working_pins,
                self.en_passant_target,
            );
            let resolution = self.check_resolution_squares(king);
            moves.retain(|m| m.moved.piece == Piece::King || resolution.contains(&m.to));
            moves
        } else {
            // Double check: only the king may move.
            let mut moves = Vec::new();
            movegen::king_moves(&self.board, king, side, &mut moves);
            moves
        };

        self.checkmate = moves.is_empty() && self.in_check;
        self.stalemate = moves.is_empty() && !self.in_check;
        moves
    }

    /// The squares that resolve the single check on `king`: just the
    /// checker's square for a knight, otherwise the whole ray from the king
    /// up to and including the checker.
    fn check_resolution_squares(&self, king: Square) -> Vec<Square> {
        let check = self.checks[0];
        if self
            .board
            .piece_at(check.square)
            .map_or(false, |p| p.piece == Piece::Knight)
        {
            return vec![check.square];
        }
        let (dr, dc) = check.direction;
        let mut squares = Vec::new();
        let mut walk = king.offset(dr, dc);
        while let Some(sq) = walk {
            squares.push(sq);
            if sq == check.square {
                break;
            }
            walk = sq.offset(dr, dc);
        }
        squares
    }

    /// Executes a move produced by [`valid_moves`](GameState::valid_moves).
    ///
    /// `promotion` is consulted only when the move promotes; `None` defaults
    /// to a queen. The engine never prompts for the choice - it is the
    /// caller's decision, supplied up front.
    pub fn make_move(&mut self, mv: Move, promotion: Option<Piece>) -> Result<(), GameError> {
        let placed = if mv.is_promotion() {
            let choice = promotion.unwrap_or(Piece::Queen);
            if !choice.is_promotable() {
                return Err(GameError::InvalidPromotion(choice));
            }
            ColoredPiece::new(mv.moved.color, choice)
        } else {
            mv.moved
        };

        self.board.clear(mv.from);
        self.board.place(mv.to, placed);

        if mv.moved.piece == Piece::King {
            self.king_square[mv.moved.color.index()] = mv.to;
        }

        if mv.flag == MoveFlag::EnPassant {
            // The captured pawn sits beside the destination, not on it.
            self.board.clear(Square::at(mv.from.row(), mv.to.col()));
        }

        if mv.flag == MoveFlag::Castle {
            let (rook_from, rook_to) = Self::castle_rook_squares(&mv);
            let rook = self.board.piece_at(rook_from);
            self.board.set(rook_to, rook);
            self.board.clear(rook_from);
        }

        self.en_passant_target = if mv.is_double_advance() {
            Square::new((mv.from.row() + mv.to.row()) / 2, mv.from.col())
        } else {
            None
        };

        self.update_castle_rights(&mv);
        self.move_log.push(mv);
        self.castle_rights_log.push(self.castle_rights);
        self.en_passant_log.push(self.en_passant_target);
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Retracts the last move; a no-op if no move has been made.
    ///
    /// Exact inverse of [`make_move`](GameState::make_move) for every field
    /// it touches, including the king cache and both snapshot logs.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };

        self.board.place(mv.from, mv.moved);
        if mv.flag == MoveFlag::EnPassant {
            self.board.clear(mv.to);
            self.board
                .set(Square::at(mv.from.row(), mv.to.col()), mv.captured);
        } else {
            self.board.set(mv.to, mv.captured);
        }

        if mv.moved.piece == Piece::King {
            self.king_square[mv.moved.color.index()] = mv.from;
        }

        if mv.flag == MoveFlag::Castle {
            let (rook_from, rook_to) = Self::castle_rook_squares(&mv);
            let rook = self.board.piece_at(rook_to);
            self.board.set(rook_from, rook);
            self.board.clear(rook_to);
        }

        self.castle_rights_log.pop();
        self.castle_rights = *self
            .castle_rights_log
            .last()
            .expect("rights log always holds the pre-game snapshot");
        self.en_passant_log.pop();
        self.en_passant_target = *self
            .en_passant_log
            .last()
            .expect("en passant log always holds the pre-game entry");

        self.side_to_move = self.side_to_move.opposite();
        self.checkmate = false;
        self.stalemate = false;
    }

    /// The rook's corner and landing square for a castle move.
    fn castle_rook_squares(mv: &Move) -> (Square, Square) {
        if mv.to.col() > mv.from.col() {
            (Square::at(mv.to.row(), 7), Square::at(mv.to.row(), mv.to.col() - 1))
        } else {
            (Square::at(mv.to.row(), 0), Square::at(mv.to.row(), mv.to.col() + 1))
        }
    }

    /// Rights lapse when a king moves, when a rook leaves its original
    /// corner, or when a rook is captured standing on it.
    fn update_castle_rights(&mut self, mv: &Move) {
        if mv.moved.piece == Piece::King {
            self.castle_rights.revoke_both(mv.moved.color);
        }
        if mv.moved.piece == Piece::Rook && mv.from.row() == mv.moved.color.back_row() {
            if mv.from.col() == 0 {
                self.castle_rights.revoke_queenside(mv.moved.color);
            } else if mv.from.col() == 7 {
                self.castle_rights.revoke_kingside(mv.moved.color);
            }
        }
        if let Some(captured) = mv.captured {
            if captured.piece == Piece::Rook && mv.to.row() == captured.color.back_row() {
                if mv.to.col() == 0 {
                    self.castle_rights.revoke_queenside(captured.color);
                } else if mv.to.col() == 7 {
                    self.castle_rights.revoke_kingside(captured.color);
                }
            }
        }
    }

    /// Returns the board read-only, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the cached location of a king.
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    /// Returns true if the side to move was in check at the last
    /// [`valid_moves`](GameState::valid_moves) computation.
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Returns true if the last legality computation found checkmate.
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Returns true if the last legality computation found stalemate.
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Returns the moves played so far, oldest first.
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Returns the current castling rights.
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// Returns the square a pawn could capture onto en passant this ply.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
