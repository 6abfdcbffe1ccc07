//! Pseudo-legal move generation.
//!
//! One generation path per piece type, dispatched through a single `match`.
//! Generators consult the analyzer's pin results: each piece looks itself up
//! in the working pin list (consuming the entry - a piece sits on at most
//! one pin ray) and restricts its moves to the pin axis. King destinations
//! are vetted on the spot by probing the analyzer at the target square.

use crate::analysis::{self, Pin, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};
use crate::CastleRights;
use woodpush_core::{Board, Color, Move, MoveFlag, Piece, Square};

/// Generates every pseudo-legal move for `side`.
///
/// `pins` is a working list from [`analysis::analyze`]; entries are consumed
/// as their pieces generate. Check constraints are not applied here - that
/// is the legality filter's job.
pub(crate) fn pseudo_legal_moves(
    board: &Board,
    side: Color,
    pins: &mut Vec<Pin>,
    en_passant: Option<Square>,
) -> Vec<Move> {
    let mut moves = Vec::new();
    for (sq, piece) in board.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.piece {
            Piece::Pawn => pawn_moves(board, sq, side, pins, en_passant, &mut moves),
            Piece::Knight => knight_moves(board, sq, side, pins, &mut moves),
            Piece::Bishop => {
                let pin = take_pin(pins, sq);
                ray_moves(board, sq, side, &DIAGONAL, pin, &mut moves);
            }
            Piece::Rook => {
                let pin = take_pin(pins, sq);
                ray_moves(board, sq, side, &ORTHOGONAL, pin, &mut moves);
            }
            Piece::Queen => {
                let pin = take_pin(pins, sq);
                ray_moves(board, sq, side, &ORTHOGONAL, pin, &mut moves);
                ray_moves(board, sq, side, &DIAGONAL, pin, &mut moves);
            }
            Piece::King => king_moves(board, sq, side, &mut moves),
        }
    }
    moves
}

/// Removes and returns this piece's pin axis, if the analyzer flagged one.
fn take_pin(pins: &mut Vec<Pin>, sq: Square) -> Option<(i8, i8)> {
    let idx = pins.iter().position(|p| p.square == sq)?;
    Some(pins.swap_remove(idx).direction)
}

/// A pinned piece may only move along the pin axis, in either sense.
#[inline]
fn pin_allows(pin: Option<(i8, i8)>, direction: (i8, i8)) -> bool {
    match pin {
        None => true,
        Some(axis) => axis == direction || axis == (-direction.0, -direction.1),
    }
}

fn pawn_moves(
    board: &Board,
    sq: Square,
    side: Color,
    pins: &mut Vec<Pin>,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let pin = take_pin(pins, sq);
    let forward = side.row_delta();

    if let Some(one) = sq.offset(forward, 0) {
        if board.piece_at(one).is_none() && pin_allows(pin, (forward, 0)) {
            moves.push(Move::new(sq, one, board, MoveFlag::Normal));
            // Double advance needs both cells empty and the starting row.
            if sq.row() == side.start_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(sq, two, board, MoveFlag::Normal));
                    }
                }
            }
        }
    }

    for dc in [-1i8, 1] {
        let Some(dest) = sq.offset(forward, dc) else {
            continue;
        };
        if !pin_allows(pin, (forward, dc)) {
            continue;
        }
        match board.piece_at(dest) {
            Some(p) if p.color != side => {
                moves.push(Move::new(sq, dest, board, MoveFlag::Normal));
            }
            None if en_passant == Some(dest) => {
                moves.push(Move::new(sq, dest, board, MoveFlag::EnPassant));
            }
            _ => {}
        }
    }
}

fn knight_moves(
    board: &Board,
    sq: Square,
    side: Color,
    pins: &mut Vec<Pin>,
    moves: &mut Vec<Move>,
) {
    // A knight can never stay on a ray axis, so a pinned knight is frozen.
    if take_pin(pins, sq).is_some() {
        return;
    }
    for &(dr, dc) in &KNIGHT_JUMPS {
        let Some(dest) = sq.offset(dr, dc) else {
            continue;
        };
        if board.piece_at(dest).map_or(true, |p| p.color != side) {
            moves.push(Move::new(sq, dest, board, MoveFlag::Normal));
        }
    }
}

/// Walks each direction until blocked, including the blocker if capturable.
fn ray_moves(
    board: &Board,
    sq: Square,
    side: Color,
    directions: &[(i8, i8)],
    pin: Option<(i8, i8)>,
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        if !pin_allows(pin, (dr, dc)) {
            continue;
        }
        let mut walk = sq.offset(dr, dc);
        while let Some(dest) = walk {
            match board.piece_at(dest) {
                None => moves.push(Move::new(sq, dest, board, MoveFlag::Normal)),
                Some(p) => {
                    if p.color != side {
                        moves.push(Move::new(sq, dest, board, MoveFlag::Normal));
                    }
                    break;
                }
            }
            walk = dest.offset(dr, dc);
        }
    }
}

/// Generates the king's single-step moves.
///
/// Each candidate destination is probed with the analyzer as if the king
/// stood there; the analyzer treats the origin cell as vacated, so no board
/// or cache mutation is ever visible to callers.
pub(crate) fn king_moves(board: &Board, sq: Square, side: Color, moves: &mut Vec<Move>) {
    for &(dr, dc) in ORTHOGONAL.iter().chain(DIAGONAL.iter()) {
        let Some(dest) = sq.offset(dr, dc) else {
            continue;
        };
        if board.piece_at(dest).map_or(false, |p| p.color == side) {
            continue;
        }
        if !analysis::analyze(board, dest, side).in_check {
            moves.push(Move::new(sq, dest, board, MoveFlag::Normal));
        }
    }
}

/// Generates castling moves for a king that is not in check.
///
/// Per side this requires the matching right flag, empty squares strictly
/// between king and rook, and an unattacked path for the two squares the
/// king crosses. The rook's own square may be attacked.
pub(crate) fn castle_moves(
    board: &Board,
    side: Color,
    king: Square,
    rights: CastleRights,
    moves: &mut Vec<Move>,
) {
    if rights.kingside(side) {
        castle_side(board, side, king, 1, 2, moves);
    }
    if rights.queenside(side) {
        castle_side(board, side, king, -1, 3, moves);
    }
}

fn castle_side(
    board: &Board,
    side: Color,
    king: Square,
    dc_sign: i8,
    empty_span: i8,
    moves: &mut Vec<Move>,
) {
    for i in 1..=empty_span {
        match king.offset(0, dc_sign * i) {
            Some(s) if board.piece_at(s).is_none() => {}
            _ => return,
        }
    }
    let enemy = side.opposite();
    for i in 1..=2 {
        match king.offset(0, dc_sign * i) {
            Some(s) if !analysis::square_attacked(board, s, enemy) => {}
            _ => return,
        }
    }
    if let Some(dest) = king.offset(0, dc_sign * 2) {
        moves.push(Move::new(king, dest, board, MoveFlag::Castle));
    }
}
