//! Attack and pin analysis.
//!
//! [`analyze`] walks rays outward from a king square and classifies every
//! line as pinned, checking, or clear, then probes the knight offsets. It is
//! a pure function of the board and an explicit "friendly" color - never of
//! any turn flag - so the same routine answers both "is my king attacked"
//! and "would my king be attacked over there".

use woodpush_core::{Board, Color, Piece, Square};

/// The four orthogonal ray directions.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// The four diagonal ray directions.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The eight knight jump offsets.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A friendly piece shielding its king on one ray.
///
/// Moving it off the `direction` axis would expose the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    /// Square of the pinned piece.
    pub square: Square,
    /// Ray direction from the king toward the pinning piece.
    pub direction: (i8, i8),
}

/// An enemy piece currently attacking the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// Square of the checking piece.
    pub square: Square,
    /// Direction from the king toward the checker (a knight's jump offset
    /// for knight checks).
    pub direction: (i8, i8),
}

/// Result of a king-safety analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KingSafety {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Classifies every ray from `king` and the knight offsets, for the side
/// whose king (hypothetically) stands there.
///
/// Ray protocol: the first friendly piece met becomes a candidate pin; a
/// second friendly piece clears the ray; an enemy piece either checks (no
/// candidate) or confirms the pin, provided its type attacks along this
/// direction. A friendly *king* met on a ray is skipped entirely, which
/// lets king-move generation probe a destination square while the real king
/// still occupies its origin cell.
pub fn analyze(board: &Board, king: Square, friendly: Color) -> KingSafety {
    let enemy = friendly.opposite();
    let mut safety = KingSafety::default();

    for (idx, &(dr, dc)) in ORTHOGONAL.iter().chain(DIAGONAL.iter()).enumerate() {
        let diagonal = idx >= 4;
        let mut candidate: Option<Pin> = None;
        let mut step = 1i8;
        let mut walk = king.offset(dr, dc);
        while let Some(sq) = walk {
            match board.piece_at(sq) {
                Some(p) if p.color == friendly && p.piece == Piece::King => {
                    // The origin cell of a hypothetical king move; vacated.
                }
                Some(p) if p.color == friendly => {
                    if candidate.is_none() {
                        candidate = Some(Pin {
                            square: sq,
                            direction: (dr, dc),
                        });
                    } else {
                        break;
                    }
                }
                Some(p) => {
                    if attacks_along(p.piece, enemy, diagonal, (dr, dc), step) {
                        match candidate {
                            None => {
                                safety.in_check = true;
                                safety.checks.push(Check {
                                    square: sq,
                                    direction: (dr, dc),
                                });
                            }
                            Some(pin) => safety.pins.push(pin),
                        }
                    }
                    break;
                }
                None => {}
            }
            walk = sq.offset(dr, dc);
            step += 1;
        }
    }

    for &(dr, dc) in &KNIGHT_JUMPS {
        if let Some(sq) = king.offset(dr, dc) {
            if board
                .piece_at(sq)
                .map_or(false, |p| p.color == enemy && p.piece == Piece::Knight)
            {
                safety.in_check = true;
                safety.checks.push(Check {
                    square: sq,
                    direction: (dr, dc),
                });
            }
        }
    }

    safety
}

/// Whether an enemy piece of this type attacks down the given ray.
fn attacks_along(piece: Piece, enemy: Color, diagonal: bool, direction: (i8, i8), step: i8) -> bool {
    match piece {
        Piece::Queen => true,
        Piece::Rook => !diagonal,
        Piece::Bishop => diagonal,
        Piece::King => step == 1,
        // A pawn covers the two diagonals one square out, on the side it
        // attacks from: the ray away from the king must run against the
        // pawn's own advance direction.
        Piece::Pawn => step == 1 && diagonal && direction.0 == -enemy.row_delta(),
        Piece::Knight => false,
    }
}

/// Returns true if `by` attacks `target`, judged by the same ray analysis
/// that vets king destinations.
///
/// This counts pawn and king cover on empty squares, which move generation
/// for `by` would not surface. Pin restrictions on the attacker are
/// deliberately absent: a pinned piece still delivers check, so it still
/// bars a king from crossing its line. The attacked side's king is
/// transparent on rays, so the query stays valid for squares that king is
/// about to occupy. Used to gate the squares a castling king passes through.
pub fn square_attacked(board: &Board, target: Square, by: Color) -> bool {
    analyze(board, target, by.opposite()).in_check
}
