//! Castling rights tracking.

use woodpush_core::Color;

/// The four independent castling rights.
///
/// A fresh copy is pushed onto the game state's rights log on every move and
/// popped on undo; `Copy` gives each snapshot its own identity. The fields
/// are named rather than packed so that each right unambiguously tracks its
/// corner - construction and updates always address them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    /// All four rights available (the pre-game state).
    pub const ALL: CastleRights = CastleRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    /// No rights remaining.
    pub const NONE: CastleRights = CastleRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    /// Returns true if the given side may still castle kingside.
    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    /// Returns true if the given side may still castle queenside.
    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// Revokes both rights for a color (its king moved).
    #[inline]
    pub fn revoke_both(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }

    /// Revokes the kingside right for a color.
    #[inline]
    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    /// Revokes the queenside right for a color.
    #[inline]
    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_none() {
        assert!(CastleRights::ALL.kingside(Color::White));
        assert!(CastleRights::ALL.queenside(Color::Black));
        assert!(!CastleRights::NONE.kingside(Color::Black));
        assert!(!CastleRights::NONE.queenside(Color::White));
    }

    #[test]
    fn revoke_kingside_only() {
        let mut rights = CastleRights::ALL;
        rights.revoke_kingside(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));
    }

    #[test]
    fn revoke_queenside_only() {
        let mut rights = CastleRights::ALL;
        rights.revoke_queenside(Color::Black);
        assert!(rights.kingside(Color::Black));
        assert!(!rights.queenside(Color::Black));
        assert!(rights.queenside(Color::White));
    }

    #[test]
    fn revoke_both_is_per_color() {
        let mut rights = CastleRights::ALL;
        rights.revoke_both(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(!rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));
    }

    #[test]
    fn snapshots_are_independent() {
        let snapshot = CastleRights::ALL;
        let mut current = snapshot;
        current.revoke_both(Color::White);
        assert!(snapshot.kingside(Color::White));
        assert!(!current.kingside(Color::White));
    }
}
