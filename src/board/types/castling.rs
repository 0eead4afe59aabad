//! Castling rights: four independent bits, favored over a composite mask for clarity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const ALL_CASTLING_RIGHTS: u8 = 0b1111;

/// Castling rights (WK, WQ, BK, BQ), stored as independent bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights for `color` (used when that color's king moves).
    #[inline]
    pub fn remove_both(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => 1 << 0,
            (Color::White, false) => 1 << 1,
            (Color::Black, true) => 1 << 2,
            (Color::Black, false) => 1 << 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut r = CastlingRights::none();
        assert!(!r.has(Color::White, true));
        r.set(Color::White, true);
        assert!(r.has(Color::White, true));
        assert!(!r.has(Color::White, false));
        r.remove(Color::White, true);
        assert!(!r.has(Color::White, true));
    }

    #[test]
    fn all_has_every_right() {
        let r = CastlingRights::all();
        assert!(r.has(Color::White, true));
        assert!(r.has(Color::White, false));
        assert!(r.has(Color::Black, true));
        assert!(r.has(Color::Black, false));
    }

    #[test]
    fn remove_both_clears_only_that_color() {
        let mut r = CastlingRights::all();
        r.remove_both(Color::White);
        assert!(!r.has(Color::White, true));
        assert!(!r.has(Color::White, false));
        assert!(r.has(Color::Black, true));
        assert!(r.has(Color::Black, false));
    }

    #[test]
    fn raw_roundtrip() {
        let r = CastlingRights::all();
        assert_eq!(CastlingRights::from_u8(r.as_u8()), r);
    }
}
