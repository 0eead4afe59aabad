//! Piece kind and color.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Parse a piece from a case-insensitive FEN/SAN letter (p, n, b, r, q, k).
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Lowercase letter for this piece.
    #[inline]
    #[must_use]
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

    /// Letter for this piece, uppercase when `color` is White.
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Material value in pawns, per `spec.md` §4.6 ({P:1, N:3, B:3, R:5, Q:9, K:0}).
    #[inline]
    #[must_use]
    pub const fn material_value(self) -> f64 {
        match self {
            Piece::Pawn => 1.0,
            Piece::Knight | Piece::Bishop => 3.0,
            Piece::Rook => 5.0,
            Piece::Queen => 9.0,
            Piece::King => 0.0,
        }
    }
}

/// Promotion piece choices, queen first (the common preference order).
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// The opposing color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A compact square occupant: 0 = empty, else low 3 bits = `Piece` kind (1-6),
/// bit 3 = color (0 = White, 1 = Black).
///
/// Used for the mailbox and the captured-piece log, where a `(Color, Piece)`
/// pair would otherwise cost the same space less compactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(u8);

impl PieceId {
    pub const EMPTY: PieceId = PieceId(0);

    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        let kind_bits = (piece.index() as u8) + 1;
        let color_bit = match color {
            Color::White => 0,
            Color::Black => 0b1000,
        };
        PieceId(kind_bits | color_bit)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self.0 & 0b0111 {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    #[must_use]
    pub const fn color(self) -> Option<Color> {
        if self.is_empty() {
            None
        } else if self.0 & 0b1000 == 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    #[must_use]
    pub const fn color_piece(self) -> Option<(Color, Piece)> {
        match (self.color(), self.piece()) {
            (Some(c), Some(p)) => Some((c, p)),
            _ => None,
        }
    }
}

impl Default for PieceId {
    fn default() -> Self {
        PieceId::EMPTY
    }
}
