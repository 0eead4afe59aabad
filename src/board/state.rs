//! The canonical board state.

use super::types::{bit_for_square, Bitboard, CastlingRights, Color, Move, Piece, PieceId, Square};

/// The six bitboards (one per piece kind) belonging to a single color.
///
/// Invariant: the union of all six equals that color's occupancy bitboard,
/// and every set bit belongs to exactly one of the six.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PieceSet {
    bb: [Bitboard; 6],
}

impl PieceSet {
    const fn new() -> Self {
        PieceSet { bb: [Bitboard::EMPTY; 6] }
    }

    #[inline]
    pub(crate) fn bitboard(&self, piece: Piece) -> Bitboard {
        self.bb[piece.index()]
    }

    #[inline]
    pub(crate) fn occupancy(&self) -> Bitboard {
        self.bb.iter().fold(Bitboard::EMPTY, |acc, &b| acc.or(b))
    }

    /// Piece count, derived by popcount rather than tracked separately.
    #[inline]
    pub(crate) fn count(&self, piece: Piece) -> u32 {
        self.bb[piece.index()].popcount()
    }

    fn set(&mut self, piece: Piece, sq: Square) {
        self.bb[piece.index()].0 |= bit_for_square(sq).0;
    }

    fn clear(&mut self, piece: Piece, sq: Square) {
        self.bb[piece.index()].0 &= !bit_for_square(sq).0;
    }
}

/// Everything `make` snapshots and `unmake` restores that cannot be
/// reconstructed from the post-move state.
#[derive(Clone, Copy, Debug)]
pub struct UndoRecord {
    pub(crate) mv: Move,
    pub(crate) prev_ep_target: Option<Square>,
    pub(crate) prev_castle_rights: CastlingRights,
    /// The captured piece, if any — for en passant this is the passed pawn,
    /// not whatever (nothing) occupied the destination square.
    pub(crate) captured: Option<PieceId>,
}

/// The canonical chess position: bitboards, mailbox, rights, and history.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) white: PieceSet,
    pub(crate) black: PieceSet,
    pub(crate) white_occ: Bitboard,
    pub(crate) black_occ: Bitboard,
    pub(crate) mailbox: [PieceId; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castle_rights: CastlingRights,
    pub(crate) ep_target: Option<Square>,
    pub(crate) history: Vec<UndoRecord>,
    pub(crate) captured: [Vec<PieceId>; 2],
}

impl Board {
    /// An empty board, White to move, no castling rights. Callers normally
    /// reach a usable position via [`Board::starting_position`] or
    /// [`Board::from_fen`](super::error::FenError).
    #[must_use]
    pub fn empty() -> Self {
        Board {
            white: PieceSet::new(),
            black: PieceSet::new(),
            white_occ: Bitboard::EMPTY,
            black_occ: Bitboard::EMPTY,
            mailbox: [PieceId::EMPTY; 64],
            side_to_move: Color::White,
            castle_rights: CastlingRights::none(),
            ep_target: None,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// The standard chess starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            board.set_piece(Color::White, piece, Square::new(0, file));
            board.set_piece(Color::Black, piece, Square::new(7, file));
            board.set_piece(Color::White, Piece::Pawn, Square::new(1, file));
            board.set_piece(Color::Black, Piece::Pawn, Square::new(6, file));
        }
        board.castle_rights = CastlingRights::all();
        board.side_to_move = Color::White;
        board
    }

    #[inline]
    pub(crate) fn piece_set(&self, color: Color) -> &PieceSet {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    fn piece_set_mut(&mut self, color: Color) -> &mut PieceSet {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    #[inline]
    pub(crate) fn occupancy(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white_occ,
            Color::Black => self.black_occ,
        }
    }

    #[inline]
    fn occupancy_mut(&mut self, color: Color) -> &mut Bitboard {
        match color {
            Color::White => &mut self.white_occ,
            Color::Black => &mut self.black_occ,
        }
    }

    #[inline]
    pub(crate) fn all_occupancy(&self) -> Bitboard {
        self.white_occ.or(self.black_occ)
    }

    /// What occupies `sq`, if anything — the mailbox's O(1) lookup.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.mailbox[sq.as_index()].color_piece()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castle_rights(&self) -> CastlingRights {
        self.castle_rights
    }

    #[must_use]
    pub fn ep_target(&self) -> Option<Square> {
        self.ep_target
    }

    #[must_use]
    pub fn captured_log(&self, color: Color) -> &[PieceId] {
        &self.captured[color.index()]
    }

    /// The square holding `color`'s king. Panics if the invariant "each side
    /// has exactly one king" is broken — that can only happen through a
    /// bypass of `make`/`unmake`/`from_fen`.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.piece_set(color)
            .bitboard(Piece::King)
            .iter()
            .next()
            .expect("every valid Board has exactly one king per side")
    }

    pub(crate) fn set_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        self.piece_set_mut(color).set(piece, sq);
        self.occupancy_mut(color).0 |= bit_for_square(sq).0;
        self.mailbox[sq.as_index()] = PieceId::new(color, piece);
    }

    pub(crate) fn remove_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        self.piece_set_mut(color).clear(piece, sq);
        self.occupancy_mut(color).0 &= !bit_for_square(sq).0;
        self.mailbox[sq.as_index()] = PieceId::EMPTY;
    }

    /// Checks every invariant callers should never be able to break through
    /// the public API; used by tests and `debug_assert!`s.
    #[must_use]
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let occupied = self.all_occupancy().contains(sq);
            let mailbox_empty = self.mailbox[idx].is_empty();
            if occupied == mailbox_empty {
                return Err(format!("mailbox/bitboard mismatch at square index {idx}"));
            }
            if let Some((color, piece)) = self.piece_at(sq) {
                if !self.piece_set(color).bitboard(piece).contains(sq) {
                    return Err(format!("mailbox says {piece:?}/{color:?} at {idx} but bitboard disagrees"));
                }
            }
        }
        for color in [Color::White, Color::Black] {
            if self.piece_set(color).bitboard(Piece::King).popcount() != 1 {
                return Err(format!("{color:?} does not have exactly one king"));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}
