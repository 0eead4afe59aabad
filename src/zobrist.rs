//! Zobrist hashing: a deterministic 64-bit fingerprint of a `Board`, used to
//! key the transposition table and the opening book.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Piece, Square};

/// Fixed seed, not the system RNG: two processes (or two runs of the same
/// process) must agree on the same key for the same position, and the
/// opening book is keyed against these keys ahead of time.
const ZOBRIST_SEED: u64 = 0x5A6F_6272_6973_7431;

struct ZobristKeys {
    /// `piece_square[piece.index()][color.index()][square.index()]`.
    piece_square: [[[u64; 64]; 2]; 6],
    white_to_move: u64,
    /// `castling[color.index()][kingside as usize]`.
    castling: [[u64; 2]; 2],
    en_passant_active: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_square = [[[0u64; 64]; 2]; 6];
        for kind in &mut piece_square {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let white_to_move = rng.gen();

        let mut castling = [[0u64; 2]; 2];
        for color in &mut castling {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let en_passant_active = rng.gen();

        ZobristKeys { piece_square, white_to_move, castling, en_passant_active }
    }
}

static KEYS: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// The Zobrist key for `board`: the XOR of every applicable component.
///
/// Recomputed from scratch rather than maintained incrementally: simpler,
/// and it can never drift out of sync with the position it describes.
#[must_use]
pub fn zobrist_key(board: &Board) -> u64 {
    let mut key = 0u64;

    for sq_idx in 0..64 {
        let sq = Square::from_index(sq_idx);
        if let Some((color, piece)) = board.piece_at(sq) {
            key ^= KEYS.piece_square[piece_index(piece)][color.index()][sq_idx];
        }
    }

    if board.side_to_move() == Color::White {
        key ^= KEYS.white_to_move;
    }

    for color in [Color::White, Color::Black] {
        for kingside in [true, false] {
            if board.castle_rights().has(color, kingside) {
                key ^= KEYS.castling[color.index()][kingside as usize];
            }
        }
    }

    if board.ep_target().is_some() {
        key ^= KEYS.en_passant_active;
    }

    key
}

fn piece_index(piece: Piece) -> usize {
    match piece {
        Piece::Pawn => 0,
        Piece::Knight => 1,
        Piece::Bishop => 2,
        Piece::Rook => 3,
        Piece::Queen => 4,
        Piece::King => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_key_is_deterministic() {
        let a = Board::starting_position();
        let b = Board::starting_position();
        assert_eq!(zobrist_key(&a), zobrist_key(&b));
    }

    #[test]
    fn different_positions_have_different_keys() {
        let start = Board::starting_position();
        let mut moved = Board::starting_position();
        moved.make_move_from_square_str("e2", "e4", None).unwrap();
        assert_ne!(zobrist_key(&start), zobrist_key(&moved));
    }

    #[test]
    fn transposition_via_different_move_orders_matches() {
        let mut via_knights_first = Board::starting_position();
        via_knights_first.make_move_from_square_str("g1", "f3", None).unwrap();
        via_knights_first.make_move_from_square_str("g8", "f6", None).unwrap();
        via_knights_first.make_move_from_square_str("b1", "c3", None).unwrap();
        via_knights_first.make_move_from_square_str("b8", "c6", None).unwrap();

        let mut other_order = Board::starting_position();
        other_order.make_move_from_square_str("b1", "c3", None).unwrap();
        other_order.make_move_from_square_str("b8", "c6", None).unwrap();
        other_order.make_move_from_square_str("g1", "f3", None).unwrap();
        other_order.make_move_from_square_str("g8", "f6", None).unwrap();

        assert_eq!(zobrist_key(&via_knights_first), zobrist_key(&other_order));
    }

    #[test]
    fn key_changes_when_castling_rights_are_lost() {
        let before = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq -").unwrap();
        let mut after = before.clone();
        after.make_move_from_square_str("h1", "h2", None).unwrap();
        assert_ne!(zobrist_key(&before), zobrist_key(&after));
    }
}
