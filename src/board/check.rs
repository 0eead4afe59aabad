//! Ray-cast check detection.
//!
//! Walking outward from a single square in eight directions plus the knight
//! offsets is substantially cheaper than generating every opposing
//! pseudo-legal move and testing for membership, and is used both for
//! `in_check` and for testing whether a castling king's path is safe.

use super::attack_tables::{pawn_attacks, DIAGONAL_DIRS, KING_ATTACKS, KNIGHT_ATTACKS, ORTHOGONAL_DIRS};
use super::state::Board;
use super::types::{Color, Piece, Square};

fn first_blocker(sq: Square, dir: (i32, i32), board: &Board) -> Option<Square> {
    let (mut rank, mut file) = (sq.rank() as i32, sq.file() as i32);
    loop {
        rank += dir.0;
        file += dir.1;
        if !(0..8).contains(&rank) || !(0..8).contains(&file) {
            return None;
        }
        let target = Square::new(rank as usize, file as usize);
        if board.all_occupancy().contains(target) {
            return Some(target);
        }
    }
}

/// `true` if any `by`-colored piece pseudo-attacks `sq` in `board`.
#[must_use]
pub(crate) fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    for &dir in &ORTHOGONAL_DIRS {
        if let Some(first) = first_blocker(sq, dir, board) {
            if let Some((color, piece)) = board.piece_at(first) {
                if color == by && matches!(piece, Piece::Rook | Piece::Queen) {
                    return true;
                }
            }
        }
    }
    for &dir in &DIAGONAL_DIRS {
        if let Some(first) = first_blocker(sq, dir, board) {
            if let Some((color, piece)) = board.piece_at(first) {
                if color == by && matches!(piece, Piece::Bishop | Piece::Queen) {
                    return true;
                }
            }
        }
    }

    if KNIGHT_ATTACKS[sq.as_index()].intersects(board.piece_set(by).bitboard(Piece::Knight)) {
        return true;
    }

    if KING_ATTACKS[sq.as_index()].intersects(board.piece_set(by).bitboard(Piece::King)) {
        return true;
    }

    // A `by`-colored pawn attacks `sq` from exactly the squares that `sq`
    // would attack if it held a pawn of the opposite color.
    let pawn_attacker_squares = pawn_attacks(by.opponent(), sq);
    if pawn_attacker_squares.intersects(board.piece_set(by).bitboard(Piece::Pawn)) {
        return true;
    }

    false
}

/// Is `color`'s king currently attacked?
#[must_use]
pub fn in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board as PublicBoard;

    #[test]
    fn starting_position_has_no_checks() {
        let board = PublicBoard::starting_position();
        assert!(!in_check(&board, Color::White));
        assert!(!in_check(&board, Color::Black));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let board = PublicBoard::from_fen("4k3/8/8/8/8/8/8/4K2r w - -").unwrap();
        assert!(in_check(&board, Color::White));
        assert!(!in_check(&board, Color::Black));
    }

    #[test]
    fn bishop_diagonal_gives_check() {
        let board = PublicBoard::from_fen("4k3/8/8/8/8/2b5/8/4K3 w - -").unwrap();
        assert!(in_check(&board, Color::White));
    }

    #[test]
    fn knight_offset_gives_check() {
        let board = PublicBoard::from_fen("4k3/8/8/8/8/3n4/8/4K3 w - -").unwrap();
        // knight on d3 attacks e1? d3 -> (2,3) offset deltas to e1 (0,4): (dr,df)=(-2,1): yes
        assert!(in_check(&board, Color::White));
    }

    #[test]
    fn adjacent_pawn_gives_check() {
        let board = PublicBoard::from_fen("4k3/8/8/8/8/8/4p3/4K3 w - -").unwrap();
        assert!(in_check(&board, Color::White));
    }

    #[test]
    fn king_not_in_check_when_only_adjacent_but_not_attacking_diagonal() {
        let board = PublicBoard::from_fen("4k3/8/8/8/8/8/4p3/4K3 w - -").unwrap();
        assert!(!in_check(&board, Color::Black));
    }

    #[test]
    fn blocked_rook_does_not_give_check() {
        let board = PublicBoard::from_fen("4k3/8/8/8/8/8/4P2r/4K3 w - -").unwrap();
        assert!(!in_check(&board, Color::White));
    }
}
