//! Pseudo-legal move generation, one generator per piece kind.
//!
//! Each piece-kind generator appends to the caller's `MoveList` and returns
//! its own attack bitboard; this module unions them into the per-color
//! attack bitboard used by king-safety queries.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Board;
use super::types::{Bitboard, Color, MoveList};

/// All pseudo-legal moves for `color`, plus the union attack bitboard
/// (castle destinations excluded — a castle is never itself an attack).
#[must_use]
pub(crate) fn generate_pseudo_legal(board: &Board, color: Color) -> (MoveList, Bitboard) {
    let mut list = MoveList::new();
    let mut attacks = Bitboard::EMPTY;

    attacks = attacks.or(pawns::generate(board, color, &mut list));
    attacks = attacks.or(knights::generate(board, color, &mut list));
    attacks = attacks.or(sliders::generate_bishop(board, color, &mut list));
    attacks = attacks.or(sliders::generate_rook(board, color, &mut list));
    attacks = attacks.or(sliders::generate_queen(board, color, &mut list));
    attacks = attacks.or(kings::generate(board, color, &mut list));

    (list, attacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board as PublicBoard;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves() {
        let board = PublicBoard::starting_position();
        let (list, _) = generate_pseudo_legal(&board, Color::White);
        assert_eq!(list.len(), 20);
    }
}
