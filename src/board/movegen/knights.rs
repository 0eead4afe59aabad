//! Knight pseudo-legal move generation.

use crate::board::attack_tables::KNIGHT_ATTACKS;
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Flag, Move, MoveList, Piece};

pub(crate) fn generate(board: &Board, color: Color, list: &mut MoveList) -> Bitboard {
    let own = board.occupancy(color);
    let opp = board.occupancy(color.opponent());
    let mut attacks = Bitboard::EMPTY;

    for from in board.piece_set(color).bitboard(Piece::Knight).iter() {
        let targets = KNIGHT_ATTACKS[from.as_index()].and(own.not());
        attacks = attacks.or(targets);
        for to in targets.iter() {
            if opp.contains(to) {
                let captured = board.piece_at(to).map(|(_, p)| p);
                list.push(Move::new(from, to, Piece::Knight, captured, None, Flag::Capture));
            } else {
                list.push(Move::new(from, to, Piece::Knight, None, None, Flag::Normal));
            }
        }
    }

    attacks
}
