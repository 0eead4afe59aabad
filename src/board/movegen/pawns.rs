//! Pawn pseudo-legal move generation.

use crate::board::attack_tables::pawn_attacks;
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Flag, Move, MoveList, Piece, PROMOTION_PIECES};

fn promotion_rank(sq_rank: usize, color: Color) -> bool {
    match color {
        Color::White => sq_rank == 7,
        Color::Black => sq_rank == 0,
    }
}

fn start_rank(color: Color) -> usize {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

pub(crate) fn generate(board: &Board, color: Color, list: &mut MoveList) -> Bitboard {
    let white = matches!(color, Color::White);
    let own = board.occupancy(color);
    let opp = board.occupancy(color.opponent());
    let all = board.all_occupancy();
    let mut attacks = Bitboard::EMPTY;

    for from in board.piece_set(color).bitboard(Piece::Pawn).iter() {
        if let Some(one) = from.forward(white) {
            if !all.contains(one) {
                if promotion_rank(one.rank(), color) {
                    for promo in PROMOTION_PIECES {
                        list.push(Move::new(from, one, Piece::Pawn, None, Some(promo), Flag::Promotion));
                    }
                } else {
                    list.push(Move::new(from, one, Piece::Pawn, None, None, Flag::Normal));
                    if from.rank() == start_rank(color) {
                        if let Some(two) = one.forward(white) {
                            if !all.contains(two) {
                                list.push(Move::new(from, two, Piece::Pawn, None, None, Flag::Normal));
                            }
                        }
                    }
                }
            }
        }

        let targets = pawn_attacks(color, from);
        attacks = attacks.or(targets);
        for to in targets.iter() {
            if opp.contains(to) {
                let captured = board.piece_at(to).map(|(_, p)| p);
                if promotion_rank(to.rank(), color) {
                    for promo in PROMOTION_PIECES {
                        list.push(Move::new(from, to, Piece::Pawn, captured, Some(promo), Flag::Promotion));
                    }
                } else {
                    list.push(Move::new(from, to, Piece::Pawn, captured, None, Flag::Capture));
                }
            } else if board.ep_target() == Some(to) {
                list.push(Move::new(from, to, Piece::Pawn, Some(Piece::Pawn), None, Flag::EnPassant));
            }
        }
    }

    let _ = own;
    attacks
}
