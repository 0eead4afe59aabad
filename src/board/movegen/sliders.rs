//! Bishop, rook, and queen pseudo-legal move generation.

use crate::board::attack_tables::{slider_attacks, DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Flag, Move, MoveList, Piece};

fn generate_for(board: &Board, color: Color, piece: Piece, dirs: &[(i32, i32)], list: &mut MoveList) -> Bitboard {
    let own = board.occupancy(color);
    let opp = board.occupancy(color.opponent());
    let occ = board.all_occupancy();
    let mut attacks = Bitboard::EMPTY;

    for from in board.piece_set(color).bitboard(piece).iter() {
        let targets = slider_attacks(from, dirs, occ).and(own.not());
        attacks = attacks.or(targets);
        for to in targets.iter() {
            if opp.contains(to) {
                let captured = board.piece_at(to).map(|(_, p)| p);
                list.push(Move::new(from, to, piece, captured, None, Flag::Capture));
            } else {
                list.push(Move::new(from, to, piece, None, None, Flag::Normal));
            }
        }
    }

    attacks
}

pub(crate) fn generate_bishop(board: &Board, color: Color, list: &mut MoveList) -> Bitboard {
    generate_for(board, color, Piece::Bishop, &DIAGONAL_DIRS, list)
}

pub(crate) fn generate_rook(board: &Board, color: Color, list: &mut MoveList) -> Bitboard {
    generate_for(board, color, Piece::Rook, &ORTHOGONAL_DIRS, list)
}

pub(crate) fn generate_queen(board: &Board, color: Color, list: &mut MoveList) -> Bitboard {
    let mut dirs = Vec::with_capacity(8);
    dirs.extend_from_slice(&ORTHOGONAL_DIRS);
    dirs.extend_from_slice(&DIAGONAL_DIRS);
    generate_for(board, color, Piece::Queen, &dirs, list)
}
