//! Static evaluator. A pure function of the board: no mutation, no search,
//! and no access outside the board itself.

use super::check::in_check;
use super::state::Board;
use super::types::{Bitboard, Color, Piece};

/// Evaluate `board` from White's perspective: positive favors White.
#[must_use]
pub fn evaluate(board: &Board) -> f64 {
    material_balance(board) + check_penalty(board) + doubled_or_blocked_pawns(board) + isolated_pawns(board)
}

fn material_balance(board: &Board) -> f64 {
    let captured_value = |color: Color| -> f64 {
        board
            .captured_log(color)
            .iter()
            .filter_map(|id| id.piece())
            .map(Piece::material_value)
            .sum()
    };
    captured_value(Color::White) - captured_value(Color::Black)
}

fn check_penalty(board: &Board) -> f64 {
    let mut penalty = 0.0;
    if in_check(board, Color::Black) {
        penalty += 1.0;
    }
    if in_check(board, Color::White) {
        penalty -= 1.0;
    }
    penalty
}

fn doubled_or_blocked_pawns(board: &Board) -> f64 {
    let occ = board.all_occupancy();
    let mut score = 0.0;

    for sq in board.piece_set(Color::White).bitboard(Piece::Pawn).iter() {
        if sq.forward(true).is_some_and(|ahead| occ.contains(ahead)) {
            score -= 0.5;
        }
    }
    for sq in board.piece_set(Color::Black).bitboard(Piece::Pawn).iter() {
        if sq.forward(false).is_some_and(|ahead| occ.contains(ahead)) {
            score += 0.5;
        }
    }

    score
}

fn isolated_pawns(board: &Board) -> f64 {
    isolated_count(board, Color::White) * -0.5 + isolated_count(board, Color::Black) * 0.5
}

fn isolated_count(board: &Board, color: Color) -> f64 {
    let pawns = board.piece_set(color).bitboard(Piece::Pawn);
    let mut count = 0.0;
    for sq in pawns.iter() {
        let mut adjacent_files = Bitboard::EMPTY;
        if sq.file() > 0 {
            adjacent_files = adjacent_files.or(Bitboard::file_mask(sq.file() - 1));
        }
        if sq.file() < 7 {
            adjacent_files = adjacent_files.or(Bitboard::file_mask(sq.file() + 1));
        }
        if !pawns.intersects(adjacent_files) {
            count += 1.0;
        }
    }
    count
}
