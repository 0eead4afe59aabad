//! Legality filtering and move scoring.

use super::check::in_check;
use super::movegen::generate_pseudo_legal;
use super::state::Board;
use super::types::{Bitboard, Color, Move, Piece, ScoredMove};

/// Filter `color`'s pseudo-legal moves down to legal ones, attaching each
/// survivor's ordering score: make, query check, unmake. Survivor order
/// matches generation order.
pub(crate) fn filter_legal_moves(board: &mut Board, color: Color) -> Vec<ScoredMove> {
    let (pseudo_legal, _attacks) = generate_pseudo_legal(board, color);
    let mut legal = Vec::with_capacity(pseudo_legal.len());

    for &mv in pseudo_legal.iter() {
        board.make(mv).expect("a pseudo-legal move must always apply cleanly");
        if !in_check(board, color) {
            let gives_check = in_check(board, color.opponent());
            legal.push(ScoredMove { mv, score: score_move(mv, gives_check) });
        }
        board.unmake().expect("a just-made move must always unmake cleanly");
    }

    legal
}

/// Additive heuristic used only to order search, never stored on the board.
fn score_move(mv: Move, gives_check: bool) -> i32 {
    let mut score = 0;

    if mv.is_capture() {
        score += 10;
    }
    if gives_check {
        score += 20;
    }
    if mv.is_promotion() {
        score += 15;
    }
    if mv.is_castle() {
        score += 10;
    }

    match mv.moved() {
        Some(Piece::Knight | Piece::Bishop) if Bitboard::EXTENDED_CENTER.contains(mv.to()) => score += 5,
        Some(Piece::Pawn) if Bitboard::CENTER.contains(mv.to()) => score += 2,
        _ => {}
    }

    score
}
