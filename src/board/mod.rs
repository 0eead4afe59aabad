//! Position representation, FEN loading, move generation, legality, and
//! static evaluation — the bitboard core of the engine.

mod attack_tables;
mod check;
mod eval;
mod fen;
mod legal;
mod make_unmake;
mod movegen;
mod state;

pub mod error;
pub mod types;

pub use error::{FenError, InternalInconsistency, MoveError, SquareError};
pub use eval::evaluate;
pub use state::{Board, UndoRecord};
pub use types::{Bitboard, CastlingRights, Color, Flag, Move, MoveList, Piece, PieceId, ScoredMove, Square};

use check::in_check as in_check_fn;

/// A position with no further decisions pending. The search needs a
/// terminal-state classification the move generator and legality filter
/// don't provide on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

pub(crate) fn home_rank(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

impl Board {
    /// All legal moves for the side to move, each carrying an ordering score.
    #[must_use]
    pub fn legal_moves(&mut self) -> Vec<ScoredMove> {
        let color = self.side_to_move;
        legal::filter_legal_moves(self, color)
    }

    /// Whether `color`'s king is currently attacked.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        in_check_fn(self, color)
    }

    /// Checkmate, stalemate, or in-progress.
    #[must_use]
    pub fn game_status(&mut self) -> GameStatus {
        let color = self.side_to_move;
        let has_legal_move = !legal::filter_legal_moves(self, color).is_empty();
        if has_legal_move {
            GameStatus::InProgress
        } else if in_check_fn(self, color) {
            GameStatus::Checkmate { winner: color.opponent() }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Apply the legal move from `from` to `to`, disambiguated by `promotion`
    /// when more than one promotion piece is otherwise possible.
    pub fn make_move_from_squares(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<(), MoveError> {
        let mv = self.find_legal_move(from, to, promotion)?;
        self.make(mv).expect("a move returned by find_legal_move must always apply cleanly");
        Ok(())
    }

    /// Parse `from`/`to` algebraic squares (and an optional promotion letter)
    /// and apply the resulting move, if legal.
    pub fn make_move_from_square_str(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<char>,
    ) -> Result<(), MoveError> {
        let from: Square = from.parse().map_err(|_| MoveError::InvalidSquare)?;
        let to: Square = to.parse().map_err(|_| MoveError::InvalidSquare)?;
        let promotion = match promotion {
            Some(c) => Some(Piece::from_char(c).ok_or(MoveError::InvalidPromotion { char: c })?),
            None => None,
        };
        self.make_move_from_squares(from, to, promotion)
    }

    fn find_legal_move(&mut self, from: Square, to: Square, promotion: Option<Piece>) -> Result<Move, MoveError> {
        let color = self.side_to_move;
        legal::filter_legal_moves(self, color)
            .into_iter()
            .map(|scored| scored.mv)
            .find(|mv| mv.from() == from && mv.to() == to && mv.promoted() == promotion)
            .ok_or(MoveError::NotLegal)
    }

    #[cfg(test)]
    pub(crate) fn find_legal_move_str(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        let from: Square = from.parse().map_err(|_| MoveError::InvalidSquare)?;
        let to: Square = to.parse().map_err(|_| MoveError::InvalidSquare)?;
        self.find_legal_move(from, to, promotion)
    }
}
