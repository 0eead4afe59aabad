//! Make/unmake: O(1) application and perfect reversal of a `Move`.

use super::error::InternalInconsistency;
use super::home_rank;
use super::state::{Board, UndoRecord};
use super::types::{Color, Piece, PieceId, Square};

fn rook_squares_for_castle(from: Square, to: Square) -> (Square, Square) {
    let rank = from.rank();
    let kingside = to.file() == 6;
    let (rook_from_file, rook_to_file) = if kingside { (7, 5) } else { (0, 3) };
    (Square::new(rank, rook_from_file), Square::new(rank, rook_to_file))
}

impl Board {
    /// Apply `mv`, which must be pseudo-legal for the side to move. Returns
    /// `Err(InternalInconsistency)` only if an invariant the caller should
    /// have already guaranteed (a legal source piece) is violated; tests
    /// must never provoke this.
    pub fn make(&mut self, mv: crate::board::Move) -> Result<(), InternalInconsistency> {
        let color = self.side_to_move;
        let opponent = color.opponent();
        let from = mv.from();
        let to = mv.to();
        let moved = mv.moved().expect("make is never called with the null move");

        if self.piece_at(from) != Some((color, moved)) {
            return Err(InternalInconsistency {
                detail: format!("make: expected {moved:?}/{color:?} at {from}, found {:?}", self.piece_at(from)),
            });
        }

        let prev_ep_target = self.ep_target;
        let prev_castle_rights = self.castle_rights;

        let captured = if mv.is_en_passant() {
            let captured_sq = Square::new(from.rank(), to.file());
            let id = self.mailbox[captured_sq.as_index()];
            self.remove_piece(opponent, Piece::Pawn, captured_sq);
            Some(id)
        } else if let Some(captured_piece) = mv.captured() {
            let id = self.mailbox[to.as_index()];
            self.remove_piece(opponent, captured_piece, to);
            Some(id)
        } else {
            None
        };

        self.remove_piece(color, moved, from);
        self.set_piece(color, mv.promoted().unwrap_or(moved), to);

        if mv.is_castle() {
            let (rook_from, rook_to) = rook_squares_for_castle(from, to);
            self.remove_piece(color, Piece::Rook, rook_from);
            self.set_piece(color, Piece::Rook, rook_to);
        }

        self.ep_target = None;
        if moved == Piece::Pawn && (to.rank() as i32 - from.rank() as i32).abs() == 2 {
            let ep_rank = (from.rank() + to.rank()) / 2;
            self.ep_target = Some(Square::new(ep_rank, from.file()));
        }

        if moved == Piece::King {
            self.castle_rights.remove_both(color);
        }
        clear_right_if_rook_home_square(self, from, color);
        clear_right_if_rook_home_square(self, to, opponent);

        if let Some(id) = captured {
            self.captured[color.index()].push(id);
        }

        self.history.push(UndoRecord {
            mv,
            prev_ep_target,
            prev_castle_rights,
            captured,
        });
        self.side_to_move = opponent;

        Ok(())
    }

    /// Reverse the most recent `make`, bit-exactly. Errors if there is no
    /// move to unmake.
    pub fn unmake(&mut self) -> Result<(), InternalInconsistency> {
        let record = self
            .history
            .pop()
            .ok_or_else(|| InternalInconsistency { detail: "unmake called with empty history".into() })?;

        let mv = record.mv;
        let color = self.side_to_move.opponent();
        let from = mv.from();
        let to = mv.to();
        let moved = mv.moved().expect("unmake is never called with the null move");

        if mv.is_castle() {
            let (rook_from, rook_to) = rook_squares_for_castle(from, to);
            self.remove_piece(color, Piece::Rook, rook_to);
            self.set_piece(color, Piece::Rook, rook_from);
        }

        self.remove_piece(color, mv.promoted().unwrap_or(moved), to);
        self.set_piece(color, moved, from);

        if mv.is_en_passant() {
            let captured_sq = Square::new(from.rank(), to.file());
            if let Some((c, p)) = record.captured.and_then(PieceId::color_piece) {
                self.set_piece(c, p, captured_sq);
            }
        } else if mv.captured().is_some() {
            if let Some((c, p)) = record.captured.and_then(PieceId::color_piece) {
                self.set_piece(c, p, to);
            }
        }

        if record.captured.is_some() {
            self.captured[color.index()].pop();
        }

        self.ep_target = record.prev_ep_target;
        self.castle_rights = record.prev_castle_rights;
        self.side_to_move = color;

        Ok(())
    }
}

fn clear_right_if_rook_home_square(board: &mut Board, sq: Square, color: Color) {
    if sq.rank() != home_rank(color) {
        return;
    }
    if sq.file() == 0 {
        board.castle_rights.remove(color, false);
    } else if sq.file() == 7 {
        board.castle_rights.remove(color, true);
    }
}
