//! FEN loading.
//!
//! Only loading is supported: the half-move and full-move counters are
//! accepted (for compatibility with FEN strings copied from other tools) but
//! ignored, since `Board` tracks its own reversibility through the undo
//! stack rather than replaying move counters.

use super::error::FenError;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a FEN string into an initialized `Board`. On success every
    /// board invariant holds; on failure, no partial board is observable.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;
        board.side_to_move = parse_side_to_move(parts[1])?;
        board.castle_rights = parse_castling(parts[2])?;
        board.ep_target = parse_en_passant(parts[3])?;

        Ok(board)
    }
}

fn parse_placement(board: &mut Board, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRank { rank: ranks.len(), files: 0 });
    }

    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                if file >= 8 {
                    return Err(FenError::InvalidRank { rank, files: file + 1 });
                }
                board.set_piece(color, piece, Square::new(rank, file));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::InvalidRank { rank, files: file });
        }
    }

    Ok(())
}

fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove { found: field.to_string() }),
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    let mut rights = CastlingRights::none();
    for c in field.chars() {
        let (color, kingside) = match c {
            'K' => (Color::White, true),
            'Q' => (Color::White, false),
            'k' => (Color::Black, true),
            'q' => (Color::Black, false),
            _ => return Err(FenError::InvalidCastling { char: c }),
        };
        rights.set(color, kingside);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    field
        .parse::<Square>()
        .map(Some)
        .map_err(|_| FenError::InvalidEnPassant { found: field.to_string() })
}
