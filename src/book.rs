//! Opening book: a line-oriented, comma-separated file keyed by the Zobrist
//! key of the position each line describes.

use std::collections::HashMap;

use crate::board::{Board, Color, Move, Piece, Square};
use crate::zobrist::zobrist_key;

/// Zobrist key → book move, looked up at a search root.
#[derive(Default)]
pub struct OpeningBook {
    entries: HashMap<u64, Move>,
}

/// Outcome of loading a book file: the book itself and a count of lines that
/// were skipped for being malformed. Malformed input does not abort the load.
pub struct LoadReport {
    pub book: OpeningBook,
    pub malformed_lines: usize,
}

impl OpeningBook {
    #[must_use]
    pub fn new() -> Self {
        OpeningBook { entries: HashMap::new() }
    }

    /// Parse `text` one line at a time: `fen,side,move`. Lines that fail to
    /// parse, name the wrong side to move, or encode a move that is not
    /// legal in the named position are counted and skipped.
    #[must_use]
    pub fn load(text: &str) -> LoadReport {
        let mut book = OpeningBook::new();
        let mut malformed_lines = 0;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((key, mv)) => {
                    book.entries.insert(key, mv);
                }
                None => malformed_lines += 1,
            }
        }

        LoadReport { book, malformed_lines }
    }

    /// The recorded move for `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: u64) -> Option<Move> {
        self.entries.get(&key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(u64, Move)> {
    let mut fields = line.splitn(3, ',');
    let fen = fields.next()?.trim();
    let side = fields.next()?.trim();
    let move_str = fields.next()?.trim();

    let board = Board::from_fen(fen).ok()?;
    let expected_side = match side {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return None,
    };
    if board.side_to_move() != expected_side {
        return None;
    }

    let mv = parse_book_move(&board, move_str)?;
    Some((zobrist_key(&board), mv))
}

/// `<from-file><from-rank><to-file><to-rank>[promotion-char]`, resolved
/// against the position's own legal-move list rather than merely decoded —
/// a book move that isn't actually legal here is as malformed as one that
/// doesn't parse at all.
fn parse_book_move(board: &Board, move_str: &str) -> Option<Move> {
    let from: Square = move_str.get(0..2)?.parse().ok()?;
    let to: Square = move_str.get(2..4)?.parse().ok()?;
    let promotion = match move_str.get(4..5) {
        Some(letter) => Some(Piece::from_char(letter.chars().next()?)?),
        None => None,
    };

    let mut board = board.clone();
    board
        .legal_moves()
        .into_iter()
        .map(|scored| scored.mv)
        .find(|mv| mv.from() == from && mv.to() == to && mv.promoted() == promotion)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

    #[test]
    fn well_formed_line_is_loaded_and_looked_up() {
        let text = format!("{STARTING_FEN},w,e2e4\n");
        let report = OpeningBook::load(&text);
        assert_eq!(report.malformed_lines, 0);
        assert_eq!(report.book.len(), 1);

        let board = Board::from_fen(STARTING_FEN).unwrap();
        let mv = report.book.lookup(zobrist_key(&board)).unwrap();
        assert_eq!(mv.from(), "e2".parse().unwrap());
        assert_eq!(mv.to(), "e4".parse().unwrap());
    }

    #[test]
    fn line_missing_a_field_is_malformed() {
        let report = OpeningBook::load(&format!("{STARTING_FEN},w\n"));
        assert_eq!(report.malformed_lines, 1);
        assert!(report.book.is_empty());
    }

    #[test]
    fn line_with_invalid_fen_is_malformed() {
        let report = OpeningBook::load("not-a-fen,w,e2e4\n");
        assert_eq!(report.malformed_lines, 1);
    }

    #[test]
    fn line_whose_move_is_not_legal_is_malformed() {
        let report = OpeningBook::load(&format!("{STARTING_FEN},w,e2e5\n"));
        assert_eq!(report.malformed_lines, 1);
        assert!(report.book.is_empty());
    }

    #[test]
    fn line_with_wrong_side_to_move_is_malformed() {
        let report = OpeningBook::load(&format!("{STARTING_FEN},b,e2e4\n"));
        assert_eq!(report.malformed_lines, 1);
    }

    #[test]
    fn promotion_book_move_parses_correctly() {
        let fen = "4k3/P7/8/8/8/8/8/4K3 w - -";
        let report = OpeningBook::load(&format!("{fen},w,a7a8q\n"));
        assert_eq!(report.malformed_lines, 0);
        let board = Board::from_fen(fen).unwrap();
        let mv = report.book.lookup(zobrist_key(&board)).unwrap();
        assert_eq!(mv.promoted(), Some(Piece::Queen));
    }

    #[test]
    fn blank_lines_are_skipped_without_counting_as_malformed() {
        let text = format!("\n{STARTING_FEN},w,e2e4\n\n");
        let report = OpeningBook::load(&text);
        assert_eq!(report.malformed_lines, 0);
        assert_eq!(report.book.len(), 1);
    }
}
