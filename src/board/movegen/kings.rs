//! King pseudo-legal move generation, including castling.
//!
//! Castle destinations are deliberately excluded from the returned attack
//! bitboard: they are moves, not squares the king threatens.

use crate::board::attack_tables::KING_ATTACKS;
use crate::board::check::is_square_attacked;
use crate::board::home_rank;
use crate::board::state::Board;
use crate::board::types::{Bitboard, Color, Flag, Move, MoveList, Piece, Square};

pub(crate) fn generate(board: &Board, color: Color, list: &mut MoveList) -> Bitboard {
    let from = board.king_square(color);
    let own = board.occupancy(color);
    let opp_occ = board.occupancy(color.opponent());
    let targets = KING_ATTACKS[from.as_index()].and(own.not());

    for to in targets.iter() {
        if opp_occ.contains(to) {
            let captured = board.piece_at(to).map(|(_, p)| p);
            list.push(Move::new(from, to, Piece::King, captured, None, Flag::Capture));
        } else {
            list.push(Move::new(from, to, Piece::King, None, None, Flag::Normal));
        }
    }

    generate_castles(board, color, from, list);

    targets
}

fn generate_castles(board: &Board, color: Color, from: Square, list: &mut MoveList) {
    let opponent = color.opponent();
    let rank = home_rank(color);
    let all_occ = board.all_occupancy();

    for kingside in [true, false] {
        if !board.castle_rights().has(color, kingside) {
            continue;
        }

        let (between_files, path_files, king_to_file): (&[usize], &[usize], usize) = if kingside {
            (&[5, 6], &[4, 5, 6], 6)
        } else {
            (&[1, 2, 3], &[4, 3, 2], 2)
        };

        let squares_clear = between_files
            .iter()
            .all(|&file| !all_occ.contains(Square::new(rank, file)));
        if !squares_clear {
            continue;
        }

        let path_safe = path_files
            .iter()
            .all(|&file| !is_square_attacked(board, Square::new(rank, file), opponent));
        if !path_safe {
            continue;
        }

        let king_to = Square::new(rank, king_to_file);
        list.push(Move::new(from, king_to, Piece::King, None, None, Flag::Castle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board as PublicBoard;

    #[test]
    fn both_castles_available_with_clear_path() {
        let board = PublicBoard::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq -").unwrap();
        let mut list = MoveList::new();
        generate(&board, Color::White, &mut list);
        assert!(list.iter().any(|m| m.is_castle() && m.to().to_string() == "g1"));
        assert!(list.iter().any(|m| m.is_castle() && m.to().to_string() == "c1"));
    }

    #[test]
    fn castle_blocked_when_path_attacked() {
        // black rook on f8 attacks f1, the square the king crosses kingside.
        let board = PublicBoard::from_fen("4k2r/8/8/8/8/8/8/4K2R w K -").unwrap();
        // sanity: nothing attacks f1 here, so this should still be legal; use a direct attacker instead.
        let _ = board;
        let attacked = PublicBoard::from_fen("5r1k/8/8/8/8/8/8/4K2R w K -").unwrap();
        let mut list = MoveList::new();
        generate(&attacked, Color::White, &mut list);
        assert!(!list.iter().any(|m| m.is_castle()));
    }

    #[test]
    fn castle_blocked_when_squares_occupied() {
        let board = PublicBoard::from_fen("4k3/8/8/8/8/8/8/4K1NR w K -").unwrap();
        let mut list = MoveList::new();
        generate(&board, Color::White, &mut list);
        assert!(!list.iter().any(|m| m.is_castle()));
    }

    #[test]
    fn castle_destinations_excluded_from_attack_bitboard() {
        let board = PublicBoard::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq -").unwrap();
        let mut list = MoveList::new();
        let attacks = generate(&board, Color::White, &mut list);
        assert!(!attacks.contains("g1".parse().unwrap()));
        assert!(!attacks.contains("c1".parse().unwrap()));
    }
}
