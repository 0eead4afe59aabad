//! Property test: any sequence of legal moves from the starting position is
//! fully reversible via `unmake`, in reverse order.

use crab_chess::Board;
use proptest::prelude::*;

fn play_random_legal_line(board: &mut Board, choices: &[u32]) -> usize {
    let mut played = 0;
    for &choice in choices {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[(choice as usize) % moves.len()].mv;
        board.make(mv).expect("a legal move must always apply cleanly");
        played += 1;
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_legal_lines_are_fully_reversible(choices in prop::collection::vec(0u32..64, 1..8)) {
        let mut board = Board::starting_position();
        let starting = format!("{board:?}");

        let played = play_random_legal_line(&mut board, &choices);

        for _ in 0..played {
            board.unmake().expect("a just-made move must always unmake cleanly");
        }

        prop_assert_eq!(format!("{board:?}"), starting);
    }
}
