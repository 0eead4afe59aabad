//! Alpha-beta search: opening-book lookup, transposition-table consultation,
//! and depth-limited minimax driven by the static evaluator.

use crate::board::types::NULL_MOVE;
use crate::board::{evaluate, Board, Color, Move};
use crate::book::OpeningBook;
use crate::transposition_table::{Bound, TranspositionTable, TtEntry};
use crate::zobrist::zobrist_key;

/// Caller-supplied search parameters, as an explicit struct rather than
/// environment variables or process-global configuration.
pub struct SearchConfig<'a> {
    pub depth: u32,
    pub book: Option<&'a OpeningBook>,
}

/// Why `search` returned the evaluation and move it did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// An opening-book hit at the root, returned without searching. The
    /// `0.0` evaluation attached to a book move internally is a known
    /// calibration gap, not a real score — this variant lets a caller
    /// recognize that and avoid comparing it against a `Searched` sibling.
    Book { mv: Move },
    /// A full alpha-beta search to the configured depth.
    Searched { value: f64, mv: Move },
}

/// Search from `board`'s current position. `board` is restored to its
/// original state before returning: every `make` during the search is
/// paired with an `unmake`.
pub fn search(board: &mut Board, tt: &mut TranspositionTable, config: &SearchConfig) -> SearchOutcome {
    if let Some(mv) = config.book.and_then(|book| book.lookup(zobrist_key(board))) {
        #[cfg(feature = "logging")]
        log::info!("book hit at root, playing {mv} without searching");
        return SearchOutcome::Book { mv };
    }

    let side = board.side_to_move();
    let (value, mv) = minimax(board, config.depth, side, f64::NEG_INFINITY, f64::INFINITY, tt, config.book);
    SearchOutcome::Searched { value, mv }
}

/// `minimax(position, depth, side, α, β) → (evaluation, best_move)`.
///
/// Legal moves are regenerated at every node rather than snapshotted and
/// restored around each child — simplest, and there is no shared cache for
/// a child to clobber.
fn minimax(
    board: &mut Board,
    depth: u32,
    side: Color,
    mut alpha: f64,
    mut beta: f64,
    tt: &mut TranspositionTable,
    book: Option<&OpeningBook>,
) -> (f64, Move) {
    #[cfg(feature = "logging")]
    log::trace!("entering node at depth {depth} for {side:?}");

    if depth == 0 {
        return (evaluate(board), NULL_MOVE);
    }

    if let Some(mv) = book.and_then(|book| book.lookup(zobrist_key(board))) {
        return (0.0, mv);
    }

    let key = zobrist_key(board);
    if let Some(entry) = tt.probe(key, depth) {
        #[cfg(feature = "logging")]
        log::debug!("transposition hit at depth {depth}, reusing stored value");
        return (entry.value, entry.best_move);
    }

    let mut legal = board.legal_moves();
    if legal.is_empty() {
        // Checkmate or stalemate: no recursion is possible, so fall back to
        // the static evaluator, which already accounts for check.
        return (evaluate(board), NULL_MOVE);
    }
    legal.sort_by(|a, b| b.score.cmp(&a.score));

    let mut best_move = legal[0].mv;
    let mut best_value = if side == Color::White { f64::NEG_INFINITY } else { f64::INFINITY };

    for scored in &legal {
        let mv = scored.mv;
        board.make(mv).expect("a legal move must always apply cleanly");
        let (child_value, _) = minimax(board, depth - 1, side.opponent(), alpha, beta, tt, book);
        board.unmake().expect("a just-made move must always unmake cleanly");

        if side == Color::White {
            if child_value > best_value {
                best_value = child_value;
                best_move = mv;
            }
            alpha = alpha.max(best_value);
        } else {
            if child_value < best_value {
                best_value = child_value;
                best_move = mv;
            }
            beta = beta.min(best_value);
        }

        if beta <= alpha {
            break;
        }
    }

    tt.store(TtEntry { key, depth, value: best_value, bound: Bound::Exact, best_move });

    (best_value, best_move)
}
