//! `crab_chess`: a bitboard chess core — position representation, pseudo-legal
//! move generation with legality filtering, reversible make/unmake, a static
//! evaluator, and alpha-beta search over a Zobrist-keyed transposition table
//! and opening book.
//!
//! The crate is single-threaded and synchronous end to end: no operation
//! here blocks on I/O or spawns a thread. A caller wanting cancellation or
//! time limits interleaves its own cooperative check between `search`
//! calls; this core does not require it.

#![warn(clippy::all)]

//! Enable the `logging` feature to route `search`'s node-boundary and
//! cutoff diagnostics through the `log` crate; without it, the engine emits
//! nothing and pays no logging cost.

pub mod board;
pub mod book;
pub mod perft;
pub mod search;
pub mod transposition_table;
pub mod zobrist;

pub use board::{Board, Color, FenError, GameStatus, Move, MoveError, Piece, Square};
pub use book::OpeningBook;
pub use search::{search, SearchConfig, SearchOutcome};
pub use transposition_table::TranspositionTable;
pub use zobrist::zobrist_key;
