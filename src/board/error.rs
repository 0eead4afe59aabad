//! Error types produced by the board and its collaborators.

use std::fmt;

/// The FEN string did not conform to the accepted subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four required whitespace-separated fields.
    TooFewParts { found: usize },
    /// A character in the piece-placement field was not a piece letter or digit.
    InvalidPiece { char: char },
    /// A character in the castling field was not one of KQkq or `-`.
    InvalidCastling { char: char },
    /// The side-to-move field was not `w` or `b`.
    InvalidSideToMove { found: String },
    /// The en-passant field was not `-` or a valid square.
    InvalidEnPassant { found: String },
    /// A rank in the piece-placement field did not sum to exactly 8 files.
    InvalidRank { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 space-separated fields, found {found}")
            }
            FenError::InvalidPiece { char } => write!(f, "invalid piece character '{char}' in FEN"),
            FenError::InvalidCastling { char } => write!(f, "invalid castling character '{char}' in FEN"),
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => write!(f, "invalid en-passant square '{found}'"),
            FenError::InvalidRank { rank, files } => {
                write!(f, "rank {rank} has {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// A caller-supplied square pair did not name a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The source or destination string was not valid algebraic notation.
    InvalidSquare,
    /// The promotion character was not one of q, r, b, n.
    InvalidPromotion { char: char },
    /// No legal move matches the given source, destination, and promotion.
    NotLegal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare => write!(f, "invalid square notation"),
            MoveError::InvalidPromotion { char } => write!(f, "invalid promotion piece '{char}'"),
            MoveError::NotLegal => write!(f, "move is not legal in the current position"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Rank or file index out of the 0-7 range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => write!(f, "rank {rank} out of bounds (must be 0-7)"),
            SquareError::FileOutOfBounds { file } => write!(f, "file {file} out of bounds (must be 0-7)"),
            SquareError::InvalidNotation { notation } => write!(f, "invalid square notation '{notation}'"),
        }
    }
}

impl std::error::Error for SquareError {}

/// A `make`/`unmake` pair found a broken invariant.
///
/// Tests must never provoke this; it signals a bug in the engine, not bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalInconsistency {
    pub detail: String,
}

impl fmt::Display for InternalInconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal inconsistency: {}", self.detail)
    }
}

impl std::error::Error for InternalInconsistency {}
