//! Precomputed jump tables and sliding-piece rays.
//!
//! Knight/king offsets and pawn-attack squares are fixed per square, so they
//! are computed once behind `once_cell::sync::Lazy` rather than recomputed
//! on every lookup.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square};

fn knight_offsets() -> [(i32, i32); 8] {
    [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ]
}

fn king_offsets() -> [(i32, i32); 8] {
    [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ]
}

fn offsets_to_table(offsets: &[(i32, i32)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for idx in 0..64 {
        let sq = Square::from_index(idx);
        let (rank, file) = (sq.rank() as i32, sq.file() as i32);
        let mut bb = Bitboard::EMPTY;
        for (dr, df) in offsets {
            let (r, f) = (rank + dr, file + df);
            if (0..8).contains(&r) && (0..8).contains(&f) {
                bb = bb.or(Bitboard::from_square(Square::new(r as usize, f as usize)));
            }
        }
        table[idx] = bb;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| offsets_to_table(&knight_offsets()));
pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| offsets_to_table(&king_offsets()));

/// Pawn capture targets, indexed `[color][square]`.
pub(crate) static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    for idx in 0..64 {
        let sq = Square::from_index(idx);
        let (rank, file) = (sq.rank() as i32, sq.file() as i32);
        for (color_idx, dr) in [(0usize, 1i32), (1usize, -1i32)] {
            let mut bb = Bitboard::EMPTY;
            for df in [-1i32, 1i32] {
                let (r, f) = (rank + dr, file + df);
                if (0..8).contains(&r) && (0..8).contains(&f) {
                    bb = bb.or(Bitboard::from_square(Square::new(r as usize, f as usize)));
                }
            }
            table[color_idx][idx] = bb;
        }
    }
    table
});

#[must_use]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.as_index()]
}

/// The eight ray directions, as (delta-rank, delta-file), split by kind.
pub(crate) const ORTHOGONAL_DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk outward from `sq` in direction `(dr, df)` until (and including) the
/// first occupied square — a blocker stops the ray, whether friend or foe;
/// the caller filters out friendly-occupied destinations afterward.
#[must_use]
pub(crate) fn slide(sq: Square, dir: (i32, i32), occupied: Bitboard) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    let (mut rank, mut file) = (sq.rank() as i32, sq.file() as i32);
    loop {
        rank += dir.0;
        file += dir.1;
        if !(0..8).contains(&rank) || !(0..8).contains(&file) {
            break;
        }
        let target = Square::new(rank as usize, file as usize);
        bb = bb.or(Bitboard::from_square(target));
        if occupied.contains(target) {
            break;
        }
    }
    bb
}

/// The full attack set of a slider on `sq` along `dirs`, stopping at blockers.
#[must_use]
pub(crate) fn slider_attacks(sq: Square, dirs: &[(i32, i32)], occupied: Bitboard) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |acc, &dir| acc.or(slide(sq, dir, occupied)))
}
