//! Transposition table: a power-of-two array probed quadratically on
//! collision, with depth-preferred replacement so hard-won deep results
//! survive shallower overwrites.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Move;

/// Bounded probe length so a pathologically full table still terminates in
/// constant time rather than degrading to a linear scan.
const MAX_PROBE_STEPS: usize = 8;

/// Whether a stored evaluation is exact or one side of an alpha-beta cutoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    Exact,
    LowerBound,
    UpperBound,
}

/// A single transposition-table slot's contents.
#[derive(Clone, Copy, Debug)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u32,
    pub value: f64,
    pub bound: Bound,
    pub best_move: Move,
}

/// Fixed-capacity, quadratic-probed transposition table.
pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    capacity: usize,
}

impl TranspositionTable {
    /// A table with `2^capacity_log2` slots.
    #[must_use]
    pub fn new(capacity_log2: u32) -> Self {
        let capacity = 1usize << capacity_log2;
        TranspositionTable { slots: vec![None; capacity], capacity }
    }

    fn probe_sequence(&self, key: u64) -> impl Iterator<Item = usize> {
        let mask = self.capacity - 1;
        let home = (key as usize) & mask;
        (0..MAX_PROBE_STEPS).map(move |step| (home + step * step) & mask)
    }

    /// Look up `key`. A hit is only returned when its stored depth is at
    /// least `min_depth` — shallower hits are withheld so the caller falls
    /// through to a real search instead of using a weaker result.
    #[must_use]
    pub fn probe(&self, key: u64, min_depth: u32) -> Option<&TtEntry> {
        for index in self.probe_sequence(key) {
            match &self.slots[index] {
                Some(entry) if entry.key == key => {
                    return if entry.depth >= min_depth { Some(entry) } else { None };
                }
                Some(_) => continue,
                None => return None,
            }
        }
        None
    }

    /// Insert `entry` at the first slot, in quadratic-probe order, that is
    /// empty, holds the same key, or holds a shallower entry; otherwise
    /// overwrite the last probed slot.
    pub fn store(&mut self, entry: TtEntry) {
        let sequence: Vec<usize> = self.probe_sequence(entry.key).collect();
        for &index in &sequence {
            let replace = match &self.slots[index] {
                None => true,
                Some(existing) => existing.key == entry.key || existing.depth < entry.depth,
            };
            if replace {
                self.slots[index] = Some(entry);
                return;
            }
        }
        let last = *sequence.last().expect("probe sequence always yields at least one index");
        self.slots[last] = Some(entry);
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TranspositionTable {
    /// 2^16 slots: enough to see reuse at the shallow depths this core searches to,
    /// without committing callers to a size decision they have no basis for yet.
    fn default() -> Self {
        TranspositionTable::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::NULL_MOVE;

    fn entry(key: u64, depth: u32, value: f64) -> TtEntry {
        TtEntry { key, depth, value, bound: Bound::Exact, best_move: NULL_MOVE }
    }

    #[test]
    fn store_then_probe_round_trips() {
        let mut tt = TranspositionTable::new(8);
        tt.store(entry(42, 4, 1.5));
        let hit = tt.probe(42, 4).unwrap();
        assert_eq!(hit.value, 1.5);
    }

    #[test]
    fn probe_rejects_shallower_than_requested() {
        let mut tt = TranspositionTable::new(8);
        tt.store(entry(42, 2, 1.5));
        assert!(tt.probe(42, 4).is_none());
        assert!(tt.probe(42, 2).is_some());
    }

    #[test]
    fn probe_misses_for_absent_key() {
        let tt = TranspositionTable::new(8);
        assert!(tt.probe(7, 0).is_none());
    }

    #[test]
    fn deeper_entry_replaces_shallower_one_at_same_key() {
        let mut tt = TranspositionTable::new(8);
        tt.store(entry(99, 2, 1.0));
        tt.store(entry(99, 6, 2.0));
        let hit = tt.probe(99, 6).unwrap();
        assert_eq!(hit.value, 2.0);
        assert_eq!(hit.depth, 6);
    }

    #[test]
    fn shallower_entry_does_not_clobber_deeper_one_on_collision() {
        let mut tt = TranspositionTable::new(4);
        // Find two keys that collide at the same home slot to exercise probing.
        let capacity = tt.capacity() as u64;
        let a = 1u64;
        let b = a + capacity;
        tt.store(entry(a, 8, 10.0));
        tt.store(entry(b, 2, 20.0));
        assert_eq!(tt.probe(a, 8).unwrap().value, 10.0);
        assert_eq!(tt.probe(b, 2).unwrap().value, 20.0);
    }
}
