//! Memoization table for Fibonacci values
//!
//! The table only grows by bottom-up fill from the seeded base cases, so
//! the populated keys always form the contiguous range `1..=highest`.

use ahash::RandomState;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Smallest index in the defined domain
const FIRST_INDEX: i64 = 1;

/// Index to value mapping, pre-seeded with F(1) = F(2) = 1
pub struct MemoTable {
    map: HashMap<i64, i64, RandomState>,
    highest: i64,
}

impl MemoTable {
    /// Create a table with the base cases already present
    pub fn new() -> Self {
        let mut table = Self {
            map: HashMap::with_hasher(RandomState::new()),
            highest: 0,
        };
        table.seed();
        table
    }

    /// Look up a cached value
    pub fn get(&self, index: i64) -> Option<i64> {
        self.map.get(&index).copied()
    }

    /// Check whether an index is cached
    pub fn contains(&self, index: i64) -> bool {
        self.map.contains_key(&index)
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Largest populated index
    pub fn highest(&self) -> i64 {
        self.highest
    }

    /// Extend the cached prefix up to `index` and return its value
    ///
    /// Each missing entry is computed from its two predecessors and stored
    /// before moving on, so a single call costs one addition per new
    /// entry. On overflow the entries computed so far are kept and the
    /// first non-representable index is reported.
    pub fn fill_to(&mut self, index: i64) -> Result<i64> {
        if index < FIRST_INDEX {
            return Err(Error::InvalidIndex(index));
        }
        if let Some(value) = self.get(index) {
            return Ok(value);
        }

        // The prefix is contiguous, so both predecessors of highest + 1
        // are present.
        let mut prev = self.map[&(self.highest - 1)];
        let mut last = self.map[&self.highest];
        for k in (self.highest + 1)..=index {
            let next = prev
                .checked_add(last)
                .ok_or(Error::Overflow { index: k })?;
            self.insert(k, next);
            prev = last;
            last = next;
        }

        Ok(last)
    }

    /// Reset the table to its freshly seeded state
    pub fn clear(&mut self) {
        self.map.clear();
        self.seed();
    }

    fn seed(&mut self) {
        self.map.insert(1, 1);
        self.map.insert(2, 1);
        self.highest = 2;
    }

    /// Insert if absent; a present key keeps its first value
    fn insert(&mut self, index: i64, value: i64) {
        self.map.entry(index).or_insert(value);
        if index > self.highest {
            self.highest = index;
        }
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_base_cases() {
        let table = MemoTable::new();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some(1));
        assert_eq!(table.get(2), Some(1));
        assert_eq!(table.highest(), 2);
    }

    #[test]
    fn test_fill_basic() {
        let mut table = MemoTable::new();

        assert_eq!(table.fill_to(10).unwrap(), 55);
        assert_eq!(table.len(), 10);
        for k in 1..=10 {
            assert!(table.contains(k));
        }
    }

    #[test]
    fn test_fill_cached_short_circuit() {
        let mut table = MemoTable::new();

        table.fill_to(8).unwrap();
        let len_before = table.len();

        // Already inside the prefix, nothing new is computed
        assert_eq!(table.fill_to(3).unwrap(), 2);
        assert_eq!(table.len(), len_before);
    }

    #[test]
    fn test_fill_invalid_index() {
        let mut table = MemoTable::new();

        assert_eq!(table.fill_to(0), Err(Error::InvalidIndex(0)));
        assert_eq!(table.fill_to(-3), Err(Error::InvalidIndex(-3)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_fill_overflow_keeps_prefix() {
        let mut table = MemoTable::new();

        assert_eq!(table.fill_to(93), Err(Error::Overflow { index: 93 }));
        assert_eq!(table.highest(), 92);
        assert_eq!(table.get(92), Some(7540113804746346429));
    }

    #[test]
    fn test_clear_reseeds() {
        let mut table = MemoTable::new();

        table.fill_to(20).unwrap();
        table.clear();

        assert_eq!(table.len(), 2);
        assert_eq!(table.highest(), 2);
        assert_eq!(table.get(20), None);
    }
}
