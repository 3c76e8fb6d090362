//! FibCalculator: memoized Fibonacci over an explicit cache

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::memo::MemoTable;
use crate::stats::CacheStats;

/// Memoized Fibonacci calculator
///
/// Owns the memoization table and its statistics. The public API takes
/// `&self`, and the check-then-insert sequence runs entirely under the
/// write lock, so a calculator shared across threads stays consistent.
pub struct FibCalculator {
    /// Index to value table, seeded with the base cases
    table: RwLock<MemoTable>,

    /// Hit/miss/insert counters
    stats: CacheStats,
}

impl FibCalculator {
    /// Create a calculator with the base cases F(1) = F(2) = 1 already cached
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MemoTable::new()),
            stats: CacheStats::new(),
        }
    }

    /// Compute the Fibonacci number at `index`
    ///
    /// # Arguments
    /// * `index` - Position in the sequence; the defined domain is `index >= 1`
    ///
    /// # Returns
    /// * `Result<i64>` - The value at `index`
    ///
    /// # Errors
    /// * `Error::InvalidIndex` - `index` is less than 1
    /// * `Error::Overflow` - the true value exceeds `i64::MAX` (first at
    ///   index 93); indices computed before the overflow stay cached
    ///
    /// A cached index is returned without recomputation. A miss extends
    /// the cache bottom-up through `index`, storing every newly computed
    /// value, so no index is ever computed twice over the cache lifetime.
    pub fn fibonacci(&self, index: i64) -> Result<i64> {
        if index < 1 {
            return Err(Error::InvalidIndex(index));
        }

        // Try cache first
        {
            let table = self.table.read();
            if let Some(value) = table.get(index) {
                self.stats.record_hit();
                return Ok(value);
            }
        }

        // Cache miss - extend the prefix. Another thread may have filled
        // it while we held no lock; fill_to re-checks under the write lock.
        self.stats.record_miss();
        let mut table = self.table.write();
        let len_before = table.len();
        let result = table.fill_to(index);
        self.stats.record_inserts((table.len() - len_before) as u64);

        result
    }

    /// Get the number of cached entries
    pub fn cache_len(&self) -> usize {
        self.table.read().len()
    }

    /// Check whether an index is cached without computing it
    pub fn is_cached(&self, index: i64) -> bool {
        self.table.read().contains(index)
    }

    /// Get the largest index currently cached
    pub fn highest_cached(&self) -> i64 {
        self.table.read().highest()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Re-seed the cache and reset statistics
    pub fn clear_cache(&self) {
        self.table.write().clear();
        self.stats.reset();
    }
}

impl Default for FibCalculator {
    fn default() -> Self {
        Self::new()
    }
}
