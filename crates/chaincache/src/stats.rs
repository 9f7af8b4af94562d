//! Cache statistics tracking

/// Counters for cache traffic
///
/// Only `get` and `put` are counted; `peek`, `contains` and iteration
/// leave the counters alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    inserts: u64,
    updates: u64,
    evictions: u64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Lookups that found their key
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that did not find their key
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Puts that added a new key
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Puts that overwrote an existing key
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Entries dropped to make room for an insert
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let mut stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_insert();
        stats.record_update();
        stats.record_eviction();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.inserts(), 1);
        assert_eq!(stats.updates(), 1);
        assert_eq!(stats.evictions(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = CacheStats::new();

        stats.record_hit();
        stats.record_miss();
        stats.reset();

        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hit_ratio(), 0.0);
    }
}
