//! LRU (Least Recently Used) cache implementation
//!
//! Every entry is one arena node that is linked into a bucket chain of the
//! [`Index`] and into the [`RecencyList`] at the same time. Both structures
//! always hold the same set of node ids.

use tracing::{debug, trace};

use crate::arena::{Arena, NodeId};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::index::Index;
use crate::recency::{self, RecencyList};
use crate::stats::CacheStats;

/// LRU cache with fixed capacity over `i32` keys and values
#[derive(Debug)]
pub struct LruCache {
    arena: Arena,
    index: Index,
    recency: RecencyList,
    capacity: usize,
    stats: CacheStats,
}

impl LruCache {
    /// Create a new LRU cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of live entries
    ///
    /// # Returns
    /// * `Err(Error::InvalidCapacity)` - capacity is zero
    /// * `Err(Error::CapacityTooLarge)` - capacity exceeds [`MAX_CAPACITY`](crate::MAX_CAPACITY)
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(&CacheConfig::new(capacity))
    }

    /// Create a cache from a [`CacheConfig`]
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;

        let index = Index::new(config.capacity);
        debug!(
            capacity = config.capacity,
            table_len = index.table_len(),
            "lru cache created"
        );

        Ok(Self {
            arena: Arena::with_capacity(config.capacity),
            index,
            recency: RecencyList::new(),
            capacity: config.capacity,
            stats: CacheStats::new(),
        })
    }

    /// Get a value and mark the key as most recently used
    pub fn get(&mut self, key: i32) -> Option<i32> {
        match self.index.get(&self.arena, key) {
            Some(id) => {
                self.recency.promote(&mut self.arena, id);
                self.stats.record_hit();
                Some(self.arena[id].value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or overwrite a key, marking it as most recently used
    ///
    /// # Returns
    /// * `Some((key, value))` - the least recently used entry, evicted to make room
    /// * `None` - nothing was evicted
    pub fn put(&mut self, key: i32, value: i32) -> Option<(i32, i32)> {
        if let Some(id) = self.index.get(&self.arena, key) {
            self.arena[id].value = value;
            self.recency.promote(&mut self.arena, id);
            self.stats.record_update();
            return None;
        }

        let evicted = if self.len() >= self.capacity {
            self.pop_lru()
        } else {
            None
        };
        if let Some((evicted_key, _)) = evicted {
            self.stats.record_eviction();
            trace!(key = evicted_key, "evicted least recently used entry");
        }

        let id = self.arena.alloc(key, value);
        self.index.insert(&mut self.arena, id);
        self.recency.push_back(&mut self.arena, id);
        self.stats.record_insert();

        evicted
    }

    /// Get a value without touching recency
    pub fn peek(&self, key: i32) -> Option<i32> {
        self.index
            .get(&self.arena, key)
            .map(|id| self.arena[id].value)
    }

    /// Check whether a key is cached, without touching recency
    pub fn contains(&self, key: i32) -> bool {
        self.index.get(&self.arena, key).is_some()
    }

    /// Remove a key from the cache
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let id = self.index.get(&self.arena, key)?;
        self.index.remove(&mut self.arena, id);
        self.recency.unlink(&mut self.arena, id);
        Some(self.arena.free(id).value)
    }

    /// Remove and return the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(i32, i32)> {
        let id = self.recency.evict_head(&mut self.arena)?;
        self.index.remove(&mut self.arena, id);
        let node = self.arena.free(id);
        Some((node.key, node.value))
    }

    /// The entry that the next insert into a full cache would evict
    pub fn peek_lru(&self) -> Option<(i32, i32)> {
        self.recency.head().map(|id| self.entry(id))
    }

    /// Get the current size of the cache
    pub fn len(&self) -> usize {
        self.arena.live()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of hash buckets, fixed at construction
    pub fn table_len(&self) -> usize {
        self.index.table_len()
    }

    /// Clear the cache
    ///
    /// Capacity, table size and statistics are kept.
    pub fn clear(&mut self) {
        let dropped = self.len();
        self.index.clear();
        self.recency.clear();
        self.arena.clear();
        debug!(dropped, "lru cache cleared");
    }

    /// Iterate `(key, value)` pairs from least to most recently used
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            inner: self.recency.iter(&self.arena),
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zero all statistics counters
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    fn entry(&self, id: NodeId) -> (i32, i32) {
        let node = &self.arena[id];
        (node.key, node.value)
    }

    /// Panic if the index, the recency list and the arena disagree
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        let live = self.arena.live();
        assert!(live <= self.capacity, "size {live} over capacity {}", self.capacity);

        // Recency list: well-formed back links, exactly the live nodes
        let mut prev = None;
        let mut seen = 0;
        for id in self.recency.iter(&self.arena) {
            assert!(self.arena.is_live(id), "recency list holds vacant slot {id}");
            assert_eq!(self.arena[id].recency_prev, prev, "bad recency_prev on {id}");
            prev = Some(id);
            seen += 1;
            assert!(seen <= live, "recency list has a cycle");
        }
        assert_eq!(self.recency.tail(), prev, "tail is not the last node");
        assert_eq!(seen, live, "recency list length differs from size");
        assert_eq!(self.recency.head().is_none(), live == 0);

        // Index: every chain member hashes to its bucket and is findable
        let mut chained = 0;
        for bucket in 0..self.index.table_len() {
            let mut prev = None;
            for id in self.index.chain(&self.arena, bucket) {
                let node = &self.arena[id];
                assert_eq!(self.index.bucket_of(node.key), bucket, "node {id} in wrong bucket");
                assert_eq!(node.chain_prev, prev, "bad chain_prev on {id}");
                assert_eq!(self.index.get(&self.arena, node.key), Some(id));
                prev = Some(id);
                chained += 1;
            }
        }
        assert_eq!(chained, live, "index size differs from recency list");
    }
}

/// Iterator over cache entries, least recently used first
pub struct Iter<'a> {
    arena: &'a Arena,
    inner: recency::Iter<'a>,
}

impl Iterator for Iter<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        self.inner.next().map(|id| {
            let node = &self.arena[id];
            (node.key, node.value)
        })
    }
}

impl<'a> IntoIterator for &'a LruCache {
    type Item = (i32, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
