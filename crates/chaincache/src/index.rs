//! Key index: a fixed-size hash table with separate chaining
//!
//! The bucket table is sized once, to the next power of two at or above
//! twice the cache capacity, and never resized. Chains are threaded through
//! the arena nodes via `chain_prev`/`chain_next`.

use crate::arena::{Arena, NodeId};

/// Largest table the 32-bit hash can address
const MAX_TABLE_SIZE: u32 = 1 << 30;

/// Largest accepted cache capacity (twice this must fit [`MAX_TABLE_SIZE`])
pub const MAX_CAPACITY: usize = (MAX_TABLE_SIZE / 2) as usize;

/// Spread the high half of the key's bits into the low half
///
/// Bucket selection only looks at the low bits, so keys that differ only
/// above the mask would otherwise all land in the same bucket.
pub fn hash(key: i32) -> u32 {
    let h = key as u32;
    h ^ (h >> 16)
}

/// Smallest power of two greater than or equal to `n`
///
/// Fills every bit below the highest set bit of `n - 1`, then adds one.
/// Values of `n` at or below 1 give 1; the result is capped at 2^30.
pub fn table_size_for(n: u32) -> u32 {
    if n <= 1 {
        return 1;
    }
    let mut n = n - 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    if n >= MAX_TABLE_SIZE {
        MAX_TABLE_SIZE
    } else {
        n + 1
    }
}

/// Chained hash table mapping keys to arena nodes
#[derive(Debug)]
pub(crate) struct Index {
    table: Box<[Option<NodeId>]>,
    mask: u32,
}

impl Index {
    /// Build a table for `capacity` entries
    ///
    /// `capacity` must already be validated against [`MAX_CAPACITY`].
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0 && capacity <= MAX_CAPACITY);
        let len = table_size_for((capacity * 2) as u32);
        Self {
            table: vec![None; len as usize].into_boxed_slice(),
            mask: len - 1,
        }
    }

    /// Number of buckets
    pub(crate) fn table_len(&self) -> usize {
        self.table.len()
    }

    pub(crate) fn bucket_of(&self, key: i32) -> usize {
        (hash(key) & self.mask) as usize
    }

    /// Find the node holding `key`
    pub(crate) fn get(&self, arena: &Arena, key: i32) -> Option<NodeId> {
        let mut cursor = self.table[self.bucket_of(key)];
        while let Some(id) = cursor {
            let node = &arena[id];
            if node.key == key {
                return Some(id);
            }
            cursor = node.chain_next;
        }
        None
    }

    /// Append a node to the end of its bucket chain
    ///
    /// The node's key must not already be present.
    pub(crate) fn insert(&mut self, arena: &mut Arena, id: NodeId) {
        let bucket = self.bucket_of(arena[id].key);
        let Some(mut last) = self.table[bucket] else {
            self.table[bucket] = Some(id);
            return;
        };
        while let Some(next) = arena[last].chain_next {
            last = next;
        }
        arena[last].chain_next = Some(id);
        let node = &mut arena[id];
        node.chain_prev = Some(last);
        node.chain_next = None;
    }

    /// Unlink a node from its bucket chain
    pub(crate) fn remove(&mut self, arena: &mut Arena, id: NodeId) {
        let (prev, next, key) = {
            let node = &arena[id];
            (node.chain_prev, node.chain_next, node.key)
        };

        match prev {
            Some(prev_id) => arena[prev_id].chain_next = next,
            None => {
                let bucket = self.bucket_of(key);
                debug_assert_eq!(self.table[bucket], Some(id), "chain head mismatch");
                self.table[bucket] = next;
            }
        }
        if let Some(next_id) = next {
            arena[next_id].chain_prev = prev;
        }

        let node = &mut arena[id];
        node.chain_prev = None;
        node.chain_next = None;
    }

    /// Empty every bucket
    pub(crate) fn clear(&mut self) {
        self.table.iter_mut().for_each(|head| *head = None);
    }

    /// Node ids in one bucket, head first
    #[cfg(test)]
    pub(crate) fn chain(&self, arena: &Arena, bucket: usize) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut cursor = self.table[bucket];
        while let Some(id) = cursor {
            ids.push(id);
            cursor = arena[id].chain_next;
        }
        ids
    }
}
