//! # chaincache
//!
//! Fixed-capacity LRU cache for `i32` keys and values, built without
//! `std::collections` containers.
//!
//! ## Architecture
//! - **Arena**: dense vector of node slots, links are slot ids (no `unsafe`)
//! - **Index**: chained hash table, sized once to the next power of two
//!   at or above twice the capacity (O(1) average lookup)
//! - **Recency list**: intrusive doubly linked list over the same nodes,
//!   least recently used at the head (O(1) promote and evict)
//!
//! ## Example
//!
//! ```
//! use chaincache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put(1, 1);
//! cache.put(2, 2);
//! assert_eq!(cache.get(1), Some(1));
//!
//! // Key 2 is now the least recently used
//! assert_eq!(cache.put(3, 3), Some((2, 2)));
//! assert_eq!(cache.get(2), None);
//! # Ok::<(), chaincache::Error>(())
//! ```

#![warn(missing_docs)]

mod arena;
mod config;
mod error;
mod index;
mod lru;
mod recency;
mod stats;

pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use index::{hash, table_size_for, MAX_CAPACITY};
pub use lru::{Iter, LruCache};
pub use stats::CacheStats;
