//! Cache configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::MAX_CAPACITY;

/// Default number of entries when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Configuration for an [`LruCache`](crate::LruCache)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Create a configuration with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check that the capacity can back a cache
    ///
    /// # Returns
    /// * `Err(Error::InvalidCapacity)` - capacity is zero
    /// * `Err(Error::CapacityTooLarge)` - capacity exceeds [`MAX_CAPACITY`]
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(Error::CapacityTooLarge {
                requested: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        assert_eq!(
            CacheConfig::new(0).validate(),
            Err(Error::InvalidCapacity(0))
        );
        assert!(CacheConfig::new(1).validate().is_ok());
        assert!(CacheConfig::new(MAX_CAPACITY).validate().is_ok());
        assert_eq!(
            CacheConfig::new(MAX_CAPACITY + 1).validate(),
            Err(Error::CapacityTooLarge {
                requested: MAX_CAPACITY + 1,
                max: MAX_CAPACITY,
            })
        );
    }

    #[test]
    fn test_config_deserialize() {
        let config: CacheConfig = serde_json::from_str(r#"{"capacity": 64}"#).unwrap();
        assert_eq!(config, CacheConfig::new(64));

        // Missing fields fall back to defaults
        let config: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CacheConfig::default());
    }
}
