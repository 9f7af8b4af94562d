//! Error types for chaincache

use thiserror::Error;

/// Result type alias for chaincache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Capacity must be at least one entry
    #[error("Invalid capacity: {0} (must be greater than 0)")]
    InvalidCapacity(usize),

    /// Capacity would need a bucket table larger than 32-bit hashing can address
    #[error("Capacity too large: {requested} (max {max})")]
    CapacityTooLarge {
        /// Capacity that was asked for
        requested: usize,
        /// Largest accepted capacity
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidCapacity(0).to_string(),
            "Invalid capacity: 0 (must be greater than 0)"
        );

        let err = Error::CapacityTooLarge {
            requested: 1 << 30,
            max: 1 << 29,
        };
        assert_eq!(
            err.to_string(),
            "Capacity too large: 1073741824 (max 536870912)"
        );
    }
}
