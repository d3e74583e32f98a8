//! Unified error handling for cart persistence.
//!
//! Every persistence call is wrapped in an explicit result: a failed write
//! leaves both the persisted record and the in-memory state untouched and
//! surfaces here. Each operation is attempted exactly once - there is no
//! retry logic anywhere in the cart.

use thiserror::Error;

use crate::store::StorageError;

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// The underlying key-value store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted record exists but is malformed or violates the cart
    /// invariants (duplicate ids, zero quantity). Loading fails loudly
    /// instead of silently publishing an invalid state.
    #[error("corrupt cart record at {key}: {reason}")]
    Corrupt {
        /// Storage key the record was read from.
        key: String,
        /// What failed: a deserialization error or an invariant violation.
        reason: String,
    },

    /// The next state could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_error_display() {
        let err = CartError::Corrupt {
            key: "@marketplace:products".to_string(),
            reason: "duplicate product id: a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "corrupt cart record at @marketplace:products: duplicate product id: a"
        );
    }
}
