//! Newtype product identifier.
//!
//! Product ids come from an upstream catalog and are opaque to the cart:
//! they are compared for equality and nothing else. The newtype prevents
//! accidentally mixing them with other strings (titles, image URLs).

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a product.
///
/// Serializes transparently as the underlying string, so the persisted
/// record stores a plain `"id"` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_equality() {
        assert_eq!(ProductId::from("abc"), ProductId::new("abc"));
        assert_ne!(ProductId::from("abc"), ProductId::from("abd"));
    }

    #[test]
    fn test_product_id_display() {
        let id = ProductId::from("prod-42");
        assert_eq!(id.to_string(), "prod-42");
        assert_eq!(id.as_str(), "prod-42");
    }
}
