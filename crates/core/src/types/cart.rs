//! The cart state container and its derivation operations.
//!
//! `CartState` is an ordered, id-unique sequence of [`CartItem`]. It is
//! immutable from the caller's point of view: every operation derives a
//! new state from the previous one, which is what lets the stateful layer
//! persist the next state before publishing it.
//!
//! # Invariants
//!
//! - At most one item per [`ProductId`] at any time.
//! - `quantity >= 1` for every item present; an item whose quantity would
//!   drop below 1 is removed entirely, never retained at 0.
//! - Insertion order is preserved by [`CartState::with_added`] and stable
//!   under increment/decrement (no re-sorting).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CartItem, NewCartItem, ProductId};

/// Invariant violations detected when validating a deserialized state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartStateError {
    /// Two items share the same product id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// An item has quantity 0; items at 0 must be removed, not stored.
    #[error("zero quantity for product id: {0}")]
    ZeroQuantity(ProductId),
}

/// Ordered, id-unique collection of cart items.
///
/// Serializes transparently as a JSON array of items, which is the exact
/// shape of the persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Create an empty cart state.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines (the cart badge number).
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Derive the state after adding a product.
    ///
    /// If an item with the same id already exists, its quantity is bumped
    /// by 1 in place; otherwise the product is appended as a new line with
    /// quantity 1. Never produces a duplicate id.
    #[must_use]
    pub fn with_added(&self, product: NewCartItem) -> Self {
        let mut items = self.items.clone();
        match items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => existing.quantity += 1,
            None => items.push(product.with_quantity(1)),
        }
        Self { items }
    }

    /// Derive the state after incrementing the line matching `id`.
    ///
    /// An unknown id leaves the state unchanged (safe no-op).
    #[must_use]
    pub fn with_incremented(&self, id: &ProductId) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == *id {
                    CartItem {
                        quantity: item.quantity + 1,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Derive the state after decrementing the line matching `id`.
    ///
    /// A line decremented below 1 is removed entirely. An unknown id
    /// leaves the state unchanged (safe no-op).
    #[must_use]
    pub fn with_decremented(&self, id: &ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter_map(|item| {
                if item.id == *id {
                    let quantity = item.quantity.saturating_sub(1);
                    (quantity >= 1).then(|| CartItem {
                        quantity,
                        ..item.clone()
                    })
                } else {
                    Some(item.clone())
                }
            })
            .collect();
        Self { items }
    }

    /// Derive the state with the line matching `id` removed wholly,
    /// regardless of its quantity. An unknown id is a safe no-op.
    #[must_use]
    pub fn with_removed(&self, id: &ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != *id)
            .cloned()
            .collect();
        Self { items }
    }

    /// Check the id-uniqueness and positive-quantity invariants.
    ///
    /// States built through the derivation operations always satisfy them;
    /// this exists to validate data loaded from storage before trusting it.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in item order.
    pub fn validate(&self) -> Result<(), CartStateError> {
        let mut seen = std::collections::HashSet::new();
        for item in &self.items {
            if !seen.insert(&item.id) {
                return Err(CartStateError::DuplicateId(item.id.clone()));
            }
            if item.quantity == 0 {
                return Err(CartStateError::ZeroQuantity(item.id.clone()));
            }
        }
        Ok(())
    }
}

impl From<Vec<CartItem>> for CartState {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}
