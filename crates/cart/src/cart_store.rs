//! The stateful cart container.
//!
//! `CartStore` owns the authoritative [`CartState`] and keeps a persisted
//! mirror of it under a fixed key. Every mutation follows the same
//! persist-then-publish pattern: derive the next state from the current
//! one, write it to storage, and only then make it the new in-memory
//! state. A failed write therefore leaves both sides at their
//! pre-mutation values.
//!
//! Mutations are serialized through a single-writer async lock held across
//! the storage write, so two mutations issued back-to-back can never
//! derive from the same stale snapshot - the second one always sees the
//! first one's committed state.

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::debug;

use marketplace_core::{CartState, NewCartItem, ProductId};

use crate::error::{CartError, Result};
use crate::store::KeyValueStore;

/// Fixed, namespaced key the cart record is persisted under.
pub const CART_STORAGE_KEY: &str = "@marketplace:products";

/// Stateful cart container backed by a key-value store.
///
/// Construct one per application at the composition root and pass it by
/// reference (or share it behind an `Arc`) to whatever needs cart access.
pub struct CartStore<S> {
    store: S,
    key: String,
    /// Authoritative state. The lock is held across the storage write so
    /// mutations are serialized end to end.
    state: Mutex<CartState>,
    /// Snapshot handed to readers. Replaced with a fresh `Arc` on every
    /// successful mutation, so pointer-equality change detection works.
    published: RwLock<Arc<CartState>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open a cart store over `store` using the default
    /// [`CART_STORAGE_KEY`].
    ///
    /// # Errors
    ///
    /// See [`CartStore::open_at`].
    pub async fn open(store: S) -> Result<Self> {
        Self::open_at(store, CART_STORAGE_KEY).await
    }

    /// Open a cart store persisting under a caller-chosen key.
    ///
    /// Loads the persisted record before returning, so a recovered cart is
    /// visible from the first read. An absent record yields an empty cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::Storage`] if the record cannot be read.
    /// - [`CartError::Corrupt`] if the record is not valid JSON or
    ///   violates the cart invariants (duplicate ids, zero quantity).
    pub async fn open_at(store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let state = match store.get(&key).await? {
            Some(raw) => {
                let state: CartState =
                    serde_json::from_str(&raw).map_err(|e| CartError::Corrupt {
                        key: key.clone(),
                        reason: e.to_string(),
                    })?;
                state.validate().map_err(|e| CartError::Corrupt {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;
                debug!(key = %key, lines = state.len(), "recovered persisted cart");
                state
            }
            None => {
                debug!(key = %key, "no persisted cart, starting empty");
                CartState::new()
            }
        };

        Ok(Self {
            store,
            key,
            published: RwLock::new(Arc::new(state.clone())),
            state: Mutex::new(state),
        })
    }

    /// Current cart contents.
    ///
    /// Cheap to call: clones an `Arc`, not the items. The returned handle
    /// is a stable snapshot - it does not change under the caller when a
    /// mutation lands, and each successful mutation publishes a new
    /// allocation.
    #[must_use]
    pub fn products(&self) -> Arc<CartState> {
        Arc::clone(&self.published.read().expect("lock poisoned"))
    }

    /// Add a product to the cart.
    ///
    /// A product already in the cart has its quantity bumped by 1; a new
    /// product is appended with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write fails; the cart is left
    /// unchanged.
    pub async fn add_to_cart(&self, product: NewCartItem) -> Result<Arc<CartState>> {
        self.commit(move |state| state.with_added(product)).await
    }

    /// Increase the quantity of the line matching `id` by 1.
    ///
    /// An unknown id is a safe no-op (the unchanged state is still
    /// persisted and republished).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write fails; the cart is left
    /// unchanged.
    pub async fn increment(&self, id: &ProductId) -> Result<Arc<CartState>> {
        self.commit(|state| state.with_incremented(id)).await
    }

    /// Decrease the quantity of the line matching `id` by 1, removing the
    /// line entirely when it would drop below 1.
    ///
    /// An unknown id is a safe no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write fails; the cart is left
    /// unchanged.
    pub async fn decrement(&self, id: &ProductId) -> Result<Arc<CartState>> {
        self.commit(|state| state.with_decremented(id)).await
    }

    /// Remove the line matching `id` wholly, regardless of quantity.
    ///
    /// An unknown id is a safe no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write fails; the cart is left
    /// unchanged.
    pub async fn remove(&self, id: &ProductId) -> Result<Arc<CartState>> {
        self.commit(|state| state.with_removed(id)).await
    }

    /// Derive, persist, publish - under the single-writer lock.
    async fn commit<F>(&self, derive: F) -> Result<Arc<CartState>>
    where
        F: FnOnce(&CartState) -> CartState,
    {
        let mut state = self.state.lock().await;
        let next = derive(&state);

        let raw = serde_json::to_string(&next)?;
        self.store.set(&self.key, &raw).await?;

        *state = next.clone();
        let snapshot = Arc::new(next);
        *self.published.write().expect("lock poisoned") = Arc::clone(&snapshot);
        debug!(key = %self.key, lines = snapshot.len(), "cart persisted and published");
        Ok(snapshot)
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("store", &self.store)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
