//! Marketplace Cart - Persistent cart store.
//!
//! This crate owns the stateful side of the cart: the [`CartStore`]
//! container that keeps an in-memory [`marketplace_core::CartState`] in
//! sync with a single record in a local durable key-value store.
//!
//! # Architecture
//!
//! - [`store`] - The [`KeyValueStore`] trait plus the [`FileStore`] (durable,
//!   directory-backed) and [`MemoryStore`] (tests, embedding) backends
//! - [`CartStore`] - Load-on-open recovery and the three mutations
//!   (`add_to_cart`, `increment`, `decrement`), each following the
//!   persist-then-publish pattern
//!
//! The store is handed out by the composition root (the CLI binary, a test
//! harness) and passed by reference to whatever needs it. There is no
//! global instance.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cart_store;
pub mod error;
pub mod store;

pub use cart_store::{CART_STORAGE_KEY, CartStore};
pub use error::CartError;
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};
