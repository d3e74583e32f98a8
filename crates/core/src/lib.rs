//! Marketplace Core - Shared cart types library.
//!
//! This crate provides the cart data model used across all Marketplace
//! components:
//! - `cart` - Stateful cart container and persistence
//! - `cli` - Command-line cart management
//!
//! # Architecture
//!
//! The core crate contains only types and pure state derivations - no I/O,
//! no storage access, no async. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `ProductId`, `CartItem`, and the [`types::CartState`]
//!   container with its derivation operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
