//! Core types for the Marketplace cart.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod id;
pub mod item;

pub use cart::{CartState, CartStateError};
pub use id::ProductId;
pub use item::{CartItem, NewCartItem};
