//! Integration tests for Marketplace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - Operation sequences and cart invariants
//! - `cart_persistence` - Persisted-mirror and restart-recovery scenarios
//!
//! Tests run against real [`marketplace_cart::FileStore`] instances rooted
//! in per-test temporary directories; nothing external is required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use marketplace_core::{NewCartItem, ProductId};

/// Build a product descriptor with deterministic fields derived from `id`.
#[must_use]
pub fn product(id: &str) -> NewCartItem {
    NewCartItem {
        id: ProductId::from(id),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: Decimal::new(1999, 2),
    }
}
