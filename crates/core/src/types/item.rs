//! Cart line items.
//!
//! A [`CartItem`] is one product line in the cart: the product descriptor
//! plus a positive quantity. Callers never supply a quantity directly -
//! [`NewCartItem`] is the quantity-less descriptor accepted by
//! `add_to_cart`, and the quantity is always established by the cart
//! operations themselves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One product line in the cart.
///
/// `price` is opaque to the cart core: it is carried for display and
/// persisted losslessly, but never validated or used in arithmetic here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Opaque unique product identifier (equality key).
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL (opaque string).
    pub image_url: String,
    /// Unit price.
    pub price: Decimal,
    /// Count of this product in the cart. Always >= 1 while the item is
    /// present; an item that would drop below 1 is removed entirely.
    pub quantity: u32,
}

/// A product descriptor without a quantity, as supplied to `add_to_cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Opaque unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price.
    pub price: Decimal,
}

impl NewCartItem {
    /// Turn the descriptor into a cart line with the given quantity.
    #[must_use]
    pub fn with_quantity(self, quantity: u32) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> NewCartItem {
        NewCartItem {
            id: ProductId::from("a"),
            title: "Widget".to_string(),
            image_url: "https://example.com/widget.png".to_string(),
            price: Decimal::new(1099, 2),
        }
    }

    #[test]
    fn test_with_quantity_preserves_fields() {
        let item = descriptor().with_quantity(1);
        assert_eq!(item.id, ProductId::from("a"));
        assert_eq!(item.title, "Widget");
        assert_eq!(item.image_url, "https://example.com/widget.png");
        assert_eq!(item.price, Decimal::new(1099, 2));
        assert_eq!(item.quantity, 1);
    }
}
