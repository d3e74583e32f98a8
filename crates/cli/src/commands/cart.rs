//! Cart commands.
//!
//! Each command runs one mutation against the injected [`CartStore`] and
//! prints the resulting cart, so the persisted record and the displayed
//! state always agree.

use marketplace_cart::{CartError, CartStore, KeyValueStore};
use marketplace_core::{CartState, NewCartItem, ProductId};

/// Print the current cart contents.
pub fn show<S: KeyValueStore>(cart: &CartStore<S>) {
    render(&cart.products());
}

/// Add a product and print the updated cart.
pub async fn add<S: KeyValueStore>(
    cart: &CartStore<S>,
    product: NewCartItem,
) -> Result<(), CartError> {
    let state = cart.add_to_cart(product).await?;
    render(&state);
    Ok(())
}

/// Increment a line and print the updated cart.
pub async fn increment<S: KeyValueStore>(
    cart: &CartStore<S>,
    id: &ProductId,
) -> Result<(), CartError> {
    let state = cart.increment(id).await?;
    render(&state);
    Ok(())
}

/// Decrement a line and print the updated cart.
pub async fn decrement<S: KeyValueStore>(
    cart: &CartStore<S>,
    id: &ProductId,
) -> Result<(), CartError> {
    let state = cart.decrement(id).await?;
    render(&state);
    Ok(())
}

/// Remove a line and print the updated cart.
pub async fn remove<S: KeyValueStore>(
    cart: &CartStore<S>,
    id: &ProductId,
) -> Result<(), CartError> {
    let state = cart.remove(id).await?;
    render(&state);
    Ok(())
}

/// Render the cart as a small table on stdout.
#[allow(clippy::print_stdout)]
fn render(state: &CartState) {
    if state.is_empty() {
        println!("Cart is empty.");
        return;
    }

    println!("{:<16} {:<24} {:>8} {:>10}", "ID", "TITLE", "QTY", "PRICE");
    for item in state.items() {
        println!(
            "{:<16} {:<24} {:>8} {:>10}",
            item.id, item.title, item.quantity, item.price
        );
    }
    println!(
        "{} line(s), {} item(s) total",
        state.len(),
        state.total_quantity()
    );
}
