//! Persisted-mirror and restart-recovery scenarios.
//!
//! The durability contract: after any successful mutation, reading the
//! store at the fixed key and deserializing yields a state structurally
//! equal to the in-memory one, and a fresh `CartStore` over the same
//! backing directory recovers that state.

use marketplace_cart::{CART_STORAGE_KEY, CartError, CartStore, FileStore, KeyValueStore};
use marketplace_core::{CartState, ProductId};
use marketplace_integration_tests::product;

async fn open_store(dir: &tempfile::TempDir) -> FileStore {
    FileStore::open(dir.path())
        .await
        .expect("file store should open")
}

/// Read the persisted record back through the raw store interface.
async fn persisted_state(store: &FileStore) -> CartState {
    let raw = store
        .get(CART_STORAGE_KEY)
        .await
        .expect("get")
        .expect("record should exist");
    serde_json::from_str(&raw).expect("record should deserialize")
}

#[tokio::test]
async fn persisted_record_mirrors_memory_after_every_mutation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_store(&dir).await;
    let cart = CartStore::open(&store).await.expect("open");

    cart.add_to_cart(product("a")).await.expect("add");
    assert_eq!(persisted_state(&store).await, *cart.products());

    cart.add_to_cart(product("b")).await.expect("add");
    assert_eq!(persisted_state(&store).await, *cart.products());

    cart.increment(&ProductId::from("a")).await.expect("inc");
    assert_eq!(persisted_state(&store).await, *cart.products());

    cart.decrement(&ProductId::from("b")).await.expect("dec");
    assert_eq!(persisted_state(&store).await, *cart.products());
}

#[tokio::test]
async fn restart_recovers_the_persisted_cart() {
    let dir = tempfile::tempdir().expect("tempdir");

    // "First process": build up some state, then drop everything.
    {
        let cart = CartStore::open(open_store(&dir).await).await.expect("open");
        cart.add_to_cart(product("a")).await.expect("add");
        cart.add_to_cart(product("b")).await.expect("add");
        cart.add_to_cart(product("a")).await.expect("add");
    }

    // "Second process": same data directory, fresh store and cart.
    let cart = CartStore::open(open_store(&dir).await).await.expect("open");
    let state = cart.products();
    assert_eq!(state.len(), 2);
    assert_eq!(state.find(&ProductId::from("a")).expect("a").quantity, 2);
    assert_eq!(state.find(&ProductId::from("b")).expect("b").quantity, 1);

    // Recovered state accepts further mutations as usual.
    let state = cart.decrement(&ProductId::from("b")).await.expect("dec");
    assert!(state.find(&ProductId::from("b")).is_none());
}

#[tokio::test]
async fn empty_directory_opens_an_empty_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cart = CartStore::open(open_store(&dir).await).await.expect("open");
    assert!(cart.products().is_empty());
}

#[tokio::test]
async fn corrupt_record_fails_open_loudly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_store(&dir).await;
    store
        .set(CART_STORAGE_KEY, "{\"definitely\": \"not a cart\"}")
        .await
        .expect("set");

    let err = CartStore::open(&store)
        .await
        .expect_err("open should fail on a corrupt record");
    assert!(matches!(err, CartError::Corrupt { .. }));
}

#[tokio::test]
async fn zero_quantity_record_is_rejected_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_store(&dir).await;
    let raw = r#"[{"id":"a","title":"T","image_url":"u","price":"10.00","quantity":0}]"#;
    store.set(CART_STORAGE_KEY, raw).await.expect("set");

    let err = CartStore::open(&store)
        .await
        .expect_err("open should reject a zero quantity");
    match err {
        CartError::Corrupt { reason, .. } => assert!(reason.contains("zero quantity")),
        other => panic!("expected Corrupt, got {other:?}"),
    }
}

#[tokio::test]
async fn carts_with_distinct_keys_share_a_backend_without_interfering() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = std::sync::Arc::new(open_store(&dir).await);

    let cart_a = CartStore::open_at(std::sync::Arc::clone(&store), "@marketplace:alice")
        .await
        .expect("open");
    let cart_b = CartStore::open_at(std::sync::Arc::clone(&store), "@marketplace:bob")
        .await
        .expect("open");

    cart_a.add_to_cart(product("a")).await.expect("add");
    assert!(cart_b.products().is_empty());

    let cart_b = CartStore::open_at(store, "@marketplace:bob")
        .await
        .expect("reopen");
    assert!(cart_b.products().is_empty());
}
