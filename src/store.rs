//! Catalog View State
//!
//! Per-mount reactive store for the catalog: the fetched items, the session
//! cart and the load status. Created by the catalog view and dropped with it.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

use crate::api::ItemApi;
use crate::cart::Cart;
use crate::checkout::{CheckoutError, ORDER_PLACED_MESSAGE};
use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    /// Terminal for this mount
    NotFound,
}

/// Catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Items as fetched on mount
    pub items: Vec<Item>,
    /// Session cart, never persisted
    pub cart: Cart,
    pub status: LoadStatus,
}

pub type CatalogStore = Store<CatalogState>;

/// Fetch the item list once; any failure maps to the not-found state
pub async fn fetch_catalog<A: ItemApi>(api: &A) -> (LoadStatus, Vec<Item>) {
    match api.list_items().await {
        Ok(items) => {
            log::info!("[CATALOG] Loaded {} items", items.len());
            (LoadStatus::Loaded, items)
        }
        Err(err) => {
            log::error!("[CATALOG] Failed to load items: {}", err);
            (LoadStatus::NotFound, Vec::new())
        }
    }
}

// ========================
// Store Helper Functions
// ========================

// Writes go through `try_write`: async continuations can land after the
// view that owns the store has been unmounted, and are then dropped.

pub fn store_apply_load(store: &CatalogStore, (status, items): (LoadStatus, Vec<Item>)) {
    match store.items().try_write() {
        Some(mut current) => *current = items,
        None => {
            log::debug!("[CATALOG] View closed before items arrived, dropping load");
            return;
        }
    }
    if let Some(mut current) = store.status().try_write() {
        *current = status;
    }
}

pub fn store_add_to_cart(store: &CatalogStore, item: &Item) {
    if let Some(mut cart) = store.cart().try_write() {
        cart.add(item);
    }
}

pub fn store_set_quantity(store: &CatalogStore, item_id: u32, quantity: i64) {
    if let Some(mut cart) = store.cart().try_write() {
        cart.set_quantity(item_id, quantity);
    }
}

pub fn store_remove_line(store: &CatalogStore, item_id: u32) {
    if let Some(mut cart) = store.cart().try_write() {
        cart.remove(item_id);
    }
}

pub fn store_clear_cart(store: &CatalogStore) {
    if let Some(mut cart) = store.cart().try_write() {
        cart.clear();
    }
}

/// Apply a checkout result and return the message for the user.
/// Only a saved order empties the cart.
pub fn store_finish_checkout(
    store: &CatalogStore,
    outcome: Result<Value, CheckoutError>,
) -> &'static str {
    match outcome {
        Ok(_) => {
            // Clears the whole live cart, including lines added while the order was in flight
            store_clear_cart(store);
            ORDER_PLACED_MESSAGE
        }
        Err(err) => {
            match &err {
                CheckoutError::EmptyCart => log::warn!("[CATALOG] Checkout with empty cart"),
                CheckoutError::Api(e) => log::error!("[CATALOG] Failed to place order: {}", e),
            }
            err.user_message()
        }
    }
}

/// Cart total against the fetched prices
pub fn store_total(store: &CatalogStore) -> f64 {
    store.cart().read().total(&store.items().read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::checkout::{self, EMPTY_CART_MESSAGE, ORDER_FAILED_MESSAGE};
    use chrono::NaiveDate;
    use serde_json::json;

    fn item(id: u32, price: f64) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            description: None,
            price,
            category: None,
            image: None,
        }
    }

    /// Store with items 1 ($10) and 2 ($5) and a cart worth $20
    fn loaded_store() -> CatalogStore {
        let store = Store::new(CatalogState::default());
        store_apply_load(&store, (LoadStatus::Loaded, vec![item(1, 10.0), item(2, 5.0)]));
        store_add_to_cart(&store, &item(1, 10.0));
        store_add_to_cart(&store, &item(2, 5.0));
        store_add_to_cart(&store, &item(2, 5.0));
        store
    }

    #[test]
    fn test_writes_after_view_disposed_are_dropped() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(CatalogState::default()));
        owner.cleanup();

        store_apply_load(&store, (LoadStatus::Loaded, vec![item(1, 10.0)]));
        store_add_to_cart(&store, &item(1, 10.0));
        store_set_quantity(&store, 1, 4);
        store_remove_line(&store, 1);
        store_clear_cart(&store);
        assert_eq!(store_finish_checkout(&store, Ok(json!({"id": 1}))), ORDER_PLACED_MESSAGE);
    }

    #[tokio::test]
    async fn test_successful_checkout_empties_cart_and_total() {
        let owner = Owner::new();
        let store = owner.with(loaded_store);
        assert_eq!(owner.with(|| store_total(&store)), 20.0);

        let api = FakeApi::default();
        let cart = store.cart().get_untracked();
        let outcome = checkout::submit_order(&api, &cart, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).await;
        let message = store_finish_checkout(&store, outcome);

        assert_eq!(message, ORDER_PLACED_MESSAGE);
        assert!(store.cart().get_untracked().is_empty());
        assert_eq!(owner.with(|| store_total(&store)), 0.0);
        assert_eq!(api.calls(), vec!["POST pedidos"]);
    }

    #[tokio::test]
    async fn test_failed_checkout_keeps_cart_and_total() {
        let owner = Owner::new();
        let store = owner.with(loaded_store);
        let before = store.cart().get_untracked();

        let api = FakeApi::default();
        api.fail_status.set(Some(500));
        let outcome = checkout::submit_order(&api, &before, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).await;
        let message = store_finish_checkout(&store, outcome);

        assert_eq!(message, ORDER_FAILED_MESSAGE);
        assert_eq!(store.cart().get_untracked(), before);
        assert_eq!(owner.with(|| store_total(&store)), 20.0);
    }

    #[test]
    fn test_empty_cart_checkout_reports_and_keeps_state() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(CatalogState::default()));

        let message = store_finish_checkout(&store, Err(CheckoutError::EmptyCart));

        assert_eq!(message, EMPTY_CART_MESSAGE);
        assert!(store.cart().get_untracked().is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_not_found_and_no_items() {
        let api = FakeApi::default();
        api.fail_status.set(Some(404));

        let (status, items) = fetch_catalog(&api).await;

        assert_eq!(status, LoadStatus::NotFound);
        assert!(items.is_empty());
        assert_eq!(api.calls(), vec!["GET articulos"]);
    }

    #[tokio::test]
    async fn test_successful_fetch_is_loaded() {
        let api = FakeApi::with_items(vec![Item {
            id: 1,
            name: "Mate".to_string(),
            description: None,
            price: 3.0,
            category: None,
            image: None,
        }]);

        let (status, items) = fetch_catalog(&api).await;

        assert_eq!(status, LoadStatus::Loaded);
        assert_eq!(items.len(), 1);
    }
}
