//! Checkout
//!
//! Turns the cart into an order and submits it.

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::api::{ApiError, OrderApi};
use crate::cart::Cart;
use crate::models::Order;

pub const EMPTY_CART_MESSAGE: &str = "Debes seleccionar al menos un producto.";
pub const ORDER_PLACED_MESSAGE: &str = "Pedido realizado correctamente";
pub const ORDER_FAILED_MESSAGE: &str = "Hubo un error al guardar el pedido";

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CheckoutError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckoutError::EmptyCart => EMPTY_CART_MESSAGE,
            CheckoutError::Api(_) => ORDER_FAILED_MESSAGE,
        }
    }
}

/// Today's date as the backend expects it (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn build_order(cart: &Cart, today: NaiveDate) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(Order::new(today, cart.order_lines()))
}

/// Submit the cart as an order. The cart itself is left for the caller to clear.
pub async fn submit_order<A: OrderApi>(
    api: &A,
    cart: &Cart,
    today: NaiveDate,
) -> Result<Value, CheckoutError> {
    let order = build_order(cart, today)?;
    let saved = api.create_order(&order).await?;
    log::info!("[CHECKOUT] Order saved: {}", saved);
    Ok(saved)
}
