//! Frontend Models
//!
//! Data structures matching the backend's JSON resources.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days between placing an order and its delivery
pub const DELIVERY_DAYS: i64 = 3;

/// Price as shown in the UI, e.g. `$12.50`
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Catalog item (matches backend `articulo`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "imagen", alias = "pathImg", default)]
    pub image: Option<String>,
}

/// Body of create/update item requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "PENDIENTE")]
    Pending,
}

/// Reference to an item inside an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRef {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    #[serde(rename = "articulo")]
    pub item: ItemRef,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Order snapshot sent to `POST /pedidos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    #[serde(rename = "fechaPedido")]
    pub order_date: NaiveDate,
    #[serde(rename = "fechaEntrega")]
    pub delivery_date: NaiveDate,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "pedidoArticulos")]
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(order_date: NaiveDate, lines: Vec<OrderLine>) -> Self {
        Self {
            order_date,
            delivery_date: order_date + Duration::days(DELIVERY_DAYS),
            status: OrderStatus::Pending,
            lines,
        }
    }
}
