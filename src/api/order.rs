//! Order Endpoints

use serde_json::Value;

use super::{ApiError, HttpApi};
use crate::models::Order;

pub const ORDERS_PATH: &str = "pedidos";

#[allow(async_fn_in_trait)]
pub trait OrderApi {
    /// Returns the backend's echo of the saved order (`Null` for an empty body)
    async fn create_order(&self, order: &Order) -> Result<Value, ApiError>;
}

impl OrderApi for HttpApi {
    async fn create_order(&self, order: &Order) -> Result<Value, ApiError> {
        let response = self.send(self.client.post(self.url(ORDERS_PATH)).json(order)).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
