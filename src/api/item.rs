//! Item Endpoints
//!
//! `/articulos` resource: list, fetch, create, update, delete.

use super::{read_json, ApiError, HttpApi};
use crate::models::{Item, ItemPayload};

pub const ITEMS_PATH: &str = "articulos";

#[allow(async_fn_in_trait)]
pub trait ItemApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;
    async fn get_item(&self, id: u32) -> Result<Item, ApiError>;
    async fn create_item(&self, payload: &ItemPayload) -> Result<(), ApiError>;
    async fn update_item(&self, id: u32, payload: &ItemPayload) -> Result<(), ApiError>;
    async fn delete_item(&self, id: u32) -> Result<(), ApiError>;
}

impl ItemApi for HttpApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let response = self.send(self.client.get(self.url(ITEMS_PATH))).await?;
        read_json(response).await
    }

    async fn get_item(&self, id: u32) -> Result<Item, ApiError> {
        let url = self.url(&format!("{}/{}", ITEMS_PATH, id));
        let response = self.send(self.client.get(url)).await?;
        read_json(response).await
    }

    async fn create_item(&self, payload: &ItemPayload) -> Result<(), ApiError> {
        self.send(self.client.post(self.url(ITEMS_PATH)).json(payload)).await?;
        Ok(())
    }

    async fn update_item(&self, id: u32, payload: &ItemPayload) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", ITEMS_PATH, id));
        self.send(self.client.put(url).json(payload)).await?;
        Ok(())
    }

    async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", ITEMS_PATH, id));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
