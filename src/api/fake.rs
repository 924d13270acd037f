//! In-memory backend for flow tests. Records every call it receives.

use std::cell::{Cell, RefCell};

use serde_json::{json, Value};

use super::{ApiError, ItemApi, OrderApi};
use crate::models::{Item, ItemPayload, Order};

#[derive(Default)]
pub struct FakeApi {
    pub items: RefCell<Vec<Item>>,
    pub orders: RefCell<Vec<Order>>,
    pub calls: RefCell<Vec<String>>,
    /// When set, every call fails with this status
    pub fail_status: Cell<Option<u16>>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        *api.items.borrow_mut() = items;
        api.next_id.set(next_id);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_status.get() {
            Some(status) => Err(ApiError::Status(status)),
            None => Ok(()),
        }
    }

    fn item_from(id: u32, payload: &ItemPayload) -> Item {
        Item {
            id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
            category: payload.category.clone(),
            image: payload.image.clone(),
        }
    }
}

impl ItemApi for FakeApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.record("GET articulos".to_string())?;
        Ok(self.items.borrow().clone())
    }

    async fn get_item(&self, id: u32) -> Result<Item, ApiError> {
        self.record(format!("GET articulos/{}", id))?;
        self.items
            .borrow()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn create_item(&self, payload: &ItemPayload) -> Result<(), ApiError> {
        self.record("POST articulos".to_string())?;
        let id = self.next_id.get().max(1);
        self.next_id.set(id + 1);
        self.items.borrow_mut().push(Self::item_from(id, payload));
        Ok(())
    }

    async fn update_item(&self, id: u32, payload: &ItemPayload) -> Result<(), ApiError> {
        self.record(format!("PUT articulos/{}", id))?;
        let mut items = self.items.borrow_mut();
        let slot = items.iter_mut().find(|i| i.id == id).ok_or(ApiError::Status(404))?;
        *slot = Self::item_from(id, payload);
        Ok(())
    }

    async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
        self.record(format!("DELETE articulos/{}", id))?;
        self.items.borrow_mut().retain(|i| i.id != id);
        Ok(())
    }
}

impl OrderApi for FakeApi {
    async fn create_order(&self, order: &Order) -> Result<Value, ApiError> {
        self.record("POST pedidos".to_string())?;
        self.orders.borrow_mut().push(order.clone());
        Ok(json!({ "id": self.orders.borrow().len() }))
    }
}
