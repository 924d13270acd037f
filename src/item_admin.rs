//! Item Management Flows
//!
//! Save/edit/delete for the admin view. Every successful mutation re-reads
//! the full list from the backend instead of patching local state.

use thiserror::Error;

use crate::api::{ApiError, ItemApi};
use crate::form::{FormError, ItemForm, INVALID_FORM_MESSAGE};
use crate::models::Item;

pub const SAVE_FAILED_MESSAGE: &str = "No se pudo guardar el artículo";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("invalid form: {0}")]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The item was saved but the list could not be re-read
    #[error("saved, but reloading the list failed: {0}")]
    Refresh(ApiError),
}

impl SaveError {
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SaveError::Invalid(_) => Some(INVALID_FORM_MESSAGE),
            SaveError::Api(_) => Some(SAVE_FAILED_MESSAGE),
            SaveError::Refresh(_) => None,
        }
    }
}

pub async fn refresh_items<A: ItemApi>(api: &A) -> Result<Vec<Item>, ApiError> {
    let items = api.list_items().await?;
    log::debug!("[ADMIN] Loaded {} items", items.len());
    Ok(items)
}

/// Validate, create or update, then return the re-fetched list
pub async fn save_item<A: ItemApi>(api: &A, form: &ItemForm) -> Result<Vec<Item>, SaveError> {
    let payload = form.to_payload()?;
    match form.id {
        Some(id) => api.update_item(id, &payload).await?,
        None => api.create_item(&payload).await?,
    }
    log::info!("[ADMIN] Saved item {:?} ({})", form.id, payload.name);
    refresh_items(api).await.map_err(SaveError::Refresh)
}

/// Fetch one item and turn it into an edit form
pub async fn edit_item<A: ItemApi>(api: &A, id: u32) -> Result<ItemForm, ApiError> {
    let item = api.get_item(id).await?;
    Ok(ItemForm::from_item(&item))
}

pub async fn delete_item<A: ItemApi>(api: &A, id: u32) -> Result<Vec<Item>, ApiError> {
    api.delete_item(id).await?;
    log::info!("[ADMIN] Deleted item {}", id);
    refresh_items(api).await
}
