//! Item Form
//!
//! Editable copy of one item for the management view, plus local validation.

use thiserror::Error;

use crate::models::{Item, ItemPayload};

/// Message shown for any local validation failure
pub const INVALID_FORM_MESSAGE: &str = "Por favor complete correctamente los campos.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("item name is empty")]
    MissingName,
    #[error("price must be a non-negative number")]
    InvalidPrice,
}

/// Which form field an input is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    Category,
    Image,
}

/// Form state; `id == None` means a new item is being created
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub id: Option<u32>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl ItemForm {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
            category: item.category.clone().unwrap_or_default(),
            image: item.image.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
            FormField::Image => &self.image,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::Price => self.price = value,
            FormField::Category => self.category = value,
            FormField::Image => self.image = value,
        }
    }

    /// Validate and build the request body
    pub fn to_payload(&self) -> Result<ItemPayload, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(FormError::InvalidPrice)?;

        Ok(ItemPayload {
            id: self.id,
            name: name.to_string(),
            description: non_blank(&self.description),
            price,
            category: non_blank(&self.category),
            image: non_blank(&self.image),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
