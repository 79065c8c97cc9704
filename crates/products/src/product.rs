use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ProductId};

/// A stored product record.
///
/// The serde shape is the document shape: `id` maps to the store's `_id`
/// field and `created_at` is persisted as a native datetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Materialize a record from a validated draft, with the identifier and
    /// creation timestamp the store assigned.
    pub fn from_draft(id: ProductId, draft: ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
            created_at,
        }
    }

    /// Replace the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

/// Validated input for creating a product.
///
/// `name` is the only required field; `price` and `quantity` default to zero,
/// matching what the store would assign for omitted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    price: f64,
    quantity: i64,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        price: Option<f64>,
        quantity: Option<i64>,
    ) -> DomainResult<Self> {
        let name = valid_name(name.into())?;
        Ok(Self {
            name,
            price: price.unwrap_or(0.0),
            quantity: quantity.unwrap_or(0),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Field-level replacement set for updates.
///
/// Absent fields are left untouched; an all-absent patch is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    pub fn new(
        name: Option<String>,
        price: Option<f64>,
        quantity: Option<i64>,
    ) -> DomainResult<Self> {
        let name = name.map(valid_name).transpose()?;
        Ok(Self {
            name,
            price,
            quantity,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

fn valid_name(name: String) -> DomainResult<String> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::validation("name must not be blank"));
    }
    Ok(name)
}
