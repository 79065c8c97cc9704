//! In-memory product store for tests and local development.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use storefront_core::ProductId;
use storefront_products::{Product, ProductDraft, ProductPatch};

use crate::store::{ProductStore, StoreError};

/// Mutex-guarded map keyed by identifier.
///
/// ObjectIds are time-ordered, so iteration approximates insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    records: Mutex<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(ProductId::new(), draft, Utc::now());
        self.records
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let mut records = self.records.lock().unwrap();
        Ok(records.get_mut(&id).map(|product| {
            product.apply(&patch);
            product.clone()
        }))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.records.lock().unwrap().remove(&id).is_some())
    }
}
