//! Service wiring: the single shared store handle.

use std::sync::Arc;

use storefront_core::ProductId;
use storefront_infra::{InMemoryProductStore, ProductStore, StoreError};
use storefront_products::{Product, ProductDraft, ProductPatch};

/// Process-scoped resources shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// Wiring for tests and local development: no database required.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()))
    }

    pub async fn products_insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        self.products.insert(draft).await
    }

    pub async fn products_list(&self) -> Result<Vec<Product>, StoreError> {
        self.products.list().await
    }

    pub async fn products_get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.products.get(id).await
    }

    pub async fn products_update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        self.products.update(id, patch).await
    }

    pub async fn products_delete(&self, id: ProductId) -> Result<bool, StoreError> {
        self.products.delete(id).await
    }
}
