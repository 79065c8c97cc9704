//! Product persistence.
//!
//! The HTTP layer talks to [`ProductStore`]; [`MongoProductStore`] is the
//! production implementation and [`InMemoryProductStore`] backs tests and
//! local development.

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::ProductId;
use storefront_products::{Product, ProductDraft, ProductPatch};

pub mod memory;
pub mod mongo;

pub use memory::InMemoryProductStore;
pub use mongo::MongoProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// One database operation per endpoint; absence is `None`/`false`, not an error.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new record, assigning its identifier and creation timestamp.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Full scan of all records.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Replace the fields present in `patch`; returns the post-image, or
    /// `None` when the identifier does not exist.
    async fn update(&self, id: ProductId, patch: ProductPatch)
        -> Result<Option<Product>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;
}
