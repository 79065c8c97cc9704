//! MongoDB-backed product store.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use storefront_core::ProductId;
use storefront_products::{Product, ProductDraft, ProductPatch};

use crate::config::Config;
use crate::store::{ProductStore, StoreError};

const COLLECTION: &str = "products";

/// Product store backed by a single long-lived MongoDB client.
///
/// The driver pools and interleaves requests internally; one instance is
/// shared across all handlers.
#[derive(Debug, Clone)]
pub struct MongoProductStore {
    products: Collection<Product>,
}

impl MongoProductStore {
    /// Connect to the configured cluster and verify it is reachable.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(config.connection_uri()).await?;
        let database = client.database(config.db_name());
        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = config.db_name(), "connected to database");
        Ok(Self::new(database))
    }

    pub fn new(database: Database) -> Self {
        Self {
            products: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(ProductId::new(), draft, Utc::now());
        self.products.insert_one(&product).await?;
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let cursor = self.products.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .find_one(doc! { "_id": ObjectId::from(id) })
            .await?)
    }

    async fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        if patch.is_empty() {
            // An empty `$set` is rejected by the server; an empty patch is a no-op.
            return self.get(id).await;
        }
        Ok(self
            .products
            .find_one_and_update(
                doc! { "_id": ObjectId::from(id) },
                doc! { "$set": set_document(&patch) },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let result = self
            .products
            .delete_one(doc! { "_id": ObjectId::from(id) })
            .await?;
        Ok(result.deleted_count == 1)
    }
}

fn set_document(patch: &ProductPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(price) = patch.price {
        set.insert("price", price);
    }
    if let Some(quantity) = patch.quantity {
        set.insert("quantity", quantity);
    }
    set
}
