//! `storefront-infra` — configuration and product storage.
//!
//! Everything that touches the process environment or the database lives
//! here, behind the [`store::ProductStore`] seam the HTTP layer consumes.

pub mod config;
pub mod store;

pub use config::{Config, ConfigError};
pub use store::{InMemoryProductStore, MongoProductStore, ProductStore, StoreError};
