use std::sync::Arc;

use storefront_api::app::{self, services::AppServices};
use storefront_infra::{Config, MongoProductStore};

#[tokio::main]
async fn main() {
    storefront_observability::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("database credentials not found: {e}");
            std::process::exit(1);
        }
    };

    let store = match MongoProductStore::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("database connection failed: {e}");
            std::process::exit(1);
        }
    };

    let app = app::build_app(AppServices::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind 0.0.0.0:3000");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
