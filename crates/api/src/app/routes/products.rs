use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_core::ProductId;
use storefront_products::{ProductDraft, ProductPatch};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let draft = match ProductDraft::new(body.name, body.price, body.quantity) {
        Ok(draft) => draft,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_insert(draft).await {
        Ok(product) => {
            (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products_list().await {
        Ok(products) => {
            let products = products.iter().map(dto::product_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(products)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(_) => return errors::not_found(),
    };

    match services.products_get(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(_) => return errors::not_found(),
    };

    let patch = match ProductPatch::new(body.name, body.price, body.quantity) {
        Ok(patch) => patch,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_update(id, patch).await {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(_) => return errors::not_found(),
    };

    match services.products_delete(id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({ "id": id.to_string(), "deleted": true })),
        )
            .into_response(),
        Ok(false) => errors::not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}
