use serde::Deserialize;

use storefront_products::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.to_string(),
        "name": product.name,
        "price": product.price,
        "quantity": product.quantity,
        "created_at": product.created_at.to_rfc3339(),
    })
}
