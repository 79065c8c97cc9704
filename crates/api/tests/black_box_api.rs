use reqwest::StatusCode;
use serde_json::json;

use storefront_api::app::{build_app, services::AppServices};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory store, ephemeral port.
        let app = build_app(AppServices::in_memory());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_product(
    client: &reqwest::Client,
    srv: &TestServer,
    body: serde_json::Value,
) -> serde_json::Value {
    let res = client
        .post(srv.url("/api/products"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

async fn list_products(client: &reqwest::Client, srv: &TestServer) -> Vec<serde_json::Value> {
    let res = client.get(srv.url("/api/products")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(srv.url("/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(
        &client,
        &srv,
        json!({ "name": "Widget", "price": 9.99, "quantity": 5 }),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["price"], 9.99);
    assert_eq!(created["quantity"], 5);

    let res = client
        .get(srv.url(&format!("/api/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_defaults_price_and_quantity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv, json!({ "name": "Widget" })).await;

    assert_eq!(created["price"], 0.0);
    assert_eq!(created["quantity"], 0);
    assert!(created["created_at"].as_str().is_some());
}

#[tokio::test]
async fn create_without_name_is_rejected_and_not_persisted() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/products"))
        .json(&json!({ "price": 1.0 }))
        .send()
        .await
        .unwrap();

    assert!(res.status().is_client_error());
    assert!(list_products(&client, &srv).await.is_empty());
}

#[tokio::test]
async fn create_with_blank_name_is_rejected_and_not_persisted() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/api/products"))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(list_products(&client, &srv).await.is_empty());
}

#[tokio::test]
async fn list_returns_exactly_the_live_records() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = create_product(&client, &srv, json!({ "name": "Widget" })).await;
    let second = create_product(&client, &srv, json!({ "name": "Gadget" })).await;

    let res = client
        .delete(srv.url(&format!("/api/products/{}", second["id"].as_str().unwrap())))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let listed = list_products(&client, &srv).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], first["id"]);
}

#[tokio::test]
async fn get_unknown_or_malformed_id_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Well-formed but absent.
    let res = client
        .get(srv.url("/api/products/ffffffffffffffffffffffff"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Malformed: cannot exist, same outcome.
    let res = client
        .get(srv.url("/api/products/not-an-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn update_replaces_provided_fields_only() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(
        &client,
        &srv,
        json!({ "name": "Widget", "price": 9.99, "quantity": 5 }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let res = client
        .put(srv.url(&format!("/api/products/{id}")))
        .json(&json!({ "price": 4.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();

    assert_eq!(updated["name"], "Widget");
    assert_eq!(updated["price"], 4.5);
    assert_eq!(updated["quantity"], 5);
    assert_eq!(updated["id"], created["id"]);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found_and_creates_nothing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(srv.url("/api/products/ffffffffffffffffffffffff"))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(list_products(&client, &srv).await.is_empty());
}

#[tokio::test]
async fn delete_removes_the_record() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv, json!({ "name": "Widget" })).await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .delete(srv.url(&format!("/api/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["deleted"], true);

    let res = client
        .get(srv.url(&format!("/api/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting again reports the record as gone.
    let res = client
        .delete(srv.url(&format!("/api/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
