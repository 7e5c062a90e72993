//! HTTP integration tests for the product API
//!
//! Each test spins the full router up on an ephemeral port, backed by the
//! in-memory store, and drives it over real HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};

use catalog_domain::ProductRepository;
use catalog_infrastructure::persistence::InMemoryProductRepository;
use catalog_server::http::{build_state, create_router};

/// Start a server on 127.0.0.1:0 and return its address.
async fn start_test_server() -> SocketAddr {
    let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
    let state = build_state(repository).expect("register handlers");
    let router = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

fn laptop_body() -> Value {
    json!({
        "name": "Laptop",
        "barcode": "123456789",
        "description": "High-performance laptop",
        "rate": "999.99",
    })
}

async fn create_product(client: &reqwest::Client, base: &str, body: &Value) -> i64 {
    let response = client
        .post(format!("{base}/api/v1/product"))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json::<i64>().await.unwrap()
}

#[tokio::test]
async fn create_then_get_round_trips_every_field() {
    let addr = start_test_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let id = create_product(&client, &base, &laptop_body()).await;
    assert!(id > 0);

    let response = client
        .get(format!("{base}/api/v1/product/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let product: Value = response.json().await.unwrap();
    assert_eq!(product["id"], json!(id));
    assert_eq!(product["name"], "Laptop");
    assert_eq!(product["barcode"], "123456789");
    assert_eq!(product["description"], "High-performance laptop");
    assert_eq!(product["rate"], "999.99");
}

#[tokio::test]
async fn list_contains_everything_created_and_is_stable() {
    let addr = start_test_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for n in 1..=3 {
        let body = json!({
            "name": format!("Product {n}"),
            "barcode": format!("{n:09}"),
            "description": "",
            "rate": "10.50",
        });
        ids.push(create_product(&client, &base, &body).await);
    }

    let first: Value = client
        .get(format!("{base}/api/v1/product"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let products = first.as_array().unwrap();
    assert_eq!(products.len(), 3);
    for id in &ids {
        assert!(products.iter().any(|p| p["id"] == json!(id)));
    }

    // No writes in between: identical response.
    let second: Value = client
        .get(format!("{base}/api/v1/product"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let addr = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{addr}/api/v1/product/999999"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn update_overwrites_and_returns_the_id() {
    let addr = start_test_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let id = create_product(&client, &base, &laptop_body()).await;

    let response = client
        .put(format!("{base}/api/v1/product/{id}"))
        .json(&json!({
            "id": id,
            "name": "Gaming Laptop",
            "barcode": "123456789",
            "description": "Now with more fans",
            "rate": "1299.99",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<i64>().await.unwrap(), id);

    let product: Value = client
        .get(format!("{base}/api/v1/product/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(product["id"], json!(id));
    assert_eq!(product["name"], "Gaming Laptop");
    assert_eq!(product["rate"], "1299.99");
}

#[tokio::test]
async fn update_with_mismatched_ids_is_400() {
    let addr = start_test_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let id = create_product(&client, &base, &laptop_body()).await;

    let response = client
        .put(format!("{base}/api/v1/product/{id}"))
        .json(&json!({
            "id": id + 1,
            "name": "Mismatch",
            "barcode": "",
            "description": "",
            "rate": "0",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Nothing was dispatched; the entity is untouched.
    let product: Value = client
        .get(format!("{base}/api/v1/product/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(product["name"], "Laptop");
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let addr = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("http://{addr}/api/v1/product/999999"))
        .json(&json!({
            "id": 999999,
            "name": "Ghost",
            "barcode": "",
            "description": "",
            "rate": "0",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn delete_removes_the_product() {
    let addr = start_test_server().await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let id = create_product(&client, &base, &laptop_body()).await;

    let response = client
        .delete(format!("{base}/api/v1/product/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<i64>().await.unwrap(), id);

    let response = client
        .get(format!("{base}/api/v1/product/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let addr = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("http://{addr}/api/v1/product/999999"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn health_reports_ok() {
    let addr = start_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
