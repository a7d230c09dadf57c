#![allow(clippy::unwrap_used)]
// Integration tests for `CatalogClient` using wiremock.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopfront_api::{CatalogClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = CatalogClient::new(base_url, &TransportConfig::default()).unwrap();
    (server, client)
}

fn product_json(id: u64, title: &str, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("Description of {title}"),
        "category": "jewelery",
        "image": format!("https://img.example.test/{id}.jpg"),
        "rating": { "rate": 4.1, "count": 259 }
    })
}

// ── Collection ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_products() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_json(1, "Backpack", 109.95),
            product_json(2, "Slim Fit T-Shirt", 22.3),
            product_json(3, "Cotton Jacket", 55.99),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let products = client.list_products().await.unwrap();

    assert_eq!(products.len(), 3);
    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(products[1].title, "Slim Fit T-Shirt");
    assert_eq!(products[1].price, Some(22.3));
}

#[tokio::test]
async fn test_list_products_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(client.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_products_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.list_products().await;
    assert!(
        matches!(result, Err(Error::Status { status: 500, ref body }) if body == "boom"),
        "expected Status error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_list_products_rejects_invalid_item() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_json(1, "Backpack", 109.95),
            product_json(2, "Broken", -5.0),
        ])))
        .mount(&server)
        .await;

    let result = client.list_products().await;
    assert!(
        matches!(result, Err(Error::Validation { field: "price", .. })),
        "expected Validation error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_list_products_wrong_shape() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": [] })))
        .mount(&server)
        .await;

    let result = client.list_products().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Single product ──────────────────────────────────────────────────

#[tokio::test]
async fn test_get_product() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(
            2,
            "Slim Fit T-Shirt",
            22.3,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let product = client.get_product(2).await.unwrap();

    assert_eq!(product.id, 2);
    assert_eq!(product.title, "Slim Fit T-Shirt");
    assert_eq!(product.description, "Description of Slim Fit T-Shirt");
    assert_eq!(product.category, "jewelery");
}

#[tokio::test]
async fn test_get_product_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_product(999).await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
}

#[tokio::test]
async fn test_get_product_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let result = client.get_product(999).await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_get_product_null_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    assert!(matches!(
        client.get_product(999).await,
        Err(Error::Deserialization { .. })
    ));
}

#[tokio::test]
async fn test_get_product_id_mismatch() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(5, "Other", 1.0)))
        .mount(&server)
        .await;

    assert!(matches!(
        client.get_product(4).await,
        Err(Error::Validation { field: "id", .. })
    ));
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/api/", server.uri())).unwrap();
    let client = CatalogClient::new(base_url, &TransportConfig::default()).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(1, "Backpack", 1.0)))
        .mount(&server)
        .await;

    assert_eq!(client.get_product(1).await.unwrap().title, "Backpack");
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(100));
    let client = CatalogClient::new(base_url, &transport).unwrap();

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.list_products().await.unwrap_err();
    assert!(err.is_transient(), "expected transient error, got: {err:?}");
}
