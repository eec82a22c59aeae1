//! Shared harness for the integration tests: a wiremock stand-in for the
//! relational backend's REST facade, plus row fixtures.
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use vetrina::{Backend, BackendConfig};
use wiremock::MockServer;

/// Spin up a mock backend and a client pointed at it.
pub async fn mock_backend() -> (MockServer, Arc<Backend>) {
    let server = MockServer::start().await;
    let backend = Arc::new(Backend::new(&BackendConfig::new(server.uri(), "test-key")));
    (server, backend)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

pub fn store_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": "info@bottega.example",
        "description": "Bottega di quartiere",
        "address": "Via Roma 1, Ravenna",
        "phone": "0544 000000",
        "category": "Alimentari",
        "rating": 4.6,
        "is_open": true,
        "delivery_time": "30-40 min",
        "latitude": 44.4184,
        "longitude": 12.2035,
        "created_at": "2026-05-01T08:00:00Z",
        "updated_at": "2026-07-01T08:00:00Z"
    })
}

pub fn product_json(id: i64, store_id: i64, name: &str, category: &str) -> Value {
    json!({
        "id": id,
        "store_id": store_id,
        "name": name,
        "description": "Articolo da banco",
        "price": 12.5,
        "category": category,
        "in_stock": true,
        "tags": ["bricolage"],
        "image_url": null,
        "search_count": 0,
        "created_at": "2026-06-01T08:00:00Z",
        "updated_at": "2026-07-01T08:00:00Z"
    })
}

/// A product row as returned with the store embed, the way listing and
/// search queries fetch it.
pub fn joined_product_json(
    id: i64,
    store_id: i64,
    name: &str,
    category: &str,
    store_name: &str,
) -> Value {
    let mut row = product_json(id, store_id, name, category);
    row["stores"] = json!({
        "name": store_name,
        "address": "Via Roma 1, Ravenna",
        "rating": 4.6
    });
    row
}

pub fn popular_json(store_id: i64, product_id: i64, product_name: &str) -> Value {
    json!({
        "store_id": store_id,
        "store_name": format!("Bottega {store_id}"),
        "product_id": product_id,
        "product_name": product_name,
        "category": "Alimentari",
        "price": 8.0,
        "search_count": 25,
        "click_count": 7
    })
}
