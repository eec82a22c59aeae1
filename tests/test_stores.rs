//! Tests for StoreRepository: ordering, lookup by id, degrade-to-empty.

mod common;

use common::{mock_backend, store_json};
use vetrina::StoreRepository;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_stores_requests_name_ascending() {
    let (server, backend) = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .and(query_param("order", "name.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            store_json(2, "Alimentari Verdi"),
            store_json(5, "Ferramenta Mazzotti"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = StoreRepository::new(backend);
    let stores = repo.list_stores().await;

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].name, "Alimentari Verdi");
    assert_eq!(stores[1].id, 5);
    assert!(stores[1].is_open);
}

#[tokio::test]
async fn get_store_returns_matching_row() {
    let (server, backend) = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .and(query_param("id", "eq.7"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([store_json(7, "Bar Centrale")])),
        )
        .mount(&server)
        .await;

    let repo = StoreRepository::new(backend);
    let store = repo.get_store(7).await.expect("store 7 should exist");
    assert_eq!(store.name, "Bar Centrale");
    assert_eq!(store.rating, 4.6);
}

#[tokio::test]
async fn get_store_absent_when_nothing_matches() {
    let (server, backend) = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let repo = StoreRepository::new(backend);
    assert!(repo.get_store(999).await.is_none());
}

#[tokio::test]
async fn backend_failure_degrades_to_empty_but_try_reports_it() {
    let (server, backend) = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let repo = StoreRepository::new(backend);
    assert!(repo.list_stores().await.is_empty());
    assert!(repo.get_store(1).await.is_none());

    let err = repo.try_list_stores().await.unwrap_err();
    assert!(err.is_status(), "expected a status error, got: {err}");
}

#[tokio::test]
async fn unreachable_backend_degrades_to_empty() {
    // Nothing listening on this port.
    let backend = std::sync::Arc::new(vetrina::Backend::new(&vetrina::BackendConfig::new(
        "http://127.0.0.1:9",
        "test-key",
    )));
    let repo = StoreRepository::new(backend);
    assert!(repo.list_stores().await.is_empty());
    assert!(repo.try_list_stores().await.is_err());
}
