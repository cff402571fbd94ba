//! Chunked fetch loop behavior against a mock server.
//!
//! Covers request counts, offset progression, and termination for the
//! interesting totals: zero, below one page, an exact page multiple, and
//! one past a page boundary.

use bf4_client::{ApiClient, ClientConfig, PagedQuery, fetch_paged};
use bf4_types::Bf4Error;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Helper: start a mock server and create an `ApiClient` whose base URL
/// points at it.
async fn setup() -> (MockServer, ApiClient) {
    let mock_server = MockServer::start().await;
    let config = ClientConfig {
        base_url: mock_server.uri(),
        ..Default::default()
    };
    let client = ApiClient::new(config).unwrap();
    (mock_server, client)
}

/// A paged query against `bid_ask_history` with a small page size so the
/// loop boundaries are easy to drive from the mock.
fn query(page_size: u64) -> PagedQuery {
    PagedQuery {
        operation: "bid_ask_history",
        records_field: "data",
        page_size,
        params: vec![("isin".to_string(), "DE0007236101".to_string())],
    }
}

#[tokio::test]
async fn test_zero_total_issues_exactly_one_request() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 0,
            "data": [],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = fetch_paged(&client, &query(2)).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_single_page_when_total_below_page_size() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "data": [{"id": 1}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = fetch_paged(&client, &query(2)).await.unwrap();
    assert_eq!(records, vec![json!({"id": 1})]);
}

#[tokio::test]
async fn test_exact_multiple_fetches_no_trailing_empty_page() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 4,
            "data": [{"id": 1}, {"id": 2}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 4,
            "data": [{"id": 3}, {"id": 4}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The offset check uses >= against the now-accurate total, so no third
    // request at offset 4 may be issued.
    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 4,
            "data": [],
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let records = fetch_paged(&client, &query(2)).await.unwrap();

    assert_eq!(records.len(), 4);
    let ids: Vec<_> = records.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4], "pages concatenate in request order");
}

#[tokio::test]
async fn test_one_past_page_boundary_fetches_two_pages() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 3,
            "data": [{"id": 1}, {"id": 2}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 3,
            "data": [{"id": 3}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = fetch_paged(&client, &query(2)).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_ticks_records_field() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/data/tick_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 2,
            "ticks": [{"price": 10.0}, {"price": 10.5}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = PagedQuery {
        operation: "tick_data",
        records_field: "ticks",
        page_size: 10,
        params: Vec::new(),
    };

    let records = fetch_paged(&client, &query).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_zero_page_size_is_rejected_before_any_request() {
    let (mock_server, client) = setup().await;

    // A zero page size can never advance the offset, so the loop must
    // refuse it up front instead of requesting the same page forever.
    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 5,
            "data": [],
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = fetch_paged(&client, &query(0)).await.unwrap_err();
    assert!(matches!(err, Bf4Error::ZeroPageSize));
}

#[tokio::test]
async fn test_missing_total_count_is_shape_error() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = fetch_paged(&client, &query(2)).await.unwrap_err();
    assert!(matches!(
        err,
        Bf4Error::UnexpectedShape {
            field: "totalCount"
        }
    ));
}

#[tokio::test]
async fn test_failure_mid_fetch_discards_accumulated_pages() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 5,
            "data": [{"id": 1}, {"id": 2}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/bid_ask_history"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = fetch_paged(&client, &query(2)).await.unwrap_err();
    assert!(matches!(err, Bf4Error::Status { status: 500 }));
}
