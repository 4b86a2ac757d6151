//! Integration tests for the crawl endpoint
//!
//! Requests go through the full router with `oneshot`; crawled sites are
//! wiremock servers.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sumi_gleaner::config::Config;
use sumi_gleaner::crawler::Crawler;
use sumi_gleaner::server::{router, AppState};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app() -> Router {
    let mut config = Config::default();
    config.crawler.request_timeout_ms = 2_000;
    router(AppState::new(Crawler::new(&config).unwrap()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

//
// GET /api tests
//

#[tokio::test]
async fn test_missing_url_is_rejected() {
    let (status, body) = get(test_app(), "/api").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "URL is required"}));
}

#[tokio::test]
async fn test_empty_url_is_rejected() {
    let (status, body) = get(test_app(), "/api?url=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "URL is required"}));
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let (status, body) = get(test_app(), "/api?url=not%20a%20url").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid URL provided"}));
}

#[tokio::test]
async fn test_crawl_returns_results() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Home</title></head><body>
            <article>Hello</article><a href="/missing">Missing</a>
            </body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    // A fragment on the seed is dropped before crawling
    let (status, body) = get(test_app(), &format!("/api?url={}/%23top", base_url)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"url": format!("{}/", base_url), "title": "Home", "text": "Hello"},
            {
                "url": format!("{}/missing", base_url),
                "error": "Failed to fetch: request failed with status code 404"
            }
        ])
    );
}

#[tokio::test]
async fn test_crawl_alias_route() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<body>Hi</body>"))
        .mount(&mock_server)
        .await;

    let (status, body) = get(test_app(), &format!("/api/crawl?url={}/", base_url)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"url": format!("{}/", base_url), "text": "Hi"}]));
}

#[tokio::test]
async fn test_unreachable_seed_is_not_a_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let (status, body) = get(test_app(), &format!("/api?url=http://127.0.0.1:{}/", port)).await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0]["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch: "));
}

//
// GET /health tests
//

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
