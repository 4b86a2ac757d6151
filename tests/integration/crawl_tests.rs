//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use std::collections::HashSet;
use std::time::Duration;
use sumi_gleaner::config::Config;
use sumi_gleaner::crawler::{crawl, CrawlResult, Crawler, FETCH_FAILED_PREFIX, INVALID_URL};
use sumi_gleaner::url::origin_of;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with short timeouts
fn create_test_config(request_timeout_ms: u64) -> Config {
    let mut config = Config::default();
    config.crawler.request_timeout_ms = request_timeout_ms;
    config.crawler.connect_timeout_ms = request_timeout_ms;
    config.user_agent.crawler_name = "TestBot".to_string();
    config
}

fn create_test_crawler() -> Crawler {
    Crawler::new(&create_test_config(2_000)).expect("Failed to build crawler")
}

/// An HTML page whose article holds `text` and whose nav links to `links`
fn page(title: &str, text: &str, links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">{}</a>"#, href, href))
        .collect();
    format!(
        r#"<html><head><title>{}</title></head><body>
        <nav>{}</nav>
        <article><p>{}</p></article>
        </body></html>"#,
        title, anchors, text
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn urls(results: &[CrawlResult]) -> Vec<String> {
    results.iter().map(|r| r.url.clone()).collect()
}

#[tokio::test]
async fn test_single_page_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Home</title></head><body>Hello</body></html>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = create_test_crawler()
        .crawl(&format!("{}/", base_url))
        .await;

    assert_eq!(
        results,
        vec![CrawlResult {
            url: format!("{}/", base_url),
            title: Some("Home".to_string()),
            text: Some("Hello".to_string()),
            error: None,
        }]
    );
}

#[tokio::test]
async fn test_cross_origin_links_are_not_fetched() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Home",
            "Welcome",
            &[&format!("{}/elsewhere", other_server.uri()), "/guide"],
        ),
    )
    .await;
    mount_page(&mock_server, "/guide", page("Guide", "Guide text", &[])).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("never"))
        .expect(0)
        .mount(&other_server)
        .await;

    let results = create_test_crawler()
        .crawl(&format!("{}/", base_url))
        .await;

    assert_eq!(
        urls(&results),
        vec![format!("{}/", base_url), format!("{}/guide", base_url)]
    );

    let seed_origin = origin_of(&url::Url::parse(&base_url).unwrap());
    for result in &results {
        let url = url::Url::parse(&result.url).unwrap();
        assert_eq!(origin_of(&url), seed_origin);
    }
}

#[tokio::test]
async fn test_timeout_becomes_error_entry() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page("Slow", "Too late", &[]))
                .set_delay(Duration::from_millis(2_000)),
        )
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(&create_test_config(200)).unwrap();
    let results = crawler.crawl(&format!("{}/", base_url)).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, format!("{}/", base_url));
    assert_eq!(results[0].text, None);
    assert_eq!(
        results[0].error.as_deref(),
        Some("Failed to fetch: timeout of 200ms exceeded")
    );
}

#[tokio::test]
async fn test_depth_limit_stops_at_two_hops() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", page("Root", "Depth zero", &["/a"])).await;
    mount_page(&mock_server, "/a", page("A", "Depth one", &["/b"])).await;
    mount_page(&mock_server, "/b", page("B", "Depth two", &["/c"])).await;

    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page("C", "Too deep", &[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let results = create_test_crawler()
        .crawl(&format!("{}/", base_url))
        .await;

    assert_eq!(
        urls(&results),
        vec![
            format!("{}/", base_url),
            format!("{}/a", base_url),
            format!("{}/b", base_url),
        ]
    );
    assert_eq!(results[2].text.as_deref(), Some("Depth two"));
}

#[tokio::test]
async fn test_each_url_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Cycles and duplicate links, including one differing only by fragment
    mount_page(&mock_server, "/", page("Root", "Root", &["/a", "/b", "/a#intro"])).await;
    mount_page(&mock_server, "/a", page("A", "A", &["/", "/b"])).await;
    mount_page(&mock_server, "/b", page("B", "B", &["/a", "/"])).await;

    let results = create_test_crawler()
        .crawl(&format!("{}/", base_url))
        .await;

    assert_eq!(
        urls(&results),
        vec![
            format!("{}/", base_url),
            format!("{}/a", base_url),
            format!("{}/b", base_url),
        ]
    );

    let unique: HashSet<_> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(unique.len(), results.len());
}

#[tokio::test]
async fn test_seed_without_slash_is_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", page("Home", "Hello", &["/", "/#top"])).await;

    let results = create_test_crawler().crawl(&base_url).await;

    assert_eq!(urls(&results), vec![format!("{}/", base_url)]);
    assert_eq!(results[0].text.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn test_seed_fragment_is_stripped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", page("Home", "Hello", &["/"])).await;

    let results = crawl(&create_test_config(2_000), &format!("{}/#top", base_url))
        .await
        .unwrap();

    assert_eq!(urls(&results), vec![format!("{}/", base_url)]);
}

#[tokio::test]
async fn test_failed_page_does_not_stop_siblings() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", page("Root", "Root", &["/missing", "/ok"])).await;
    mount_page(&mock_server, "/ok", page("Ok", "Still here", &[])).await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = create_test_crawler()
        .crawl(&format!("{}/", base_url))
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[1],
        CrawlResult::failure(
            format!("{}/missing", base_url),
            format!("{}request failed with status code 404", FETCH_FAILED_PREFIX),
        )
    );
    assert_eq!(results[2].url, format!("{}/ok", base_url));
    assert_eq!(results[2].text.as_deref(), Some("Still here"));
}

#[tokio::test]
async fn test_results_follow_discovery_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", page("Root", "Root", &["/first", "/second"])).await;
    mount_page(&mock_server, "/first/child", page("Child", "Child", &[])).await;

    // The second sibling answers first; its entry still comes after the first subtree
    Mock::given(method("GET"))
        .and(path("/second"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page("Second", "Second", &[])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/first"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page("First", "First", &["/first/child"]))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&mock_server)
        .await;

    let results = create_test_crawler()
        .crawl(&format!("{}/", base_url))
        .await;

    assert_eq!(
        urls(&results),
        vec![
            format!("{}/", base_url),
            format!("{}/first", base_url),
            format!("{}/first/child", base_url),
            format!("{}/second", base_url),
        ]
    );
}

#[tokio::test]
async fn test_boilerplate_removed_from_crawled_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Docs</title><style>body { color: red }</style></head><body>
        <main><div role="main"><article>
            <h1>Getting started</h1>
            <p>Install the tool.</p>
            <div><a href="https://github.com/org/repo/edit/master/docs/index.md">Edit this page</a></div>
            <div>Last updated on 2024-01-01</div>
        </article></div></main>
        <script>console.log("tracking")</script>
        </body></html>"#
            .to_string(),
    )
    .await;

    let results = create_test_crawler()
        .crawl(&format!("{}/", base_url))
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title.as_deref(), Some("Docs"));
    let text = results[0].text.as_deref().unwrap();
    assert!(text.contains("Getting started"));
    assert!(text.contains("Install the tool."));
    assert!(!text.contains("Edit this page"));
    assert!(!text.contains("Last updated"));
    assert!(!text.contains("tracking"));
    assert!(!text.contains("color: red"));
}

#[tokio::test]
async fn test_invalid_seed() {
    let results = create_test_crawler().crawl("not a url").await;
    assert_eq!(results, vec![CrawlResult::failure("not a url", INVALID_URL)]);
}

#[tokio::test]
async fn test_crawl_entry_point() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", page("Home", "Hello", &[])).await;

    let results = crawl(&create_test_config(2_000), &format!("{}/", base_url))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text.as_deref(), Some("Hello"));
}
