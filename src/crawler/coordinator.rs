//! Crawler coordinator - main crawl orchestration logic
//!
//! A crawl is a depth-bounded, same-origin traversal from a seed URL:
//! - Each page is fetched, its content extracted, and its links discovered
//! - Same-origin links not yet visited are crawled one hop deeper
//! - All children of a page are crawled concurrently and joined
//! - Per-page failures become `error` entries; nothing aborts the crawl
//!
//! The result list starts with the seed page. Every page's entry precedes the
//! entries of its descendants, which follow in link-discovery order.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::{parse_page, ParsedPage};
use crate::crawler::result::CrawlResult;
use crate::crawler::visited::VisitedSet;
use crate::state::{PageState, SkipReason};
use crate::url::{is_same_origin, origin_of, strip_fragment};
use crate::GleanError;
use futures::future::{join_all, BoxFuture, FutureExt};
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Error reported for a URL that cannot be parsed
pub const INVALID_URL: &str = "Invalid URL";

/// Prefix of the error reported for a page that could not be fetched
pub const FETCH_FAILED_PREFIX: &str = "Failed to fetch: ";

/// Prefix of the error reported for a page that could not be processed
pub const PARSE_FAILED_PREFIX: &str = "Failed to parse: ";

/// Crawls documentation sites
///
/// A `Crawler` owns the HTTP client and can run any number of crawls; each call
/// to [`Crawler::crawl`] starts with an empty visited set.
#[derive(Debug, Clone)]
pub struct Crawler {
    client: Client,
    settings: CrawlerConfig,
}

/// Outcome of the guards run before a URL is fetched
#[derive(Debug)]
enum Admission {
    /// The URL was claimed and will be fetched
    Admit(Url),

    /// The URL is out of scope; produces no result
    Skip(SkipReason),

    /// The URL cannot be crawled; produces this result
    Reject(CrawlResult),
}

/// State shared by every branch of one crawl
struct CrawlRun<'c> {
    crawler: &'c Crawler,
    base_origin: String,
    visited: VisitedSet,
}

impl Crawler {
    /// Creates a crawler from the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to crawl
    /// * `Err(GleanError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, GleanError> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config.crawler.clone()))
    }

    /// Creates a crawler around an existing HTTP client
    pub fn with_client(client: Client, settings: CrawlerConfig) -> Self {
        Self { client, settings }
    }

    /// Maximum number of hops followed from the seed
    pub fn max_depth(&self) -> u32 {
        self.settings.max_depth
    }

    /// Crawls from `seed` and returns one result per fetched URL
    ///
    /// Only URLs sharing the seed's origin are visited. The seed is normalized
    /// and stripped of its fragment before it is claimed, so its result carries
    /// the same URL a link back to it resolves to. A seed that cannot be parsed
    /// yields a single `"Invalid URL"` result.
    pub async fn crawl(&self, seed: &str) -> Vec<CrawlResult> {
        let seed_url = match Url::parse(seed) {
            Ok(url) => strip_fragment(url),
            Err(_) => {
                tracing::error!("Invalid URL encountered: {}", seed);
                return vec![CrawlResult::failure(seed, INVALID_URL)];
            }
        };

        let run = CrawlRun {
            crawler: self,
            base_origin: origin_of(&seed_url),
            visited: VisitedSet::new(),
        };

        let start_time = Instant::now();
        let results = run.visit(seed_url.to_string(), 0).await;

        tracing::info!(
            "Crawl of {} completed: {} pages ({} errors) in {:?}",
            seed,
            results.len(),
            results.iter().filter(|r| r.is_error()).count(),
            start_time.elapsed()
        );

        results
    }
}

impl<'c> CrawlRun<'c> {
    /// Runs the guards for `url` at `depth` and claims it if it passes
    fn admit(&self, url: &str, depth: u32) -> Admission {
        if depth > self.crawler.settings.max_depth {
            return Admission::Skip(SkipReason::DepthExceeded);
        }
        if self.visited.contains(url) {
            return Admission::Skip(SkipReason::AlreadyVisited);
        }

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::error!("Invalid URL encountered: {}", url);
                return Admission::Reject(CrawlResult::failure(url, INVALID_URL));
            }
        };
        if !is_same_origin(&parsed, &self.base_origin) {
            return Admission::Skip(SkipReason::CrossOrigin);
        }

        // A sibling branch may have claimed it since the check above
        if !self.visited.claim(url) {
            return Admission::Skip(SkipReason::AlreadyVisited);
        }

        Admission::Admit(parsed)
    }

    /// Visits `url` and everything reachable from it
    fn visit(&self, url: String, depth: u32) -> BoxFuture<'_, Vec<CrawlResult>> {
        async move {
            match self.admit(&url, depth) {
                Admission::Admit(page_url) => self.visit_admitted(page_url, depth).await,
                Admission::Skip(reason) => {
                    tracing::trace!("Skipping {} at depth {}: {}", url, depth, reason);
                    Vec::new()
                }
                Admission::Reject(result) => vec![result],
            }
        }
        .boxed()
    }

    async fn visit_admitted(&self, url: Url, depth: u32) -> Vec<CrawlResult> {
        let mut state = PageState::Unvisited;
        advance(&url, &mut state, PageState::Visited);
        tracing::info!("Crawling: {} at depth {}", url, depth);

        advance(&url, &mut state, PageState::Fetching);
        let timeout_ms = self.crawler.settings.request_timeout_ms;
        let body = match fetch_page(&self.crawler.client, &url, timeout_ms).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to fetch {}: {}", url, e);
                advance(&url, &mut state, PageState::FetchFailed);
                return vec![CrawlResult::failure(
                    url,
                    format!("{}{}", FETCH_FAILED_PREFIX, e),
                )];
            }
        };
        advance(&url, &mut state, PageState::Fetched);

        advance(&url, &mut state, PageState::Extracting);
        let follow_links = depth < self.crawler.settings.max_depth;
        let parsed = parse_page(&body, &url, follow_links);
        let (entry, links) = settle_page(&url, &mut state, parsed);

        let children = links
            .into_iter()
            .filter(|link| is_same_origin(link, &self.base_origin))
            .filter(|link| !self.visited.contains(link.as_str()))
            .map(|link| self.visit(link.into(), depth + 1));
        let nested = join_all(children).await;

        let mut results = Vec::with_capacity(1 + nested.iter().map(Vec::len).sum::<usize>());
        results.push(entry);
        results.extend(nested.into_iter().flatten());
        results
    }
}

/// Turns a parsed page into its result entry and the links to follow
///
/// A failed extraction still yields the page's links; a failed link discovery
/// is recorded on the entry and yields none.
fn settle_page(url: &Url, state: &mut PageState, parsed: ParsedPage) -> (CrawlResult, Vec<Url>) {
    let ParsedPage { content, links } = parsed;

    let mut entry = match content {
        Ok(content) => {
            advance(url, state, PageState::Extracted);
            CrawlResult::page(url.as_str(), content)
        }
        Err(e) => {
            tracing::error!("Failed to parse {}: {}", url, e);
            advance(url, state, PageState::ExtractFailed);
            CrawlResult::failure(url.as_str(), format!("{}{}", PARSE_FAILED_PREFIX, e))
        }
    };

    let links = match links {
        Ok(links) => links,
        Err(e) => {
            tracing::error!("Failed to parse links of {}: {}", url, e);
            entry.error = Some(format!("{}{}", PARSE_FAILED_PREFIX, e));
            Vec::new()
        }
    };

    (entry, links)
}

/// Moves a page to its next lifecycle state
fn advance(url: &Url, state: &mut PageState, next: PageState) {
    debug_assert!(
        state.can_transition_to(next),
        "invalid page state transition for {}: {} -> {}",
        url,
        state,
        next
    );
    if next.is_terminal() {
        tracing::debug!("{}: {}", url, next);
    } else {
        tracing::trace!("{}: {} -> {}", url, state, next);
    }
    *state = next;
}

/// Runs a crawl on its own task
///
/// A crawl that panics or is aborted surfaces as `GleanError::CrawlAborted`
/// instead of unwinding into the caller.
pub async fn run_crawl(crawler: Arc<Crawler>, seed: String) -> Result<Vec<CrawlResult>, GleanError> {
    tokio::spawn(async move { crawler.crawl(&seed).await })
        .await
        .map_err(|e| GleanError::CrawlAborted(e.to_string()))
}
