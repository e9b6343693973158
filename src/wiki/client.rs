use super::types::{Article, SearchResponse};
use futures::StreamExt;
use rand::Rng;
use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default search endpoint.
pub const DEFAULT_API_BASE: &str = "https://en.wikipedia.org/w/api.php";

/// Default number of articles requested per fetch.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Random result offsets are drawn from `0..MAX_RANDOM_OFFSET`.
///
/// The endpoint returns a stable ranked order for a query, so the offset is
/// the only source of variety between repeated fetches.
pub const MAX_RANDOM_OFFSET: u32 = 500;

/// Thumbnails are requested at this width.
const THUMBNAIL_SIZE: &str = "800";

const MAX_RESPONSE_SIZE: usize = 5 * 1024 * 1024; // 5MB

const USER_AGENT: &str = concat!(
    "wikiswipe/",
    env!("CARGO_PKG_VERSION"),
    " (terminal article browser)"
);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("Insecure API base URL: HTTPS required (except localhost for testing)")]
    InsecureBaseUrl,
}

/// Anything that can produce a batch of articles for a search query.
///
/// Implemented by [`WikiClient`] for the live endpoint and by scripted
/// sources in tests.
pub trait ArticleSource: Send + Sync {
    fn fetch_batch(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Article>, FetchError>> + Send;
}

/// Client for the search endpoint.
#[derive(Debug)]
pub struct WikiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
    /// Last fetch stamp handed out, in ms. Kept strictly increasing so uids
    /// from two fetches in the same millisecond still differ.
    last_stamp_ms: AtomicI64,
}

impl WikiClient {
    /// Create a client for `base_url`.
    ///
    /// HTTPS is required unless the host is localhost/127.0.0.1 (mock servers).
    /// A `timeout` of `None` lets requests run unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;
        match base_url.scheme() {
            "https" => {}
            "http" if matches!(base_url.host_str(), Some("localhost" | "127.0.0.1")) => {
                tracing::warn!(base_url = %base_url, "Using non-HTTPS API base URL (localhost only)");
            }
            _ => {
                tracing::error!(base_url = %base_url, "Rejecting non-HTTPS API base URL");
                return Err(FetchError::InsecureBaseUrl);
            }
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout,
            last_stamp_ms: AtomicI64::new(0),
        })
    }

    /// Build the request URL for one fetch.
    pub fn search_url(&self, query: &str, limit: usize, offset: u32) -> Url {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("format", "json")
            .append_pair("generator", "search")
            .append_pair("gsrsearch", query)
            .append_pair("gsrlimit", &limit)
            .append_pair("prop", "extracts|pageimages|description")
            .append_pair("exintro", "1")
            .append_pair("explaintext", "1")
            .append_pair("exlimit", &limit)
            .append_pair("piprop", "thumbnail")
            .append_pair("pithumbsize", THUMBNAIL_SIZE)
            .append_pair("pilimit", &limit)
            .append_pair("origin", "*")
            .append_pair("gsroffset", &offset);
        url
    }

    /// Strictly increasing wall-clock stamp in ms.
    fn next_stamp(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let prev = self
            .last_stamp_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or(now);
        now.max(prev.saturating_add(1))
    }

    /// GET `url` and read the body. The timeout covers headers and body.
    async fn get_body(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        let exchange = async {
            let response = self.http.get(url).send().await?;
            if !response.status().is_success() {
                return Err(FetchError::HttpStatus(response.status().as_u16()));
            }
            read_limited(response, MAX_RESPONSE_SIZE).await
        };

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| FetchError::Timeout(limit))?,
            None => exchange.await,
        }
    }
}

impl ArticleSource for WikiClient {
    /// One search request with a fresh random offset.
    ///
    /// A well-formed response without `query.pages` yields an empty batch.
    async fn fetch_batch(&self, query: &str, limit: usize) -> Result<Vec<Article>, FetchError> {
        let offset = rand::rng().random_range(0..MAX_RANDOM_OFFSET);
        let url = self.search_url(query, limit, offset);
        tracing::debug!(query, limit, offset, "Fetching article batch");

        let body = self.get_body(url).await?;
        let response: SearchResponse = serde_json::from_slice(&body)?;
        let articles = response.into_articles(self.next_stamp());

        tracing::debug!(query, count = articles.len(), "Fetched article batch");
        Ok(articles)
    }
}

async fn read_limited(response: reqwest::Response, limit: usize) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
