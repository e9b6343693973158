//! Integration tests for the feed: category selection, initial load,
//! prefetching and stale results, against a mock search endpoint.
//!
//! Each test starts its own wiremock server. Responses are mounted with
//! `up_to_n_times(1)` so consecutive fetches see consecutive bodies.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wikiswipe::catalog;
use wikiswipe::feed::{load_initial, load_more, Pager};
use wikiswipe::session::{Phase, SessionState};
use wikiswipe::wiki::{ArticleSource, FetchError, WikiClient};

fn pages_body(ids: &[u64]) -> serde_json::Value {
    let pages: serde_json::Map<String, serde_json::Value> = ids
        .iter()
        .map(|id| {
            (
                id.to_string(),
                serde_json::json!({
                    "pageid": id,
                    "title": format!("Page {}", id),
                    "extract": format!("Page {} is an article.", id),
                    "description": "test page",
                }),
            )
        })
        .collect();
    serde_json::json!({ "batchcomplete": "", "query": { "pages": pages } })
}

async fn mount_once(server: &MockServer, ids: &[u64]) {
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pages_body(ids)))
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer, timeout: Duration) -> WikiClient {
    WikiClient::new(&format!("{}/w/api.php", server.uri()), Some(timeout)).unwrap()
}

fn ids(state: &SessionState) -> Vec<u64> {
    state.articles().iter().map(|a| a.page_id).collect()
}

// ============================================================================
// Initial load
// ============================================================================

#[tokio::test]
async fn test_initial_load_issues_two_fetches_with_category_query() {
    let server = MockServer::start().await;
    let chess = catalog::find("chess").unwrap();
    Mock::given(method("GET"))
        .and(query_param("gsrsearch", chess.query))
        .respond_with(ResponseTemplate::new(200).set_body_json(pages_body(&[1, 2, 3])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("gsrsearch", chess.query))
        .respond_with(ResponseTemplate::new(200).set_body_json(pages_body(&[3, 4, 5])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let pager = Pager::new(3);
    let mut state = SessionState::new(catalog::default_category());

    let request = pager.select_category(&mut state, chess);
    assert_eq!(state.phase(), Phase::InitialLoading);
    assert_eq!(request.query, chess.query);

    let load = load_initial(&client, &request).await;
    assert!(load.error.is_none());
    assert!(pager.finish_initial(&mut state, request.generation, load));

    // Page 3 from the second batch is dropped as a duplicate
    assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_response_without_pages_yields_empty_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "batchcomplete": "" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    assert!(client.fetch_batch("anything", 10).await.unwrap().is_empty());

    let pager = Pager::new(10);
    let mut state = SessionState::default();
    let request = pager.select_category(&mut state, catalog::find("space").unwrap());
    let load = load_initial(&client, &request).await;
    assert!(load.error.is_none());
    pager.finish_initial(&mut state, request.generation, load);

    assert!(state.is_empty());
    assert!(state.current().is_none());
    assert_eq!(state.phase(), Phase::Idle);
}

#[tokio::test]
async fn test_initial_failure_leaves_empty_idle_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let pager = Pager::new(10);
    let mut state = SessionState::default();
    let request = pager.select_category(&mut state, catalog::default_category());

    let load = load_initial(&client, &request).await;
    assert!(matches!(load.error, Some(FetchError::HttpStatus(503))));
    pager.finish_initial(&mut state, request.generation, load);

    assert!(state.is_empty());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pages_body(&[1]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_millis(200));
    let result = client.fetch_batch("slow", 10).await;
    assert!(matches!(result, Err(FetchError::Timeout(_))));
}

/// Serve headers that promise a body, then stall after a few bytes.
async fn stalling_server() -> (String, tokio::task::JoinHandle<()>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://127.0.0.1:{}/w/api.php", listener.local_addr().unwrap().port());
    let handle = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\n{\"batch")
                .await;
            let _ = socket.flush().await;
            open.push(socket);
        }
    });
    (base, handle)
}

#[tokio::test]
async fn test_stalled_body_releases_initial_phase() {
    let (base, server) = stalling_server().await;
    let client = WikiClient::new(&base, Some(Duration::from_millis(200))).unwrap();
    let pager = Pager::new(10);
    let mut state = SessionState::default();

    let request = pager.select_category(&mut state, catalog::default_category());
    let load = tokio::time::timeout(Duration::from_secs(5), load_initial(&client, &request))
        .await
        .expect("request timeout bounds the body read");
    assert!(matches!(load.error, Some(FetchError::Timeout(_))));
    pager.finish_initial(&mut state, request.generation, load);

    assert!(state.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    server.abort();
}

// ============================================================================
// Prefetch
// ============================================================================

#[tokio::test]
async fn test_all_duplicate_batch_retries_once_and_appends_whole_retry() {
    let server = MockServer::start().await;
    mount_once(&server, &[1, 2, 3, 4, 5]).await;
    mount_once(&server, &[1, 2, 3, 4, 5]).await;
    // Prefetch: every id already known, then the retry
    mount_once(&server, &[1, 2]).await;
    mount_once(&server, &[2, 6]).await;

    let client = client_for(&server, Duration::from_secs(5));
    let pager = Pager::new(5);
    let mut state = SessionState::default();

    let request = pager.select_category(&mut state, catalog::default_category());
    let load = load_initial(&client, &request).await;
    pager.finish_initial(&mut state, request.generation, load);
    assert_eq!(state.len(), 5);

    assert!(pager.advance(&mut state).prefetch.is_none());
    let more = pager
        .advance(&mut state)
        .prefetch
        .expect("cursor 2 of 5 leaves 3 remaining");
    assert!(state.is_loading_more());

    let load = load_more(&client, &more).await;
    assert!(load.retried);
    assert!(pager.finish_more(&mut state, more.generation, load));

    // The retry batch is kept unfiltered, duplicates included
    assert_eq!(ids(&state), vec![1, 2, 3, 4, 5, 2, 6]);
    assert_eq!(server.received_requests().await.unwrap().len(), 4);

    let uids: HashSet<_> = state.articles().iter().map(|a| a.uid.as_str()).collect();
    assert_eq!(uids.len(), state.len());
}

#[tokio::test]
async fn test_background_failure_keeps_list_and_clears_phase() {
    let server = MockServer::start().await;
    mount_once(&server, &[1, 2, 3]).await;
    mount_once(&server, &[4]).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let pager = Pager::new(3);
    let mut state = SessionState::default();

    let request = pager.select_category(&mut state, catalog::default_category());
    let load = load_initial(&client, &request).await;
    pager.finish_initial(&mut state, request.generation, load);

    let more = pager.advance(&mut state).prefetch.unwrap();
    let load = load_more(&client, &more).await;
    assert!(matches!(load.error, Some(FetchError::HttpStatus(500))));
    pager.finish_more(&mut state, more.generation, load);

    assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    assert_eq!(state.cursor(), 1);
    assert_eq!(state.phase(), Phase::Idle);
}

// ============================================================================
// Stale results
// ============================================================================

#[tokio::test]
async fn test_result_for_previous_category_is_discarded() {
    let server = MockServer::start().await;
    mount_once(&server, &[1, 2]).await;
    mount_once(&server, &[3, 4]).await;

    let client = client_for(&server, Duration::from_secs(5));
    let pager = Pager::new(2);
    let mut state = SessionState::default();

    let first = pager.select_category(&mut state, catalog::find("chess").unwrap());
    let second = pager.select_category(&mut state, catalog::find("art").unwrap());
    assert_ne!(first.generation, second.generation);

    let stale = load_initial(&client, &first).await;
    assert_eq!(stale.articles.len(), 4);
    assert!(!pager.finish_initial(&mut state, first.generation, stale));

    assert!(state.is_empty());
    assert_eq!(state.category().id, "art");
    assert_eq!(state.phase(), Phase::InitialLoading);
}
