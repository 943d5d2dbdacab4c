//! Browser tests for the HTTP contest source error paths.
//! Run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use frontend::api::contests::with_timeout;
use frontend::api::HttpContestSource;
use futures::future;
use shared::{ContestService, ContestSource, FetchOutcome, ResponseCache, SharedError};
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Nothing listens on the discard port
const UNREACHABLE_URL: &str = "http://127.0.0.1:9/api/contest.list";

#[wasm_bindgen_test]
async fn unreachable_host_is_a_network_failure() {
    let source = HttpContestSource::new(UNREACHABLE_URL, 15_000);

    let err = source.fetch_body().await.unwrap_err();
    assert!(matches!(err, SharedError::NetworkFailure(_)), "got {:?}", err);
}

#[wasm_bindgen_test]
async fn non_success_status_is_a_network_failure() {
    // The test server answers 404 for paths it does not serve
    let source = HttpContestSource::new("/no-such-contest-list.json", 15_000);

    match source.fetch_body().await {
        Err(SharedError::NetworkFailure(message)) => {
            assert!(message.starts_with("HTTP 404"), "got {}", message)
        }
        other => panic!("expected a network failure, got {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn stalled_request_times_out() {
    let stalled = future::pending::<shared::Result<String>>();

    let err = with_timeout(stalled, 0).await.unwrap_err();
    assert_eq!(
        err,
        SharedError::NetworkFailure("request timed out after 0 ms".to_string())
    );
}

#[wasm_bindgen_test]
async fn finished_request_beats_the_timeout() {
    let ready = future::ready(Ok(r#"{"status":"OK","result":[]}"#.to_string()));

    let body = with_timeout(ready, 1_000).await.unwrap();
    assert_eq!(body, r#"{"status":"OK","result":[]}"#);
}

#[wasm_bindgen_test]
async fn service_reports_failure_and_caches_nothing() {
    let cache = Rc::new(ResponseCache::new());
    let source = HttpContestSource::new(UNREACHABLE_URL, 15_000);
    let service = ContestService::new(source, cache.clone());

    let outcome = service.load().await;
    assert!(matches!(outcome, FetchOutcome::Failed(SharedError::NetworkFailure(_))));
    assert_eq!(cache.stats().entries, 0);
}
