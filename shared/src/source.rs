//! Contest list retrieval: the transport seam, the cached service on top of
//! it, and the outcome types the views consume.

use crate::cache::{ResponseCache, CONTEST_LIST_KEY};
use crate::models::contest::{Contest, ContestListResponse};
use crate::{Result, SharedError};
use async_trait::async_trait;
use log::{debug, error, info};
use std::rc::Rc;

/// Shared, immutable contest list as handed to the views
pub type ContestList = Rc<Vec<Contest>>;

/// Transport that retrieves the raw contest list body.
///
/// Implementations report network failures, non-success statuses and
/// timeouts as `SharedError::NetworkFailure`.
#[async_trait(?Send)]
pub trait ContestSource {
    async fn fetch_body(&self) -> Result<String>;
}

/// Result of loading the contest list
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(ContestList),
    /// The upstream answered successfully with no contests
    Empty,
    Failed(SharedError),
}

impl FetchOutcome {
    fn from_result(result: Result<ContestList>) -> Self {
        match result {
            Ok(list) if list.is_empty() => FetchOutcome::Empty,
            Ok(list) => FetchOutcome::Loaded(list),
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    /// Collapses the outcome to what the views render: failures become an
    /// empty list.
    pub fn into_contests(self) -> ContestList {
        match self {
            FetchOutcome::Loaded(list) => list,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => Rc::new(Vec::new()),
        }
    }

    pub fn error(&self) -> Option<&SharedError> {
        match self {
            FetchOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Result of resolving a contest by its route id
#[derive(Debug, Clone, PartialEq)]
pub enum ContestLookup {
    Found(Contest),
    NotFound,
    /// The list could not be loaded, so the id could not be checked
    Unavailable(SharedError),
}

/// Linear scan comparing the route parameter with the stringified id
pub fn find_contest<'a>(contests: &'a [Contest], id: &str) -> Option<&'a Contest> {
    contests.iter().find(|contest| contest.key() == id)
}

/// Data source adapter: fetches through a `ContestSource` and caches the
/// normalized list for the lifetime of the injected cache.
pub struct ContestService<S> {
    source: S,
    cache: Rc<ResponseCache<ContestList>>,
}

impl<S: ContestSource> ContestService<S> {
    pub fn new(source: S, cache: Rc<ResponseCache<ContestList>>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &ResponseCache<ContestList> {
        &self.cache
    }

    /// Loads the contest list, reporting failures instead of hiding them.
    pub async fn load(&self) -> FetchOutcome {
        let result = self
            .cache
            .get_or_fetch(CONTEST_LIST_KEY, || async {
                let body = self.source.fetch_body().await?;
                let contests = ContestListResponse::parse(&body)?.into_contests()?;
                info!("Fetched {} contests", contests.len());
                Ok::<_, SharedError>(Rc::new(contests))
            })
            .await;
        if let Err(e) = &result {
            error!("Error fetching contests: {}", e);
        }
        FetchOutcome::from_result(result)
    }

    /// Fetches the contest list; any failure resolves to an empty list.
    pub async fn fetch_contests(&self) -> ContestList {
        self.load().await.into_contests()
    }

    /// Resolves the contest shown by the detail route.
    pub async fn lookup(&self, id: &str) -> ContestLookup {
        debug!("Looking up contest with ID: {}", id);
        match self.load().await {
            FetchOutcome::Failed(e) => ContestLookup::Unavailable(e),
            outcome => match find_contest(&outcome.into_contests(), id) {
                Some(contest) => ContestLookup::Found(contest.clone()),
                None => ContestLookup::NotFound,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contest::fixtures::alpha_beta;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    /// Source replaying a canned response and counting requests
    struct StubSource {
        response: Result<String>,
        calls: Rc<Cell<usize>>,
    }

    impl StubSource {
        fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                calls: Rc::new(Cell::new(0)),
            }
        }

        fn failing(error: SharedError) -> Self {
            Self {
                response: Err(error),
                calls: Rc::new(Cell::new(0)),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContestSource for StubSource {
        async fn fetch_body(&self) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn body_for(contests: &[Contest]) -> String {
        serde_json::json!({ "status": "OK", "result": contests }).to_string()
    }

    fn service(source: StubSource) -> ContestService<StubSource> {
        ContestService::new(source, Rc::new(ResponseCache::new()))
    }

    #[tokio::test]
    async fn test_fetch_keeps_upstream_order() {
        let service = service(StubSource::ok(&body_for(&alpha_beta())));
        let contests = service.fetch_contests().await;
        let ids: Vec<i64> = contests.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let source = StubSource::ok(&body_for(&alpha_beta()));
        let calls = source.calls.clone();
        let service = service(source);

        let first = service.fetch_contests().await;
        let second = service.fetch_contests().await;

        assert_eq!(calls.get(), 1);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_network_error_resolves_to_empty_list() {
        let service = service(StubSource::failing(SharedError::NetworkFailure(
            "connection refused".to_string(),
        )));

        assert!(service.fetch_contests().await.is_empty());
        assert!(matches!(
            service.load().await,
            FetchOutcome::Failed(SharedError::NetworkFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_failures_are_retried_on_next_call() {
        let source = StubSource::failing(SharedError::NetworkFailure("timeout".to_string()));
        let calls = source.calls.clone();
        let service = service(source);

        service.fetch_contests().await;
        service.fetch_contests().await;

        assert_eq!(calls.get(), 2);
        assert_eq!(service.cache().stats().entries, 0);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_failure() {
        let service = service(StubSource::ok(r#"{"contests": []}"#));
        let outcome = service.load().await;
        assert!(matches!(
            outcome.error(),
            Some(SharedError::MalformedResponse(_))
        ));
        assert!(outcome.into_contests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_result_is_distinguished_from_failure() {
        let service = service(StubSource::ok(r#"{"status": "OK", "result": []}"#));
        assert_eq!(service.load().await, FetchOutcome::Empty);
    }

    #[tokio::test]
    async fn test_lookup_by_route_id() {
        let service = service(StubSource::ok(&body_for(&alpha_beta())));

        match service.lookup("2").await {
            ContestLookup::Found(contest) => assert_eq!(contest.name, "Beta Div"),
            other => panic!("unexpected lookup result: {:?}", other),
        }
        assert_eq!(service.lookup("3").await, ContestLookup::NotFound);
        assert_eq!(service.lookup("01").await, ContestLookup::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_when_fetch_fails() {
        let service = service(StubSource::failing(SharedError::NetworkFailure(
            "offline".to_string(),
        )));
        assert!(matches!(
            service.lookup("1").await,
            ContestLookup::Unavailable(_)
        ));
    }
}
