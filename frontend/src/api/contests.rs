use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use shared::{ContestSource, DashboardConfig, Result, SharedError};
use std::future::Future;

/// Resolves to `request`'s result, or a `NetworkFailure` once `timeout_ms` elapses first.
pub async fn with_timeout<F>(request: F, timeout_ms: u32) -> Result<String>
where
    F: Future<Output = Result<String>>,
{
    let request = Box::pin(request);
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SharedError::NetworkFailure(format!(
            "request timed out after {} ms",
            timeout_ms
        ))),
    }
}

/// Fetches the contest list over HTTP, giving up after a fixed timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpContestSource {
    url: String,
    timeout_ms: u32,
}

impl HttpContestSource {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.contest_list_url.clone(), config.fetch_timeout_ms)
    }

    async fn request(&self) -> Result<String> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| SharedError::NetworkFailure(format!("Failed to fetch contests: {}", e)))?;

        if !response.ok() {
            return Err(SharedError::NetworkFailure(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SharedError::NetworkFailure(format!("Failed to read response body: {}", e)))
    }
}

#[async_trait(?Send)]
impl ContestSource for HttpContestSource {
    async fn fetch_body(&self) -> Result<String> {
        debug!("Fetching contest list from {}", self.url);
        with_timeout(self.request(), self.timeout_ms).await
    }
}
