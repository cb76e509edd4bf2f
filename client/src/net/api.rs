//! Browser implementation of the vote statistics source.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a `gloo-timers` deadline so a hung request cannot pin a screen in its
//! loading or refreshing state forever.
//! Server-side (SSR): every call fails with a network error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `FetchError` values instead of panics; the page decides what
//! to log and which message to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use votestats::endpoint::{self, Endpoint};
use votestats::{Candidate, FetchError, Overview, StatsSource, VotingStats};

/// Deadline for a single request, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// API base baked in at build time via `VOTE_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("VOTE_API_BASE").unwrap_or(endpoint::DEFAULT_API_BASE)
}

#[cfg(any(test, not(feature = "hydrate")))]
fn not_available(endpoint: Endpoint) -> FetchError {
    FetchError::Network {
        endpoint,
        cause: "not available on server".to_owned(),
    }
}

/// `StatsSource` backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserSource {
    base: String,
}

impl Default for BrowserSource {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl BrowserSource {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        endpoint::endpoint_url(&self.base, endpoint.path())
    }

    /// GET an endpoint and return its status and raw body.
    async fn get(&self, endpoint: Endpoint, token: Option<&str>) -> Result<(u16, String), FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(endpoint);
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(token) = token {
                request = request.header("Authorization", &endpoint::bearer_header(token));
            }
            let exchange = async move {
                let resp = request.send().await.map_err(|e| FetchError::Network {
                    endpoint,
                    cause: e.to_string(),
                })?;
                let status = resp.status();
                let body = resp.text().await.map_err(|e| FetchError::Network {
                    endpoint,
                    cause: e.to_string(),
                })?;
                Ok((status, body))
            };
            with_deadline(endpoint, exchange).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(not_available(endpoint))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn with_deadline<F>(endpoint: Endpoint, exchange: F) -> Result<(u16, String), FetchError>
where
    F: std::future::Future<Output = Result<(u16, String), FetchError>>,
{
    use futures::future::{Either, select};

    let exchange = std::pin::pin!(exchange);
    let deadline = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(exchange, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(FetchError::Timeout { endpoint }),
    }
}

#[async_trait(?Send)]
impl StatsSource for BrowserSource {
    async fn fetch_overview(&self) -> Result<Overview, FetchError> {
        let (status, body) = self.get(Endpoint::Overview, None).await?;
        endpoint::parse_overview(status, &body)
    }

    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, FetchError> {
        let (status, body) = self.get(Endpoint::Candidates, None).await?;
        endpoint::parse_candidates(status, &body)
    }

    async fn fetch_voting_stats(&self, token: &str) -> Result<VotingStats, FetchError> {
        let (status, body) = self.get(Endpoint::VotingStats, Some(token)).await?;
        endpoint::parse_voting_stats(status, &body)
    }
}
