//! `reqwest`-backed vote API client.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use votestats::endpoint::{self, Endpoint};
use votestats::{Candidate, FetchError, Overview, StatsSource, VotingStats};

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

impl HttpSource {
    /// # Errors
    ///
    /// Returns the builder error when the TLS backend cannot initialize.
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base: base.into() })
    }

    async fn get(&self, endpoint: Endpoint, token: Option<&str>) -> Result<(u16, String), FetchError> {
        let url = endpoint::endpoint_url(&self.base, endpoint.path());
        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, endpoint::bearer_header(token));
        }
        tracing::debug!(%endpoint, %url, "fetching");
        let resp = request.send().await.map_err(|e| transport_error(endpoint, &e))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| transport_error(endpoint, &e))?;
        Ok((status, body))
    }
}

fn transport_error(endpoint: Endpoint, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout { endpoint }
    } else {
        FetchError::Network { endpoint, cause: err.to_string() }
    }
}

#[async_trait(?Send)]
impl StatsSource for HttpSource {
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
