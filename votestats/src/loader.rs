//! Fetch orchestration shared by the browser and terminal dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`StatsSource`] is the seam between HTTP stacks (`gloo-net` in the
//! browser, `reqwest` in the CLI) and the dashboard logic. The source trait
//! is `?Send` because browser futures are not thread-safe; everything here
//! runs on a single cooperative executor.
//!
//! The authenticated results screen fans out to two endpoints and fans back
//! in only after both settle. Each side keeps its own outcome in
//! [`DualLoad`] so a failure on one side never hides the other's result.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use async_trait::async_trait;

use crate::derive::{CandidateRow, StyledCandidate, join_candidates, style_candidates};
use crate::error::{FetchError, GateError};
use crate::model::{Candidate, Overview, VotingStats};

/// Anything that can answer the three vote API calls.
#[async_trait(?Send)]
pub trait StatsSource {
    /// Unauthenticated overview of all roles.
    async fn fetch_overview(&self) -> Result<Overview, FetchError>;

    /// Candidate metadata; needs no credential.
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, FetchError>;

    /// Flat stats for the authenticated view, sent with a bearer credential.
    async fn fetch_voting_stats(&self, token: &str) -> Result<VotingStats, FetchError>;
}

/// Load the overview screen's payload.
///
/// # Errors
///
/// Whatever the source reports for the stats endpoint.
pub async fn load_overview<S>(source: &S) -> Result<Overview, FetchError>
where
    S: StatsSource + ?Sized,
{
    source.fetch_overview().await
}

/// Joined payload of the authenticated results screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsData {
    pub candidates: Vec<StyledCandidate>,
    pub stats: VotingStats,
    pub rows: Vec<CandidateRow>,
}

/// Independent outcomes of the two concurrent results fetches.
#[derive(Clone, Debug, PartialEq)]
pub struct DualLoad {
    pub candidates: Result<Vec<StyledCandidate>, FetchError>,
    pub stats: Result<VotingStats, FetchError>,
}

impl DualLoad {
    /// Every failure, candidates first.
    #[must_use]
    pub fn errors(&self) -> Vec<&FetchError> {
        self.candidates
            .as_ref()
            .err()
            .into_iter()
            .chain(self.stats.as_ref().err())
            .collect()
    }

    /// Combine both sides into the screen payload.
    ///
    /// # Errors
    ///
    /// The candidates error when that side failed, otherwise the stats error.
    pub fn into_result(self) -> Result<ResultsData, FetchError> {
        let candidates = self.candidates?;
        let stats = self.stats?;
        let rows = join_candidates(&candidates, &stats);
        Ok(ResultsData { candidates, stats, rows })
    }
}

/// Run the candidates and stats fetches concurrently and wait for both.
pub async fn load_all<S>(source: &S, token: &str) -> DualLoad
where
    S: StatsSource + ?Sized,
{
    let (candidates, stats) = futures::join!(source.fetch_candidates(), source.fetch_voting_stats(token));
    DualLoad {
        candidates: candidates.map(style_candidates),
        stats,
    }
}

/// Admit the results screen only with a non-blank stored credential.
///
/// # Errors
///
/// [`GateError::MissingCredential`] when no usable token is stored.
pub fn gate(token: Option<&str>) -> Result<&str, GateError> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(GateError::MissingCredential),
    }
}
