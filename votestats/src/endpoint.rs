//! Typed response contracts for the three vote API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is inconsistent: the public stats call and the candidates call
//! wrap their payload in `{ success, ... }`, while the authenticated stats
//! call returns a flat object and signals failure through HTTP status only.
//! Each endpoint gets its own parser here so callers never assume uniformity.
//! Parsers take the raw status + body so browser and native HTTP stacks share
//! one interpretation.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;
use crate::model::{Candidate, Overview, VotingStats};

pub const DEFAULT_API_BASE: &str = "http://localhost:1200";
pub const STATS_PATH: &str = "/api/vote/stats";
pub const CANDIDATES_PATH: &str = "/api/vote/candidates";

/// Which call a request or failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Unauthenticated `GET /api/vote/stats` (overview shape).
    Overview,
    /// `GET /api/vote/candidates`.
    Candidates,
    /// Authenticated `GET /api/vote/stats` (flat shape).
    VotingStats,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview | Self::VotingStats => STATS_PATH,
            Self::Candidates => CANDIDATES_PATH,
        }
    }

    #[must_use]
    pub fn network_message(self) -> &'static str {
        match self {
            Self::Overview | Self::VotingStats => "Network error fetching stats",
            Self::Candidates => "Network error fetching candidates",
        }
    }

    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Overview | Self::VotingStats => "Failed to fetch voting stats",
            Self::Candidates => "Failed to load candidates",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Overview => "stats",
            Self::Candidates => "candidates",
            Self::VotingStats => "stats (authenticated)",
        };
        write!(f, "GET {} [{label}]", self.path())
    }
}

/// Join an API base URL and an endpoint path.
#[must_use]
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// `Authorization` header value for the stored credential.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[derive(Debug, Deserialize)]
struct CandidatesEnvelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Interpret a response from the unauthenticated stats endpoint.
///
/// # Errors
///
/// `Rejected` for a non-2xx status or `success != true`, `Decode` when a
/// successful body does not carry the overview shape.
pub fn parse_overview(status: u16, body: &str) -> Result<Overview, FetchError> {
    let endpoint = Endpoint::Overview;
    let value = checked_body(endpoint, status, body)?;
    require_success(endpoint, status, &value)?;
    decode(endpoint, value)
}

/// Interpret a response from the candidates endpoint.
///
/// # Errors
///
/// Same rules as [`parse_overview`].
pub fn parse_candidates(status: u16, body: &str) -> Result<Vec<Candidate>, FetchError> {
    let endpoint = Endpoint::Candidates;
    let value = checked_body(endpoint, status, body)?;
    require_success(endpoint, status, &value)?;
    let envelope: CandidatesEnvelope = decode(endpoint, value)?;
    Ok(envelope.candidates)
}

/// Interpret a response from the authenticated stats endpoint.
///
/// Only the HTTP status is checked; the body has no success flag.
///
/// # Errors
///
/// `Rejected` for a non-2xx status, `Decode` for a malformed body.
pub fn parse_voting_stats(status: u16, body: &str) -> Result<VotingStats, FetchError> {
    let endpoint = Endpoint::VotingStats;
    let value = checked_body(endpoint, status, body)?;
    decode(endpoint, value)
}

fn is_ok_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse the body as JSON and reject non-2xx statuses.
///
/// Error bodies are read for their `message` but are allowed to be non-JSON.
fn checked_body(endpoint: Endpoint, status: u16, body: &str) -> Result<Value, FetchError> {
    let parsed = serde_json::from_str::<Value>(body);
    if !is_ok_status(status) {
        let message = match &parsed {
            Ok(value) => server_message(value),
            Err(_) => None,
        };
        return Err(FetchError::Rejected { endpoint, status, message });
    }
    parsed.map_err(|e| FetchError::Decode {
        endpoint,
        cause: e.to_string(),
    })
}

/// Wrapped endpoints must carry `"success": true`; anything else is a rejection.
fn require_success(endpoint: Endpoint, status: u16, value: &Value) -> Result<(), FetchError> {
    if value.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(());
    }
    Err(FetchError::Rejected {
        endpoint,
        status,
        message: server_message(value),
    })
}

fn server_message(value: &Value) -> Option<String> {
    value.get("message").and_then(Value::as_str).map(str::to_owned)
}

fn decode<T: serde::de::DeserializeOwned>(endpoint: Endpoint, value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Decode {
        endpoint,
        cause: e.to_string(),
    })
}
