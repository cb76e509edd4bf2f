//! Error taxonomy for dashboard fetches.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and server rejections both collapse into the same error
//! screen; [`FetchError::user_message`] picks the string shown to the user
//! while `Display` keeps the diagnostic detail for logs. A missing credential
//! is not a fetch error at all and lives in [`GateError`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::endpoint::Endpoint;

/// Failure of a single request against one of the vote endpoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("{endpoint} request failed: {cause}")]
    Network { endpoint: Endpoint, cause: String },
    /// Non-OK HTTP status, or an explicit `success: false` body.
    #[error("{endpoint} rejected (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        endpoint: Endpoint,
        status: u16,
        message: Option<String>,
    },
    /// A response arrived but its body did not match the endpoint contract.
    #[error("{endpoint} returned an unreadable body: {cause}")]
    Decode { endpoint: Endpoint, cause: String },
    /// No response within the client-side deadline.
    #[error("{endpoint} request timed out")]
    Timeout { endpoint: Endpoint },
}

impl FetchError {
    /// Endpoint the failed request was addressed to.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Network { endpoint, .. }
            | Self::Rejected { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::Timeout { endpoint } => *endpoint,
        }
    }

    /// Human-readable message for the error screen.
    ///
    /// Rejections prefer the server-supplied message. Transport failures
    /// always use the generic network message; their cause is for logs only.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { endpoint, .. } => endpoint.network_message().to_owned(),
            Self::Rejected { endpoint, message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| endpoint.fallback_message())
                .to_owned(),
            Self::Decode { endpoint, .. } => endpoint.fallback_message().to_owned(),
            Self::Timeout { .. } => "Request timed out".to_owned(),
        }
    }

    /// Whether the underlying cause should be logged for diagnostics.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// Reason the authenticated view cannot start fetching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("login required")]
    MissingCredential,
}
