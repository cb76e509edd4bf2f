//! Wire DTOs for the vote statistics API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON (`camelCase`, Mongo-style `_id`).
//! Counters and percentages are decoded leniently: the backend sometimes
//! sends percentages as preformatted strings (`"75.0"`) and omits fields it
//! has no value for, so missing or `null` numbers decode as zero and
//! missing or `null` ids and names decode as empty strings.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Organization-wide participation numbers. Server-computed; displayed as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub voted_users: u64,
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub voting_percentage: f64,
}

/// One candidate's vote share within a role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateStat {
    /// Join key. The authenticated stats endpoint may group by display name,
    /// in which case this holds the candidate's name instead of its id.
    #[serde(rename = "_id", default, deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub count: u64,
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub percentage: f64,
}

/// Participation and candidate breakdown for a single contestable role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStats {
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub voted_users: u64,
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub voting_percentage: f64,
    /// Rendered in the order supplied; never re-sorted or normalized.
    #[serde(default)]
    pub candidate_stats: Vec<CandidateStat>,
}

/// Payload of the unauthenticated statistics endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub overall: OverallStats,
    /// Keyed by role identifier, preserving the server's ordering.
    #[serde(default)]
    pub role_stats: IndexMap<String, RoleStats>,
}

/// Candidate metadata, fetched independently of vote counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default)]
    pub party: Option<String>,
}

/// Flat payload of the authenticated statistics endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub voted_users: u64,
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub voting_percentage: f64,
    #[serde(default)]
    pub candidate_stats: Vec<CandidateStat>,
}

/// Identifiers and names: `null` decodes as empty, numeric ids as their
/// decimal text.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string, got {other}"))),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= 0.0
                && float.fract() == 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom(format!("expected non-negative integer count, got {number}")))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("expected integer count, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_percentage<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Null => return Ok(0.0),
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => match raw.trim().trim_end_matches('%').parse::<f64>() {
            Ok(pct) => Some(pct),
            Err(_) => return Err(D::Error::custom(format!("expected percentage, got {raw:?}"))),
        },
        _ => None,
    };
    match parsed {
        Some(pct) if pct.is_finite() => Ok(pct),
        _ => Err(D::Error::custom("expected finite percentage")),
    }
}
