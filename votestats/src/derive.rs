//! Client-side derivation from fetched statistics.
//!
//! DESIGN
//! ======
//! Two paths with different rules:
//! - Overview: server percentages are displayed as supplied; nothing here
//!   recomputes or normalizes them. Only chart heights and bar widths are
//!   derived.
//! - Authenticated results: candidate metadata is joined to vote counts and
//!   the percentage is computed locally as `count / votedUsers * 100`.
//!
//! Everything returned is owned so UI layers can move rows into views.

#[cfg(test)]
#[path = "derive_test.rs"]
mod derive_test;

use crate::model::{Candidate, CandidateStat, Overview, RoleStats, VotingStats};
use crate::palette::{self, RoleInfo, Swatch};

pub const DEFAULT_PARTY: &str = "Independent Party";

/// Full column height of the vote distribution chart, in pixels.
pub const CHART_BAR_MAX_PX: f64 = 80.0;
/// Columns never shrink below this, even when every share is zero.
pub const CHART_BAR_MIN_PX: f64 = 8.0;

// =============================================================================
// AUTHENTICATED RESULTS
// =============================================================================

/// Candidate metadata with its cosmetic avatar assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledCandidate {
    pub id: String,
    pub name: String,
    pub party: String,
    pub emoji: &'static str,
    pub swatch: Swatch,
}

/// Assign avatar emoji/gradient by list position and default the party.
#[must_use]
pub fn style_candidates(candidates: Vec<Candidate>) -> Vec<StyledCandidate> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| StyledCandidate {
            id: candidate.id,
            name: candidate.name,
            party: candidate
                .party
                .filter(|party| !party.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PARTY.to_owned()),
            emoji: palette::candidate_emoji(index),
            swatch: palette::candidate_swatch(index),
        })
        .collect()
}

/// One rendered result line: a candidate plus its joined vote count.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateRow {
    pub candidate: StyledCandidate,
    pub count: u64,
    pub percentage: f64,
}

/// Locate the vote record for a candidate.
///
/// Matches the stat identifier against the candidate id first, then against
/// the candidate name. Two candidates sharing a display name will resolve to
/// the same record on the name path. Empty keys never match.
#[must_use]
pub fn find_stat<'a>(candidate: &StyledCandidate, stats: &'a [CandidateStat]) -> Option<&'a CandidateStat> {
    let by_key = |key: &str| {
        if key.is_empty() {
            return None;
        }
        stats.iter().find(|stat| stat.id == key)
    };
    by_key(&candidate.id).or_else(|| by_key(&candidate.name))
}

/// `count / voted * 100` rounded to one decimal; zero when nobody has voted.
#[must_use]
pub fn share_of_votes(count: u64, voted: u64) -> f64 {
    if voted == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let raw = count as f64 / voted as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// One row per candidate (never per stat); unmatched candidates get zero.
#[must_use]
pub fn join_candidates(candidates: &[StyledCandidate], stats: &VotingStats) -> Vec<CandidateRow> {
    candidates
        .iter()
        .map(|candidate| {
            let count = find_stat(candidate, &stats.candidate_stats).map_or(0, |stat| stat.count);
            CandidateRow {
                candidate: candidate.clone(),
                count,
                percentage: share_of_votes(count, stats.voted_users),
            }
        })
        .collect()
}

// =============================================================================
// OVERVIEW
// =============================================================================

/// Column heights for a role's vote distribution chart, in stat order.
///
/// Heights are relative to the largest share in the role. When the largest
/// share is zero every column sits at [`CHART_BAR_MIN_PX`].
#[must_use]
pub fn bar_heights(stats: &[CandidateStat]) -> Vec<f64> {
    let max = stats.iter().map(|stat| stat.percentage).fold(0.0_f64, f64::max);
    stats
        .iter()
        .map(|stat| {
            if max > 0.0 {
                (stat.percentage / max * CHART_BAR_MAX_PX).max(CHART_BAR_MIN_PX)
            } else {
                CHART_BAR_MIN_PX
            }
        })
        .collect()
}

/// Width of a horizontal progress bar, as a CSS percentage.
#[must_use]
pub fn bar_width(percentage: f64) -> f64 {
    if percentage.is_finite() { percentage.clamp(0.0, 100.0) } else { 0.0 }
}

/// Candidate line inside a role card.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleCandidateRow {
    pub stat: CandidateStat,
    pub emoji: &'static str,
    pub swatch: Swatch,
    pub bar_width: f64,
    pub chart_height: f64,
    pub chart_label: String,
}

/// Everything a role card renders.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleView {
    pub key: String,
    pub title: String,
    pub icon: &'static str,
    pub stats: RoleStats,
    pub rows: Vec<RoleCandidateRow>,
    /// The distribution chart is only drawn once somebody has voted.
    pub show_chart: bool,
}

#[must_use]
pub fn role_view(key: &str, role: &RoleStats) -> RoleView {
    let label = palette::role_label(key);
    let heights = bar_heights(&role.candidate_stats);
    let rows = role
        .candidate_stats
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (stat, chart_height))| RoleCandidateRow {
            stat: stat.clone(),
            emoji: palette::role_emoji(index),
            swatch: palette::role_swatch(index),
            bar_width: bar_width(stat.percentage),
            chart_height,
            chart_label: first_name(&stat.name).to_owned(),
        })
        .collect();
    RoleView {
        key: key.to_owned(),
        title: label.title.to_owned(),
        icon: label.icon,
        stats: role.clone(),
        rows,
        show_chart: role.voted_users > 0,
    }
}

/// Which roles the overview renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Role(String),
}

impl RoleFilter {
    /// `"all"` (any case) selects every role; anything else names one role.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Role(raw.to_owned())
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Role(key) => key,
        }
    }
}

/// Role cards for the current filter. An unknown role yields no cards.
#[must_use]
pub fn select_roles(overview: &Overview, filter: &RoleFilter) -> Vec<RoleView> {
    match filter {
        RoleFilter::All => overview
            .role_stats
            .iter()
            .map(|(key, role)| role_view(key, role))
            .collect(),
        RoleFilter::Role(key) => overview
            .role_stats
            .get(key)
            .map(|role| vec![role_view(key, role)])
            .unwrap_or_default(),
    }
}

/// A filter button above the role cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleTab {
    pub filter: RoleFilter,
    pub title: String,
    pub icon: &'static str,
}

/// "All Roles", then every registry role, then roles only present in data.
#[must_use]
pub fn role_tabs(overview: &Overview) -> Vec<RoleTab> {
    let mut tabs = vec![RoleTab {
        filter: RoleFilter::All,
        title: "All Roles".to_owned(),
        icon: "📋",
    }];
    tabs.extend(palette::ROLE_REGISTRY.iter().map(|info: &RoleInfo| RoleTab {
        filter: RoleFilter::Role(info.key.to_owned()),
        title: info.title.to_owned(),
        icon: info.icon,
    }));
    tabs.extend(
        overview
            .role_stats
            .keys()
            .filter(|key| !palette::ROLE_REGISTRY.iter().any(|info| info.key == key.as_str()))
            .map(|key| RoleTab {
                filter: RoleFilter::Role(key.clone()),
                title: key.clone(),
                icon: palette::FALLBACK_ROLE_ICON,
            }),
    );
    tabs
}

/// Per-role participation tile in the summary footer.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryTile {
    pub key: String,
    pub title: String,
    pub icon: &'static str,
    pub participation: f64,
}

/// Election summary footer, always covering every role.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub participants: u64,
    pub eligible: u64,
    pub progress_width: f64,
    pub tiles: Vec<SummaryTile>,
}

#[must_use]
pub fn summary(overview: &Overview) -> Summary {
    let tiles = overview
        .role_stats
        .iter()
        .map(|(key, role)| {
            let label = palette::role_label(key);
            SummaryTile {
                key: key.clone(),
                title: label.title.to_owned(),
                icon: label.icon,
                participation: role.voting_percentage,
            }
        })
        .collect();
    Summary {
        participants: overview.overall.voted_users,
        eligible: overview.overall.total_users,
        progress_width: bar_width(overview.overall.voting_percentage),
        tiles,
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Render a percentage exactly as supplied, without trailing zeros (`40`,
/// `12.5`, `33.333`). Non-finite values render as `0`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    format!("{}", value + 0.0)
}

/// Chart label: the first word of a candidate name.
#[must_use]
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
