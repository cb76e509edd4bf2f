//! Plain-text renditions of the two dashboard screens.
//!
//! Every function returns a `String` so output can be asserted in tests and
//! written to stdout in one go.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use votestats::derive::{self, RoleView, format_percentage};
use votestats::{Overview, ResultsData, RoleFilter, Screen, ViewState};

pub const BAR_WIDTH: usize = 30;
/// ANSI clear-screen plus cursor home, used between `watch` frames.
pub const CLEAR: &str = "\x1b[2J\x1b[H";

/// Fixed-width bar for a percentage.
#[must_use]
pub fn text_bar(percentage: f64, width: usize) -> String {
    let share = derive::bar_width(percentage) / 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((share * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[must_use]
pub fn login_required() -> String {
    "🔒 Login Required\nPlease log in to view voting statistics.\nSet VOTE_TOKEN or pass --token.\n".to_owned()
}

/// Render any screen state, delegating the ready body to `ready`.
pub fn screen<T>(screen: &Screen<T>, loading: &str, ready: impl FnOnce(&T) -> String) -> String {
    let mut out = match screen.state() {
        ViewState::Loading => format!("{loading}\n"),
        ViewState::Error(message) => format!("❌ {message}\n"),
        ViewState::Ready(data) => ready(data),
    };
    if screen.is_refreshing() {
        out.push_str("Refreshing...\n");
    }
    out
}

#[must_use]
pub fn overview(overview: &Overview, filter: &RoleFilter) -> String {
    let mut out = String::new();
    let overall = &overview.overall;
    let _ = writeln!(out, "🗳️  Live Voting Statistics");
    let _ = writeln!(out, "Registered Voters:   {}", overall.total_users);
    let _ = writeln!(out, "Active Participants: {}", overall.voted_users);
    let _ = writeln!(out, "Participation Rate:  {}%", format_percentage(overall.voting_percentage));

    let roles = derive::select_roles(overview, filter);
    if roles.is_empty() {
        let _ = writeln!(out, "\nNo statistics for role {:?}", filter.key());
    }
    for role in &roles {
        out.push('\n');
        out.push_str(&role_section(role));
    }

    let summary = derive::summary(overview);
    let _ = writeln!(out, "\n📊 Election Summary");
    let _ = writeln!(
        out,
        "{} of {} eligible voters have participated",
        summary.participants, summary.eligible
    );
    let _ = writeln!(out, "{}", text_bar(summary.progress_width, BAR_WIDTH));
    for tile in &summary.tiles {
        let _ = writeln!(out, "  {} {:<16} {}%", tile.icon, tile.title, format_percentage(tile.participation));
    }
    out
}

fn role_section(role: &RoleView) -> String {
    let mut out = String::new();
    let stats = &role.stats;
    let _ = writeln!(out, "{} {}", role.icon, role.title);
    let _ = writeln!(
        out,
        "  Total Voters: {}  Votes Cast: {}  Participation: {}%",
        stats.total_users,
        stats.voted_users,
        format_percentage(stats.voting_percentage)
    );
    for row in &role.rows {
        let _ = writeln!(
            out,
            "  {} {:<20} {} {:>5}% ({} votes)",
            row.emoji,
            row.stat.name,
            text_bar(row.bar_width, BAR_WIDTH),
            format_percentage(row.stat.percentage),
            row.stat.count
        );
    }
    out
}

#[must_use]
pub fn results(data: &ResultsData) -> String {
    let mut out = String::new();
    let stats = &data.stats;
    let _ = writeln!(out, "📊 Voting Statistics");
    let _ = writeln!(out, "Total Voters:       {}", stats.total_users);
    let _ = writeln!(out, "Votes Cast:         {}", stats.voted_users);
    let _ = writeln!(out, "Participation Rate: {}%", format_percentage(stats.voting_percentage));
    let _ = writeln!(out, "\nCandidate Results");
    for row in &data.rows {
        let _ = writeln!(
            out,
            "  {} {:<20} {:<20} {} {:>5}% ({} votes)",
            row.candidate.emoji,
            row.candidate.name,
            row.candidate.party,
            text_bar(row.percentage, BAR_WIDTH),
            format_percentage(row.percentage),
            row.count
        );
    }
    out
}
