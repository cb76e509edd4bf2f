//! Per-role statistics card on the overview.

use leptos::prelude::*;
use votestats::derive::{RoleCandidateRow, RoleView, format_percentage};

use crate::components::progress_bar::ProgressBar;
use crate::components::stat_tile::StatTile;
use crate::components::vote_chart::VoteChart;

/// Role header, role-level tiles, candidate rows in server order, and the
/// distribution chart once anyone has voted for the role.
#[component]
pub fn RoleStatsCard(role: RoleView) -> impl IntoView {
    let RoleView { title, icon, stats, rows, show_chart, .. } = role;
    let chart = show_chart.then(|| rows.clone());

    view! {
        <section class="role-card">
            <header class="role-card__header">
                <span class="role-card__icon" aria-hidden="true">{icon}</span>
                <h3 class="role-card__title">{title}</h3>
            </header>
            <div class="role-card__tiles">
                <StatTile label="Total Voters" value=stats.total_users.to_string() icon="👥" compact=true />
                <StatTile
                    label="Votes Cast"
                    value=stats.voted_users.to_string()
                    icon="🗳️"
                    accent="emerald"
                    compact=true
                />
                <StatTile
                    label="Participation"
                    value=format!("{}%", format_percentage(stats.voting_percentage))
                    icon="📈"
                    accent="purple"
                    compact=true
                />
            </div>
            <div class="role-card__rows">
                {rows.into_iter().map(role_candidate_line).collect_view()}
            </div>
            {chart.map(|rows| view! { <VoteChart rows=rows /> })}
        </section>
    }
}

fn role_candidate_line(row: RoleCandidateRow) -> impl IntoView {
    let background = row.swatch.gradient("to right");
    let avatar_style = format!("background: {background};");
    view! {
        <div class="candidate-line">
            <span class="candidate-line__avatar" style=avatar_style>{row.emoji}</span>
            <div class="candidate-line__body">
                <div class="candidate-line__meta">
                    <span class="candidate-line__name">{row.stat.name.clone()}</span>
                    <span class="candidate-line__count">
                        {format!("{} votes · {}%", row.stat.count, format_percentage(row.stat.percentage))}
                    </span>
                </div>
                <ProgressBar percentage=row.stat.percentage background=background />
            </div>
        </div>
    }
}
