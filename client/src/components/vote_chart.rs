//! Column chart of a role's vote distribution.

use leptos::prelude::*;
use votestats::derive::{RoleCandidateRow, format_percentage};

#[component]
pub fn VoteChart(rows: Vec<RoleCandidateRow>) -> impl IntoView {
    view! {
        <div class="vote-chart">
            <h4 class="vote-chart__title">"Vote Distribution"</h4>
            <div class="vote-chart__columns">
                {rows
                    .into_iter()
                    .map(|row| {
                        let style = format!(
                            "height: {}px; background: {};",
                            row.chart_height,
                            row.swatch.gradient("to top"),
                        );
                        view! {
                            <div class="vote-chart__column">
                                <div class="vote-chart__bar" style=style>
                                    <span class="vote-chart__value">
                                        {format!("{}%", format_percentage(row.stat.percentage))}
                                    </span>
                                </div>
                                <span class="vote-chart__label">{row.chart_label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
