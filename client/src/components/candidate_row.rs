//! Candidate result line on the authenticated results screen.

use leptos::prelude::*;
use votestats::CandidateRow;
use votestats::derive::format_percentage;

use crate::components::progress_bar::ProgressBar;

/// One row per candidate, including candidates nobody has voted for yet.
#[component]
pub fn CandidateResultRow(row: CandidateRow) -> impl IntoView {
    let CandidateRow { candidate, count, percentage } = row;
    let background = candidate.swatch.gradient("to right");
    let avatar_style = format!("background: {background};");

    view! {
        <div class="candidate-result">
            <span class="candidate-result__avatar" style=avatar_style>
                {candidate.emoji}
            </span>
            <div class="candidate-result__body">
                <div class="candidate-result__meta">
                    <div>
                        <p class="candidate-result__name">{candidate.name}</p>
                        <p class="candidate-result__party">{candidate.party}</p>
                    </div>
                    <div class="candidate-result__numbers">
                        <p class="candidate-result__count">{format!("{count} votes")}</p>
                        <p class="candidate-result__share">{format!("{}%", format_percentage(percentage))}</p>
                    </div>
                </div>
                <ProgressBar percentage=percentage background=background thick=true />
            </div>
        </div>
    }
}
