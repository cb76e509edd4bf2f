//! Election summary footer.

use leptos::prelude::*;
use votestats::derive::{Summary, format_percentage};

use crate::components::progress_bar::ProgressBar;

#[component]
pub fn SummaryFooter(summary: Summary) -> impl IntoView {
    let Summary { participants, eligible, progress_width, tiles } = summary;

    view! {
        <footer class="summary-footer">
            <h3 class="summary-footer__title">"📊 Election Summary"</h3>
            <p class="summary-footer__totals">
                {format!("{participants} of {eligible} eligible voters have participated")}
            </p>
            <ProgressBar
                percentage=progress_width
                background="linear-gradient(to right, #10b981, #3b82f6)"
                thick=true
            />
            <div class="summary-footer__tiles">
                {tiles
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <div class="summary-tile">
                                <span class="summary-tile__icon" aria-hidden="true">{tile.icon}</span>
                                <span class="summary-tile__title">{tile.title}</span>
                                <span class="summary-tile__value">
                                    {format!("{}%", format_percentage(tile.participation))}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
