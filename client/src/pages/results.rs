//! Credential-gated candidate results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/results`. The stored token is read once after hydration.
//! Without it the page shows a login prompt and issues no request; with it,
//! candidates and vote counts load concurrently and are joined per
//! candidate.

use leptos::prelude::*;
use votestats::derive::format_percentage;
use votestats::loader::load_all;
use votestats::Ticket;

use crate::components::candidate_row::CandidateResultRow;
use crate::components::refresh_button::RefreshButton;
use crate::components::stat_tile::StatTile;
use crate::components::status_screen::{ErrorScreen, LoadingScreen};
use crate::net::api::BrowserSource;
use crate::pages::report_fetch_error;
use crate::state::results::{ResultsPhase, ResultsState};
use crate::util::session;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    LoginRequired,
    Loading,
    Error(String),
    Ready,
}

#[component]
pub fn VotingStatsPage() -> impl IntoView {
    let state = RwSignal::new(ResultsState::default());

    Effect::new(move || {
        let stored = session::read_token();
        if let Some((ticket, token)) = state.try_update(|s| s.check_credential(stored.as_deref())).flatten() {
            spawn_load(state, ticket, token);
        }
    });
    on_cleanup(move || {
        state.try_update_untracked(|s| s.screen.retire());
    });

    let on_refresh = Callback::new(move |()| {
        if let Some((ticket, token)) = state.try_update(ResultsState::begin_refresh).flatten() {
            spawn_load(state, ticket, token);
        }
    });

    let refreshing = Signal::derive(move || state.with(|s| s.screen.is_refreshing()));
    let enabled = Signal::derive(move || state.with(|s| s.screen.can_refresh()));

    let phase = Memo::new(move |_| {
        state.with(|s| match s.phase() {
            ResultsPhase::LoginRequired => Phase::LoginRequired,
            ResultsPhase::Loading => Phase::Loading,
            ResultsPhase::Error(message) => Phase::Error(message.to_owned()),
            ResultsPhase::Ready(_) => Phase::Ready,
        })
    });

    view! {
        <main class="dashboard dashboard--results">
            {move || match phase.get() {
                Phase::LoginRequired => view! { <LoginRequired /> }.into_any(),
                Phase::Loading => view! { <LoadingScreen message="📊 Loading statistics..." /> }.into_any(),
                Phase::Error(message) => {
                    view! { <ErrorScreen message=message on_retry=on_refresh refreshing=refreshing enabled=enabled /> }
                        .into_any()
                }
                Phase::Ready => {
                    view! { <ResultsReady state=state on_refresh=on_refresh refreshing=refreshing enabled=enabled /> }
                        .into_any()
                }
            }}
        </main>
    }
}

#[component]
fn LoginRequired() -> impl IntoView {
    view! {
        <div class="status-screen status-screen--gate">
            <h2 class="status-screen__title">"🔒 Login Required"</h2>
            <p class="status-screen__message">"Please log in to view voting statistics."</p>
            <button class="status-screen__action" on:click=move |_| session::navigate_to_entry()>
                "Go to Login"
            </button>
        </div>
    }
}

#[component]
fn ResultsReady(
    state: RwSignal<ResultsState>,
    on_refresh: Callback<()>,
    refreshing: Signal<bool>,
    enabled: Signal<bool>,
) -> impl IntoView {

    let body = move || {
        state.with(|s| {
            s.screen.data().map(|data| {
                let stats = &data.stats;
                let rows = data.rows.clone();
                view! {
                    <div class="dashboard__tiles">
                        <StatTile label="Total Voters" value=stats.total_users.to_string() icon="👥" />
                        <StatTile label="Votes Cast" value=stats.voted_users.to_string() icon="🗳️" accent="emerald" />
                        <StatTile
                            label="Participation Rate"
                            value=format!("{}%", format_percentage(stats.voting_percentage))
                            icon="📈"
                            accent="purple"
                        />
                    </div>
                    <section class="candidate-results">
                        <h2 class="candidate-results__title">"Candidate Results"</h2>
                        {rows.into_iter().map(|row| view! { <CandidateResultRow row=row /> }).collect_view()}
                    </section>
                }
            })
        })
    };

    view! {
        <header class="dashboard__header">
            <h1 class="dashboard__title">"📊 Voting Statistics"</h1>
            <RefreshButton refreshing=refreshing enabled=enabled on_refresh=on_refresh />
        </header>
        {body}
    }
}

fn spawn_load(state: RwSignal<ResultsState>, ticket: Ticket, token: String) {
    leptos::task::spawn_local(async move {
        let source = BrowserSource::default();
        let load = load_all(&source, &token).await;
        for err in load.errors() {
            report_fetch_error("results", err);
        }
        state.try_update(|s| s.settle(ticket, load));
    });
}
