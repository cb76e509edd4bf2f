//! Public voting statistics overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/`. Needs no credential: one request to the stats endpoint
//! fills the organization totals, role tabs, role cards and the summary
//! footer. Switching tabs is local filtering and never refetches.

use leptos::prelude::*;
use votestats::derive::format_percentage;
use votestats::loader::load_overview;
use votestats::{RoleFilter, Ticket, ViewState};

use crate::components::refresh_button::RefreshButton;
use crate::components::role_card::RoleStatsCard;
use crate::components::role_tabs::RoleTabs;
use crate::components::stat_tile::StatTile;
use crate::components::status_screen::{ErrorScreen, LoadingScreen};
use crate::components::summary_footer::SummaryFooter;
use crate::net::api::BrowserSource;
use crate::pages::report_fetch_error;
use crate::state::overview::OverviewState;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    Error(String),
    Ready,
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let state = RwSignal::new(OverviewState::default());

    Effect::new(move || {
        if let Some(ticket) = state.try_update(|s| s.screen.begin_initial()).flatten() {
            spawn_load(state, ticket);
        }
    });
    on_cleanup(move || {
        state.try_update_untracked(|s| s.screen.retire());
    });

    let on_refresh = Callback::new(move |()| {
        if let Some(ticket) = state.try_update(|s| s.screen.begin_refresh()).flatten() {
            spawn_load(state, ticket);
        }
    });

    let refreshing = Signal::derive(move || state.with(|s| s.screen.is_refreshing()));
    let enabled = Signal::derive(move || state.with(|s| s.screen.can_refresh()));

    let phase = Memo::new(move |_| {
        state.with(|s| match s.screen.state() {
            ViewState::Loading => Phase::Loading,
            ViewState::Error(message) => Phase::Error(message.clone()),
            ViewState::Ready(_) => Phase::Ready,
        })
    });

    view! {
        <main class="dashboard">
            {move || match phase.get() {
                Phase::Loading => view! { <LoadingScreen message="📊 Loading voting statistics..." /> }.into_any(),
                Phase::Error(message) => {
                    view! { <ErrorScreen message=message on_retry=on_refresh refreshing=refreshing enabled=enabled /> }
                        .into_any()
                }
                Phase::Ready => {
                    view! { <OverviewReady state=state on_refresh=on_refresh refreshing=refreshing enabled=enabled /> }
                        .into_any()
                }
            }}
        </main>
    }
}

#[component]
fn OverviewReady(
    state: RwSignal<OverviewState>,
    on_refresh: Callback<()>,
    refreshing: Signal<bool>,
    enabled: Signal<bool>,
) -> impl IntoView {
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));
    let on_select = Callback::new(move |filter: RoleFilter| state.update(|s| s.select_role(filter)));

    let overall = move || {
        state.with(|s| {
            s.screen.data().map(|overview| {
                let overall = &overview.overall;
                view! {
                    <div class="dashboard__tiles">
                        <StatTile label="Registered Voters" value=overall.total_users.to_string() icon="👥" />
                        <StatTile
                            label="Active Participants"
                            value=overall.voted_users.to_string()
                            icon="🗳️"
                            accent="emerald"
                        />
                        <StatTile
                            label="Participation Rate"
                            value=format!("{}%", format_percentage(overall.voting_percentage))
                            icon="📈"
                            accent="purple"
                        />
                    </div>
                }
            })
        })
    };

    view! {
        <header class="dashboard__header">
            <div>
                <h1 class="dashboard__title">"🗳️ Live Voting Statistics"</h1>
                <p class="dashboard__subtitle">"Real-time election participation and results"</p>
            </div>
            <RefreshButton refreshing=refreshing enabled=enabled on_refresh=on_refresh />
        </header>
        {overall}
        {move || view! { <RoleTabs tabs=state.with(OverviewState::tabs) selected=selected on_select=on_select /> }}
        <div class="dashboard__roles">
            {move || {
                state
                    .with(OverviewState::visible_roles)
                    .into_iter()
                    .map(|role| view! { <RoleStatsCard role=role /> })
                    .collect_view()
            }}
        </div>
        {move || state.with(OverviewState::summary).map(|summary| view! { <SummaryFooter summary=summary /> })}
    }
}

fn spawn_load(state: RwSignal<OverviewState>, ticket: Ticket) {
    leptos::task::spawn_local(async move {
        let source = BrowserSource::default();
        let outcome = load_overview(&source).await.map_err(|err| {
            report_fetch_error("overview", &err);
            err.user_message()
        });
        state.try_update(|s| s.screen.settle(ticket, outcome));
    });
}
