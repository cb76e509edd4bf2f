//! Role filter tabs above the overview's role cards.

use leptos::prelude::*;
use votestats::RoleFilter;
use votestats::derive::RoleTab;

/// Selecting a tab only changes the local filter; it never refetches.
#[component]
pub fn RoleTabs(
    tabs: Vec<RoleTab>,
    #[prop(into)] selected: Signal<RoleFilter>,
    on_select: Callback<RoleFilter>,
) -> impl IntoView {
    view! {
        <nav class="role-tabs" aria-label="Filter by role">
            {tabs
                .into_iter()
                .map(|tab| {
                    let filter = tab.filter.clone();
                    let active_filter = tab.filter;
                    view! {
                        <button
                            class="role-tabs__tab"
                            class:role-tabs__tab--active=move || selected.with(|current| *current == active_filter)
                            on:click=move |_| on_select.run(filter.clone())
                        >
                            <span aria-hidden="true">{tab.icon}</span>
                            " "
                            {tab.title}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
