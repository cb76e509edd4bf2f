//! Refresh trigger shared by both dashboards.
//!
//! The button never blocks the screen: it only disables itself while a
//! refresh is in flight so repeated clicks cannot stack requests.

#[cfg(test)]
#[path = "refresh_button_test.rs"]
mod refresh_button_test;

use leptos::prelude::*;

pub fn refresh_label(refreshing: bool) -> &'static str {
    if refreshing { "Refreshing..." } else { "🔄 Refresh Stats" }
}

#[component]
pub fn RefreshButton(
    #[prop(into)] refreshing: Signal<bool>,
    #[prop(into)] enabled: Signal<bool>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="refresh-button"
            class:refresh-button--busy=move || refreshing.get()
            disabled=move || !enabled.get()
            on:click=move |_| on_refresh.run(())
        >
            {move || refresh_label(refreshing.get())}
        </button>
    }
}
