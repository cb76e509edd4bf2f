//! Full-page loading and error placeholders.

#[cfg(test)]
#[path = "status_screen_test.rs"]
mod status_screen_test;

use leptos::prelude::*;

use crate::components::refresh_button::refresh_label;

/// Retry button text: the refresh-in-flight label while a retry runs.
pub fn retry_action_label(retry_label: &'static str, refreshing: bool) -> &'static str {
    if refreshing { refresh_label(true) } else { retry_label }
}

#[component]
pub fn LoadingScreen(message: &'static str) -> impl IntoView {
    view! {
        <div class="status-screen status-screen--loading">
            <div class="status-screen__spinner" aria-hidden="true"></div>
            <p class="status-screen__message">{message}</p>
        </div>
    }
}

/// Error message with a retry action. The view stays interactive; the
/// retry button is disabled while the retry is in flight.
#[component]
pub fn ErrorScreen(
    message: String,
    on_retry: Callback<()>,
    #[prop(into)] refreshing: Signal<bool>,
    #[prop(into)] enabled: Signal<bool>,
    #[prop(default = "Try Again")] retry_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="status-screen status-screen--error" role="alert">
            <p class="status-screen__message">{format!("❌ {message}")}</p>
            <button
                class="status-screen__action"
                class:status-screen__action--busy=move || refreshing.get()
                disabled=move || !enabled.get()
                on:click=move |_| on_retry.run(())
            >
                {move || retry_action_label(retry_label, refreshing.get())}
            </button>
        </div>
    }
}
