//! Horizontal percentage bar.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;
use votestats::derive::bar_width;

/// Inline style for the filled portion of a bar.
pub fn fill_style(percentage: f64, background: &str) -> String {
    format!("width: {}%; background: {background};", bar_width(percentage))
}

#[component]
pub fn ProgressBar(
    percentage: f64,
    #[prop(into, default = "linear-gradient(to right, #3b82f6, #1d4ed8)".to_owned())] background: String,
    #[prop(optional)] thick: bool,
) -> impl IntoView {
    view! {
        <div class="progress" class:progress--thick=thick>
            <div class="progress__fill" style=fill_style(percentage, &background)></div>
        </div>
    }
}
