//! Headline number tile.

use leptos::prelude::*;

/// Label, big value, and icon. `accent` picks the tile's color modifier.
#[component]
pub fn StatTile(
    label: &'static str,
    value: String,
    icon: &'static str,
    #[prop(default = "blue")] accent: &'static str,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    view! {
        <div class=format!("stat-tile stat-tile--{accent}") class:stat-tile--compact=compact>
            <div class="stat-tile__text">
                <p class="stat-tile__label">{label}</p>
                <p class="stat-tile__value">{value}</p>
            </div>
            <span class="stat-tile__icon" aria-hidden="true">{icon}</span>
        </div>
    }
}
