//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render already-derived values from `votestats::derive`; none
//! of them fetch or hold screen state. Interaction flows back to the page
//! through `Callback`s.

pub mod candidate_row;
pub mod progress_bar;
pub mod refresh_button;
pub mod role_card;
pub mod role_tabs;
pub mod stat_tile;
pub mod status_screen;
pub mod summary_footer;
pub mod vote_chart;
