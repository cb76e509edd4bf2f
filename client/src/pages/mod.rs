//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen state and fetch lifecycle and delegates
//! rendering details to `components`. Initial fetches start from an
//! `Effect`, which only runs after hydration, so the server always renders
//! the loading placeholder.

pub mod overview;
pub mod results;

use votestats::FetchError;

/// Log a failed fetch. Transport causes are diagnostic only; the screen
/// shows `FetchError::user_message` instead.
pub(crate) fn report_fetch_error(screen: &str, err: &FetchError) {
    if err.is_transport() {
        log::error!("{screen}: {err}");
    } else {
        log::warn!("{screen}: {err}");
    }
}
