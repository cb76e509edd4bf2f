//! Browser session helpers for the credential gate.
//!
//! The login flow lives elsewhere and leaves a bearer token in
//! `localStorage`; this module only reads it. SSR paths return nothing and
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// `localStorage` key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";

/// Application entry point the login-required screen sends users to.
pub const ENTRY_PATH: &str = "/";

/// Read the stored credential, if any. Blank values count as absent.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(TOKEN_KEY).ok().flatten()?;
        normalize_token(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Trim a stored credential and drop it when nothing remains.
pub fn normalize_token(raw: &str) -> Option<String> {
    votestats::loader::gate(Some(raw)).ok().map(str::to_owned)
}

/// Replace the current history entry with the application entry point.
pub fn navigate_to_entry() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window()
            && let Err(err) = window.location().replace(ENTRY_PATH)
        {
            log::warn!("navigate to {ENTRY_PATH} failed: {err:?}");
        }
    }
}
