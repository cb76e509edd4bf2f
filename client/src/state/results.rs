//! State for the authenticated candidate results screen.
//!
//! DESIGN
//! ======
//! The credential is read once, on the client, after mount. Until then the
//! screen reports `Loading` so the server render and the first hydrated
//! render agree. A missing credential short-circuits to `LoginRequired` and
//! no request is ever issued.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use votestats::loader::{self, DualLoad};
use votestats::{ResultsData, Screen, Ticket, ViewState};

/// Outcome of reading the stored bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Credential {
    #[default]
    Unchecked,
    Missing,
    Present(String),
}

/// What the results page renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResultsPhase<'a> {
    LoginRequired,
    Loading,
    Error(&'a str),
    Ready(&'a ResultsData),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsState {
    pub screen: Screen<ResultsData>,
    credential: Credential,
}

impl ResultsState {
    #[must_use]
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Gating wins over any fetch state.
    #[must_use]
    pub fn phase(&self) -> ResultsPhase<'_> {
        match self.credential {
            Credential::Unchecked => return ResultsPhase::Loading,
            Credential::Missing => return ResultsPhase::LoginRequired,
            Credential::Present(_) => {}
        }
        match self.screen.state() {
            ViewState::Loading => ResultsPhase::Loading,
            ViewState::Error(message) => ResultsPhase::Error(message),
            ViewState::Ready(data) => ResultsPhase::Ready(data),
        }
    }

    /// Record the stored credential and, when usable, start the initial load.
    ///
    /// Only the first call has any effect. Returns the ticket and trimmed
    /// token for the fetch to run.
    pub fn check_credential(&mut self, stored: Option<&str>) -> Option<(Ticket, String)> {
        if self.credential != Credential::Unchecked {
            return None;
        }
        let Ok(token) = loader::gate(stored) else {
            self.credential = Credential::Missing;
            return None;
        };
        let token = token.to_owned();
        self.credential = Credential::Present(token.clone());
        let ticket = self.screen.begin_initial()?;
        Some((ticket, token))
    }

    /// Start a manual refresh with the credential read at mount.
    pub fn begin_refresh(&mut self) -> Option<(Ticket, String)> {
        let Credential::Present(token) = &self.credential else {
            return None;
        };
        let token = token.clone();
        let ticket = self.screen.begin_refresh()?;
        Some((ticket, token))
    }

    /// Fold both fetch outcomes into the screen.
    pub fn settle(&mut self, ticket: Ticket, load: DualLoad) -> bool {
        let outcome = load.into_result().map_err(|err| err.user_message());
        self.screen.settle(ticket, outcome)
    }
}
