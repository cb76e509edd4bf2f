//! Fetch lifecycle for a dashboard screen.
//!
//! DESIGN
//! ======
//! A screen is exactly one of Loading / Ready / Error, so "loading and
//! errored at once" cannot be expressed. Refreshing is an orthogonal flag
//! that only exists on top of Ready or Error: the previous content stays
//! visible while the new request is in flight.
//!
//! Each request is issued a [`Ticket`]. Only the ticket of the current
//! request may settle the screen, which gives single-flight refreshes and
//! lets a torn-down view drop late responses without cancelling them.

#[cfg(test)]
#[path = "view_state_test.rs"]
mod view_state_test;

/// What the screen currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState<T> {
    /// Initial fetch has not settled yet. Entered once, at mount.
    #[default]
    Loading,
    Ready(T),
    Error(String),
}

/// Proof that a request was started by [`Screen::begin_initial`] or
/// [`Screen::begin_refresh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Screen<T> {
    state: ViewState<T>,
    refreshing: bool,
    in_flight: Option<u64>,
    issued: u64,
    retired: bool,
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Screen<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            refreshing: false,
            in_flight: None,
            issued: 0,
            retired: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Whether a refresh trigger should be enabled right now.
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        !self.retired && !self.is_loading() && self.in_flight.is_none()
    }

    /// Start the mount-time fetch. Returns `None` if it was already started.
    pub fn begin_initial(&mut self) -> Option<Ticket> {
        if self.retired || !self.is_loading() || self.in_flight.is_some() {
            return None;
        }
        Some(self.issue())
    }

    /// Start a refresh on top of the current Ready/Error content.
    ///
    /// Returns `None` while the initial load or another refresh is still in
    /// flight, so a second trigger never starts a duplicate request.
    pub fn begin_refresh(&mut self) -> Option<Ticket> {
        if !self.can_refresh() {
            return None;
        }
        self.refreshing = true;
        Some(self.issue())
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale or the
    /// screen has been retired.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if self.retired || self.in_flight != Some(ticket.0) {
            return false;
        }
        self.in_flight = None;
        self.refreshing = false;
        self.state = match outcome {
            Ok(data) => ViewState::Ready(data),
            Err(message) => ViewState::Error(message),
        };
        true
    }

    /// The view is gone; any response still in flight is dropped on arrival.
    pub fn retire(&mut self) {
        self.retired = true;
        self.in_flight = None;
        self.refreshing = false;
    }

    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight = Some(self.issued);
        Ticket(self.issued)
    }
}
