//! State for the public participation overview.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use votestats::derive::{self, RoleTab, RoleView, Summary};
use votestats::{Overview, RoleFilter, Screen};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverviewState {
    pub screen: Screen<Overview>,
    pub selected: RoleFilter,
}

impl OverviewState {
    pub fn select_role(&mut self, filter: RoleFilter) {
        self.selected = filter;
    }

    /// Role cards for the active tab. Empty until the first load succeeds.
    #[must_use]
    pub fn visible_roles(&self) -> Vec<RoleView> {
        self.screen
            .data()
            .map(|overview| derive::select_roles(overview, &self.selected))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tabs(&self) -> Vec<RoleTab> {
        self.screen.data().map(derive::role_tabs).unwrap_or_default()
    }

    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        self.screen.data().map(derive::summary)
    }
}
