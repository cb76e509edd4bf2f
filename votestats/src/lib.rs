//! Data model, endpoint contracts, and derivation helpers for the live voting
//! statistics dashboard.
//!
//! This crate is UI-framework agnostic so both the Leptos `client` and the
//! terminal `cli` render from the same derived values. Network access is
//! abstracted behind [`loader::StatsSource`]; everything else is pure.

pub mod derive;
pub mod endpoint;
pub mod error;
pub mod loader;
pub mod model;
pub mod palette;
pub mod view_state;

pub use derive::{CandidateRow, RoleFilter, StyledCandidate};
pub use error::{FetchError, GateError};
pub use loader::{DualLoad, ResultsData, StatsSource};
pub use model::{Candidate, CandidateStat, OverallStats, Overview, RoleStats, VotingStats};
pub use view_state::{Screen, Ticket, ViewState};
