//! Networking for the vote statistics API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts the browser HTTP stack to `votestats::StatsSource`; response
//! interpretation lives in `votestats::endpoint` so the CLI shares it.

pub mod api;
