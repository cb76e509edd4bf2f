//! Reactive screen state, one module per route.
//!
//! DESIGN
//! ======
//! Each state type is a plain struct wrapped in a single `RwSignal` by its
//! page. Transition rules live here so they can be unit tested without a
//! reactive runtime.

pub mod overview;
pub mod results;
