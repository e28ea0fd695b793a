//! Headless arena planner.
//!
//! Owns the arena state, applies operator mutations, and derives coverage
//! insights and envelope diagnostics from state snapshots. No rendering and
//! no persistence; everything lives in memory.

pub mod clock;
pub mod envelope;
pub mod insights;
pub mod layout;
pub mod source;
pub mod store;

pub use arena_core as core;
pub use envelope::evaluate_envelope;
pub use insights::compute_insights;
pub use store::{ArenaStore, PlannerConfig};
