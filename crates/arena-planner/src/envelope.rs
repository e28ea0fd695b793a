//! Per-target envelope diagnostic.
//!
//! Informational only: a poor envelope never blocks or alters a mutation.

use arena_core::constants::TIGHT_CLEARANCE_THRESHOLD;
use arena_core::enums::EnvelopeStatus;
use arena_core::state::{ArenaState, EnvelopeReport};
use arena_core::target::Target;
use arena_core::types::TargetId;

/// Clearance between a target's coverage circle and the nearest arena edge.
pub fn evaluate_envelope(
    target: &Target,
    coverage_radius: f64,
    arena_width: f64,
    arena_height: f64,
) -> EnvelopeReport {
    let border_distance = target
        .x
        .min(arena_width - target.x)
        .min(target.y)
        .min(arena_height - target.y);

    let envelope_clearance = (border_distance - coverage_radius).max(0.0);

    let status = if coverage_radius >= border_distance {
        EnvelopeStatus::InEnvelope
    } else if envelope_clearance < TIGHT_CLEARANCE_THRESHOLD {
        EnvelopeStatus::TightClearance
    } else {
        EnvelopeStatus::Clear
    };

    EnvelopeReport {
        border_distance,
        envelope_clearance,
        status,
    }
}

/// Envelope report for every target, in insertion order.
pub fn evaluate_all(state: &ArenaState) -> Vec<(TargetId, EnvelopeReport)> {
    let config = &state.config;
    state
        .targets
        .iter()
        .map(|t| {
            (
                t.id,
                evaluate_envelope(t, config.coverage_radius, config.width, config.height),
            )
        })
        .collect()
}
