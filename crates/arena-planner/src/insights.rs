//! Insight engine: derives coverage metrics from an arena snapshot.
//!
//! Everything here is a pure function of its inputs. Insights are recomputed
//! from scratch on every call; there is no cache to invalidate.

use arena_core::constants::{
    ACCEPTABLE_ASSIGNED_FRACTION, ACCEPTABLE_OVERLAP_FRACTION, OVERLAP_RADIUS_FACTOR,
};
use arena_core::enums::{CoverageHealth, ThreatLevel};
use arena_core::state::{
    ArenaState, AssignmentSummary, CoverageSummary, Insights, OverlapConflict, OverlapReport,
    TargetCounts,
};
use arena_core::target::Target;

/// Compute all insights for a snapshot.
pub fn compute_insights(state: &ArenaState) -> Insights {
    let targets = &state.targets;

    let total = targets.len();
    let critical = targets
        .iter()
        .filter(|t| t.threat == ThreatLevel::Critical)
        .count();
    let assigned = targets.iter().filter(|t| t.assignment.is_assigned()).count();

    let utilization = if total == 0 {
        0.0
    } else {
        assigned as f64 / total as f64 * 100.0
    };

    let overlaps = compute_overlap_conflicts(targets, state.config.coverage_radius);
    let health = classify_health(total, assigned, overlaps.count);

    Insights {
        targets: TargetCounts { total, critical },
        assignments: AssignmentSummary {
            assigned,
            utilization,
        },
        coverage: CoverageSummary {
            health,
            message: health.message().to_string(),
            mean_distance: mean_travel_distance(state),
        },
        overlaps,
    }
}

/// Every unordered pair closer than `coverage_radius * 1.3`.
///
/// Pairs are visited as index combinations `(i, j)` with `i < j`, so each pair
/// appears once and conflicts come out in insertion order. O(n²).
pub fn compute_overlap_conflicts(targets: &[Target], coverage_radius: f64) -> OverlapReport {
    let threshold = coverage_radius * OVERLAP_RADIUS_FACTOR;
    let mut conflicts = Vec::new();

    for (index, a) in targets.iter().enumerate() {
        for b in &targets[index + 1..] {
            let distance = a.distance_to(b);
            if distance < threshold {
                conflicts.push(OverlapConflict {
                    first: a.id,
                    second: b.id,
                    distance,
                });
            }
        }
    }

    OverlapReport {
        count: conflicts.len(),
        conflicts,
    }
}

/// Mean distance from each target to the arena center. 0 for an empty arena.
pub fn mean_travel_distance(state: &ArenaState) -> f64 {
    let center = state.config.center();
    let sum: f64 = state
        .targets
        .iter()
        .map(|t| t.position().distance(center))
        .sum();
    sum / state.targets.len().max(1) as f64
}

/// Three-tier coverage rating, checked in order Optimal, Acceptable, Degraded.
///
/// An empty arena satisfies the first rule (0 == 0, no overlaps) and is Optimal.
pub fn classify_health(total: usize, assigned: usize, overlap_count: usize) -> CoverageHealth {
    if assigned == total && overlap_count == 0 {
        return CoverageHealth::Optimal;
    }

    let total = total as f64;
    if assigned as f64 >= total * ACCEPTABLE_ASSIGNED_FRACTION
        && (overlap_count as f64) < total * ACCEPTABLE_OVERLAP_FRACTION
    {
        CoverageHealth::Acceptable
    } else {
        CoverageHealth::Degraded
    }
}
