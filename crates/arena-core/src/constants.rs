//! Planner constants and tuning parameters.

// --- Import schema ranges ---

/// Smallest arena edge accepted by an import payload (meters).
pub const IMPORT_DIMENSION_MIN: f64 = 10.0;

/// Largest arena edge accepted by an import payload (meters).
pub const IMPORT_DIMENSION_MAX: f64 = 200.0;

/// Smallest coverage radius accepted by an import payload (meters).
pub const IMPORT_RADIUS_MIN: f64 = 2.0;

/// Largest coverage radius accepted by an import payload (meters).
pub const IMPORT_RADIUS_MAX: f64 = 80.0;

/// Minimum number of target entries in an import payload.
pub const IMPORT_MIN_TARGETS: usize = 1;

// --- Interactive editing ranges (advisory, never enforced by the store) ---

pub const INTERACTIVE_DIMENSION_MIN: f64 = 40.0;
pub const INTERACTIVE_DIMENSION_MAX: f64 = 140.0;
pub const INTERACTIVE_RADIUS_MIN: f64 = 8.0;
pub const INTERACTIVE_RADIUS_MAX: f64 = 60.0;

// --- Defaults ---

/// Default arena width (meters).
pub const DEFAULT_ARENA_WIDTH: f64 = 100.0;

/// Default arena height (meters).
pub const DEFAULT_ARENA_HEIGHT: f64 = 100.0;

/// Default coverage radius (meters).
pub const DEFAULT_COVERAGE_RADIUS: f64 = 18.0;

/// Inset from each edge used when a new target is placed at random (meters).
pub const SPAWN_EDGE_INSET: f64 = 8.0;

// --- Insight thresholds ---

/// Two targets conflict when closer than this multiple of the coverage radius.
pub const OVERLAP_RADIUS_FACTOR: f64 = 1.3;

/// Minimum assigned fraction for an `Acceptable` coverage rating.
pub const ACCEPTABLE_ASSIGNED_FRACTION: f64 = 0.6;

/// Overlap count must stay below this fraction of the target total for `Acceptable`.
pub const ACCEPTABLE_OVERLAP_FRACTION: f64 = 0.2;

/// Clearance below which an envelope is reported as tight (meters).
pub const TIGHT_CLEARANCE_THRESHOLD: f64 = 6.0;

// --- Coverage health messages ---

pub const OPTIMAL_MESSAGE: &str =
    "All targets tracked with clean envelopes and no assignment conflicts.";
pub const ACCEPTABLE_MESSAGE: &str =
    "Monitor overlapping coverage and resolve unassigned targets soon.";
pub const DEGRADED_MESSAGE: &str =
    "Critical routing issues detected. Redistribute squads and expand coverage.";
