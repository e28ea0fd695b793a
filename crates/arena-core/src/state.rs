//! Arena state snapshot and the derived views computed from it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{CoverageHealth, EnvelopeStatus};
use crate::target::Target;
use crate::types::TargetId;

/// Arena dimensions and coverage radius (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    pub coverage_radius: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            coverage_radius: DEFAULT_COVERAGE_RADIUS,
        }
    }
}

impl ArenaConfig {
    /// Center point of the arena.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Partial arena configuration. `None` leaves the field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub coverage_radius: Option<f64>,
}

impl ConfigPatch {
    /// Merge the set fields into `config`. No range checks.
    pub fn apply_to(&self, config: &mut ArenaConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(coverage_radius) = self.coverage_radius {
            config.coverage_radius = coverage_radius;
        }
    }

    /// Copy of this patch with each set field clamped to the interactive slider range.
    ///
    /// The store never calls this; it is for front ends that want slider semantics.
    pub fn clamped_to_interactive(&self) -> Self {
        let dimension = |v: f64| v.clamp(INTERACTIVE_DIMENSION_MIN, INTERACTIVE_DIMENSION_MAX);
        Self {
            width: self.width.map(dimension),
            height: self.height.map(dimension),
            coverage_radius: self
                .coverage_radius
                .map(|v| v.clamp(INTERACTIVE_RADIUS_MIN, INTERACTIVE_RADIUS_MAX)),
        }
    }
}

/// Complete arena state: configuration plus targets in insertion order.
///
/// Target ids are unique within `targets`. Overlaps and out-of-bounds
/// positions are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaState {
    pub config: ArenaConfig,
    pub targets: Vec<Target>,
}

impl ArenaState {
    pub fn new(config: ArenaConfig, targets: Vec<Target>) -> Self {
        Self { config, targets }
    }

    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Metrics derived from one `ArenaState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub targets: TargetCounts,
    pub assignments: AssignmentSummary,
    pub overlaps: OverlapReport,
    pub coverage: CoverageSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetCounts {
    pub total: usize,
    /// Targets rated `Critical`.
    pub critical: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    pub assigned: usize,
    /// Percentage of targets with a squad, 0..=100.
    pub utilization: f64,
}

/// Pairs of targets closer than the overlap threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapReport {
    pub count: usize,
    pub conflicts: Vec<OverlapConflict>,
}

impl OverlapReport {
    /// One-line description for the overview panel.
    pub fn summary(&self) -> String {
        if self.count == 0 {
            "No conflicts".to_string()
        } else {
            format!("{} targets share envelope", self.count)
        }
    }
}

/// A conflicting pair; `first` precedes `second` in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapConflict {
    pub first: TargetId,
    pub second: TargetId,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub health: CoverageHealth,
    pub message: String,
    /// Mean distance from each target to the arena center (meters).
    pub mean_distance: f64,
}

/// Envelope diagnostic for one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeReport {
    /// Distance from the target to the nearest arena edge.
    pub border_distance: f64,
    /// Gap between the coverage circle and the nearest edge, floored at 0.
    pub envelope_clearance: f64,
    pub status: EnvelopeStatus,
}
