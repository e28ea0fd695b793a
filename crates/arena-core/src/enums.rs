//! Enumeration types used throughout the planner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ACCEPTABLE_MESSAGE, DEGRADED_MESSAGE, OPTIMAL_MESSAGE};

/// Threat rating of a target, ordered by severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ThreatLevel {
    Low,
    /// Rating given to newly added targets.
    #[default]
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 4] = [
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
        ThreatLevel::Critical,
    ];
}

/// Squad responsible for a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetAssignment {
    Alpha,
    Bravo,
    Charlie,
    Delta,
    /// No squad is responsible.
    #[default]
    Unassigned,
}

impl TargetAssignment {
    pub const ALL: [TargetAssignment; 5] = [
        TargetAssignment::Alpha,
        TargetAssignment::Bravo,
        TargetAssignment::Charlie,
        TargetAssignment::Delta,
        TargetAssignment::Unassigned,
    ];

    /// Whether a squad owns the target.
    pub fn is_assigned(self) -> bool {
        self != TargetAssignment::Unassigned
    }
}

/// Overall coverage rating derived from assignments and overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageHealth {
    Optimal,
    Acceptable,
    Degraded,
}

impl CoverageHealth {
    /// Operator-facing message for this rating.
    pub fn message(self) -> &'static str {
        match self {
            CoverageHealth::Optimal => OPTIMAL_MESSAGE,
            CoverageHealth::Acceptable => ACCEPTABLE_MESSAGE,
            CoverageHealth::Degraded => DEGRADED_MESSAGE,
        }
    }
}

/// Envelope diagnostic for a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    /// The coverage circle reaches or crosses the nearest arena edge.
    #[serde(rename = "In Envelope")]
    InEnvelope,
    /// Less than the tight-clearance threshold between circle and edge.
    #[serde(rename = "Tight Clearance")]
    TightClearance,
    Clear,
}

impl EnvelopeStatus {
    pub fn label(self) -> &'static str {
        match self {
            EnvelopeStatus::InEnvelope => "In Envelope",
            EnvelopeStatus::TightClearance => "Tight Clearance",
            EnvelopeStatus::Clear => "Clear",
        }
    }
}

impl fmt::Display for EnvelopeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
