//! Targets placed on the arena.
//!
//! `Target` is the stored entity. `TargetDraft` is the id-less descriptor
//! used by imports and default layouts; `TargetPatch` carries a field-by-field
//! update from the operator.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{TargetAssignment, ThreatLevel};
use crate::types::{Millis, TargetId};

/// A target on the arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Immutable once created.
    pub id: TargetId,
    pub label: String,
    /// Position in meters. Not clamped to the arena.
    pub x: f64,
    pub y: f64,
    pub threat: ThreatLevel,
    pub assignment: TargetAssignment,
    /// Refreshed on every mutation of this target.
    pub last_updated: Millis,
}

impl Target {
    /// Materialize a draft with a fresh identity.
    pub fn from_draft(id: TargetId, draft: TargetDraft, now: Millis) -> Self {
        Self {
            id,
            label: draft.label,
            x: draft.x,
            y: draft.y,
            threat: draft.threat,
            assignment: draft.assignment,
            last_updated: now,
        }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another target (meters).
    pub fn distance_to(&self, other: &Target) -> f64 {
        self.position().distance(other.position())
    }

    /// Strip identity and timestamp back to a draft.
    pub fn to_draft(&self) -> TargetDraft {
        TargetDraft {
            label: self.label.clone(),
            x: self.x,
            y: self.y,
            threat: self.threat,
            assignment: self.assignment,
        }
    }
}

/// Target descriptor without identifier or timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDraft {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub threat: ThreatLevel,
    pub assignment: TargetAssignment,
}

impl TargetDraft {
    pub fn new(
        label: impl Into<String>,
        x: f64,
        y: f64,
        threat: ThreatLevel,
        assignment: TargetAssignment,
    ) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            threat,
            assignment,
        }
    }
}

/// Partial update for a single target. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetPatch {
    pub label: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub threat: Option<ThreatLevel>,
    pub assignment: Option<TargetAssignment>,
}

impl TargetPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn position(position: DVec2) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            ..Default::default()
        }
    }

    pub fn threat(threat: ThreatLevel) -> Self {
        Self {
            threat: Some(threat),
            ..Default::default()
        }
    }

    pub fn assignment(assignment: TargetAssignment) -> Self {
        Self {
            assignment: Some(assignment),
            ..Default::default()
        }
    }

    /// Merge the set fields into `target` and stamp it with `now`.
    pub fn apply_to(&self, target: &mut Target, now: Millis) {
        if let Some(label) = &self.label {
            target.label.clone_from(label);
        }
        if let Some(x) = self.x {
            target.x = x;
        }
        if let Some(y) = self.y {
            target.y = y;
        }
        if let Some(threat) = self.threat {
            target.threat = threat;
        }
        if let Some(assignment) = self.assignment {
            target.assignment = assignment;
        }
        target.last_updated = now;
    }
}
