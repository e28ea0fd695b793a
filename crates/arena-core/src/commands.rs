//! Mutation requests sent from a front end to the arena store.
//!
//! Each command is applied to completion before the next one is read.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::payload::ImportPayload;
use crate::state::ConfigPatch;
use crate::target::{TargetDraft, TargetPatch};
use crate::types::TargetId;

/// All operator actions that change arena state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaCommand {
    // --- Arena ---
    /// Merge the given fields into the arena configuration.
    SetConfig { patch: ConfigPatch },

    // --- Targets ---
    /// Append a target; a random in-arena position is used when `position` is absent.
    AddTarget {
        #[serde(default)]
        position: Option<DVec2>,
    },
    /// Remove a target. Unknown ids are ignored.
    RemoveTarget { id: TargetId },
    /// Merge fields into one target. Unknown ids are ignored.
    UpdateTarget { id: TargetId, patch: TargetPatch },
    /// Replace every target with fresh copies of the drafts.
    ReplaceAll { targets: Vec<TargetDraft> },
    /// Restore the default target layout.
    Reset,

    // --- Bulk ---
    /// Validate and install an import payload.
    Import { payload: ImportPayload },

    // --- Selection ---
    /// Make a target the active one, or clear the selection.
    SelectTarget { id: Option<TargetId> },
}
