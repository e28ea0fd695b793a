//! Built-in arena layouts: the default grid the store starts from and the
//! demo import payload.

use arena_core::enums::{TargetAssignment, ThreatLevel};
use arena_core::payload::{ArenaDimensions, ImportPayload};
use arena_core::state::ArenaConfig;
use arena_core::target::TargetDraft;

/// Arena configuration of the default layout: 100 × 100 m, 18 m coverage.
pub fn default_config() -> ArenaConfig {
    ArenaConfig::default()
}

/// The four targets restored by a reset.
pub fn default_drafts() -> Vec<TargetDraft> {
    vec![
        TargetDraft::new(
            "Fuel Depot",
            20.0,
            32.0,
            ThreatLevel::Critical,
            TargetAssignment::Alpha,
        ),
        TargetDraft::new(
            "Radar Array",
            58.0,
            16.0,
            ThreatLevel::High,
            TargetAssignment::Bravo,
        ),
        TargetDraft::new(
            "VIP Escort",
            78.0,
            68.0,
            ThreatLevel::Medium,
            TargetAssignment::Charlie,
        ),
        TargetDraft::new(
            "Orbital Relay",
            42.0,
            82.0,
            ThreatLevel::Low,
            TargetAssignment::Unassigned,
        ),
    ]
}

/// Demo payload: 120 × 120 m arena, 24 m coverage, one target per squad.
pub fn sample_payload() -> ImportPayload {
    ImportPayload {
        arena: ArenaDimensions {
            width: 120.0,
            height: 120.0,
        },
        coverage_radius: 24.0,
        targets: vec![
            TargetDraft::new(
                "Command Relay",
                35.0,
                40.0,
                ThreatLevel::High,
                TargetAssignment::Alpha,
            ),
            TargetDraft::new(
                "Forward Repair",
                82.0,
                55.0,
                ThreatLevel::Medium,
                TargetAssignment::Bravo,
            ),
            TargetDraft::new(
                "VIP Convoy",
                68.0,
                88.0,
                ThreatLevel::Critical,
                TargetAssignment::Charlie,
            ),
            TargetDraft::new(
                "Ammo Cache",
                50.0,
                20.0,
                ThreatLevel::Low,
                TargetAssignment::Delta,
            ),
        ],
    }
}
