//! Arena state store: the single owner of arena state.
//!
//! `ArenaStore` applies operator mutations one at a time and hands out
//! owned snapshots for the insight engine and renderers. Identifiers and
//! random placements come from a seeded RNG, timestamps from an injected
//! clock, so a store driven with the same seed, clock, and commands
//! produces identical snapshots.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use arena_core::commands::ArenaCommand;
use arena_core::constants::SPAWN_EDGE_INSET;
use arena_core::enums::{TargetAssignment, ThreatLevel};
use arena_core::payload::{ImportError, ImportPayload, ValidationError};
use arena_core::state::{ArenaState, ConfigPatch};
use arena_core::target::{Target, TargetDraft, TargetPatch};
use arena_core::types::TargetId;

use crate::clock::{Clock, SystemClock};
use crate::layout;
use crate::source::PayloadSource;

/// Configuration for a new store.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// RNG seed for identifiers and random placement. Same seed = same ids.
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Result of applying an `ArenaCommand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed.
    Applied,
    /// A target was appended with this identifier.
    Added(TargetId),
    /// The command referenced an unknown target and changed nothing.
    Ignored,
}

/// Owns one `ArenaState` plus the operator's current selection.
pub struct ArenaStore {
    state: ArenaState,
    active: Option<TargetId>,
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
}

impl ArenaStore {
    /// Create a store on the system clock, seeded with the default layout.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create a store with an injected clock.
    pub fn with_clock(config: PlannerConfig, clock: Box<dyn Clock>) -> Self {
        let mut store = Self {
            state: ArenaState::new(layout::default_config(), Vec::new()),
            active: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            clock,
        };
        store.state.targets = store.materialize(layout::default_drafts());
        store.reconcile_selection();
        store
    }

    /// Borrow the current state.
    pub fn state(&self) -> &ArenaState {
        &self.state
    }

    /// Owned copy of the current state, independent of later mutations.
    pub fn snapshot(&self) -> ArenaState {
        self.state.clone()
    }

    /// Identifier of the selected target, if any.
    pub fn active_id(&self) -> Option<TargetId> {
        self.active
    }

    pub fn active_target(&self) -> Option<&Target> {
        self.active.and_then(|id| self.state.target(id))
    }

    // --- Arena ---

    /// Merge fields into the arena configuration. Values are taken as given.
    pub fn set_config(&mut self, patch: ConfigPatch) {
        patch.apply_to(&mut self.state.config);
        debug!(config = ?self.state.config, "arena config updated");
    }

    // --- Targets ---

    /// Append a new target and return its identifier.
    ///
    /// Without a position, each axis is drawn uniformly over the arena and
    /// pulled at least `SPAWN_EDGE_INSET` meters in from the edges.
    pub fn add_target(&mut self, position: Option<DVec2>) -> TargetId {
        let position = position.unwrap_or_else(|| self.random_position());
        let id = fresh_id(&mut self.rng, &self.state.targets);
        let label = format!("Target {}", self.state.targets.len() + 1);

        let draft = TargetDraft::new(
            label,
            position.x,
            position.y,
            ThreatLevel::Medium,
            TargetAssignment::Unassigned,
        );
        let target = Target::from_draft(id, draft, self.clock.now_millis());
        debug!(%id, label = %target.label, x = target.x, y = target.y, "target added");

        self.state.targets.push(target);
        self.reconcile_selection();
        id
    }

    /// Remove a target. Returns `false` (and changes nothing) if the id is unknown.
    pub fn remove_target(&mut self, id: TargetId) -> bool {
        let before = self.state.targets.len();
        self.state.targets.retain(|t| t.id != id);
        let removed = self.state.targets.len() != before;

        if removed {
            debug!(%id, "target removed");
            self.reconcile_selection();
        }
        removed
    }

    /// Merge fields into a target and refresh its timestamp.
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn update_target(&mut self, id: TargetId, patch: &TargetPatch) -> bool {
        let now = self.clock.now_millis();
        match self.state.targets.iter_mut().find(|t| t.id == id) {
            Some(target) => {
                patch.apply_to(target, now);
                debug!(%id, ?patch, "target updated");
                true
            }
            None => false,
        }
    }

    /// Discard every target and install the drafts with fresh ids and timestamps.
    pub fn replace_all(&mut self, drafts: Vec<TargetDraft>) {
        self.state.targets = self.materialize(drafts);
        debug!(count = self.state.targets.len(), "targets replaced");
        self.reconcile_selection();
    }

    /// Restore the default targets. Arena configuration is left alone.
    pub fn reset(&mut self) {
        self.replace_all(layout::default_drafts());
    }

    // --- Import ---

    /// Validate a payload, then overwrite config and targets in one step.
    ///
    /// On error the state is exactly as before.
    pub fn import_payload(&mut self, payload: &ImportPayload) -> Result<(), ValidationError> {
        if let Err(err) = payload.validate() {
            warn!(error = %err, "import payload rejected");
            return Err(err);
        }

        let targets = self.materialize(payload.targets.clone());
        self.state = ArenaState::new(payload.arena_config(), targets);
        self.reconcile_selection();

        info!(
            width = self.state.config.width,
            height = self.state.config.height,
            coverage_radius = self.state.config.coverage_radius,
            targets = self.state.targets.len(),
            "payload imported"
        );
        Ok(())
    }

    /// Read, parse, validate, and import a payload from `source`.
    pub fn import_from(&mut self, source: &mut dyn PayloadSource) -> Result<(), ImportError> {
        let name = source.describe();
        let payload = source
            .read_payload()
            .and_then(|text| ImportPayload::parse(&text))
            .inspect_err(|err| warn!(source = %name, error = %err, "import failed"))?;

        self.import_payload(&payload)?;
        Ok(())
    }

    // --- Selection ---

    /// Select a target. Unknown ids and `None` fall back to the first target.
    pub fn select(&mut self, id: Option<TargetId>) {
        self.active = id;
        self.reconcile_selection();
    }

    // --- Commands ---

    /// Apply one mutation request.
    pub fn apply(&mut self, command: ArenaCommand) -> Result<CommandOutcome, ImportError> {
        let outcome = match command {
            ArenaCommand::SetConfig { patch } => {
                self.set_config(patch);
                CommandOutcome::Applied
            }
            ArenaCommand::AddTarget { position } => CommandOutcome::Added(self.add_target(position)),
            ArenaCommand::RemoveTarget { id } => applied_if(self.remove_target(id)),
            ArenaCommand::UpdateTarget { id, patch } => applied_if(self.update_target(id, &patch)),
            ArenaCommand::ReplaceAll { targets } => {
                self.replace_all(targets);
                CommandOutcome::Applied
            }
            ArenaCommand::Reset => {
                self.reset();
                CommandOutcome::Applied
            }
            ArenaCommand::Import { payload } => {
                self.import_payload(&payload)?;
                CommandOutcome::Applied
            }
            ArenaCommand::SelectTarget { id } => {
                self.select(id);
                CommandOutcome::Applied
            }
        };
        Ok(outcome)
    }

    /// Give each draft a fresh id and the current timestamp.
    fn materialize(&mut self, drafts: Vec<TargetDraft>) -> Vec<Target> {
        let now = self.clock.now_millis();
        let mut targets = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = fresh_id(&mut self.rng, &targets);
            targets.push(Target::from_draft(id, draft, now));
        }
        targets
    }

    fn random_position(&mut self) -> DVec2 {
        let config = self.state.config;
        let x = self.rng.gen::<f64>() * config.width;
        let y = self.rng.gen::<f64>() * config.height;
        DVec2::new(
            clamp_axis(x, SPAWN_EDGE_INSET, config.width - SPAWN_EDGE_INSET),
            clamp_axis(y, SPAWN_EDGE_INSET, config.height - SPAWN_EDGE_INSET),
        )
    }

    /// Keep the selection on an existing target, defaulting to the first one.
    fn reconcile_selection(&mut self) {
        let valid = self.active.is_some_and(|id| self.state.contains(id));
        if !valid {
            self.active = self.state.targets.first().map(|t| t.id);
        }
    }
}

/// Draw identifiers until one is unused by `existing`.
fn fresh_id(rng: &mut ChaCha8Rng, existing: &[Target]) -> TargetId {
    loop {
        let id = TargetId::from_random_bytes(rng.gen());
        if !existing.iter().any(|t| t.id == id) {
            return id;
        }
    }
}

fn applied_if(changed: bool) -> CommandOutcome {
    if changed {
        CommandOutcome::Applied
    } else {
        CommandOutcome::Ignored
    }
}

/// Clamp that tolerates `min > max` (arenas narrower than twice the inset);
/// the upper bound wins.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
