use crate::engine::{action_name, generate_space};
use crate::{
    Action, ActionSpace, Catalog, EngineConfig, GameError, GameState, JokerDef, Ledger,
    SpaceLayout, Stage, Warning, Warnings,
};
use std::sync::Arc;

/// Read-only view of an engine at one point in time. Carries the legacy
/// per-state API as deprecated pass-throughs: reads succeed and warn,
/// mutating calls always fail. Mutation rights stay with [`crate::Engine`];
/// nothing here can reach it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    state: GameState,
    ledger: Ledger,
    config: EngineConfig,
    catalog: Arc<Catalog>,
    layout: SpaceLayout,
    warnings: Warnings,
}

impl Snapshot {
    pub(crate) fn new(
        state: GameState,
        ledger: Ledger,
        config: EngineConfig,
        catalog: Arc<Catalog>,
        layout: SpaceLayout,
    ) -> Self {
        Self {
            state,
            ledger,
            config,
            catalog,
            layout,
            warnings: Warnings::default(),
        }
    }

    // Current read surface. No warnings; these are the replacements the
    // deprecated calls point at.

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn money(&self) -> i64 {
        self.ledger.money
    }

    pub fn joker_ids(&self) -> &[String] {
        &self.state.joker_ids
    }

    pub fn joker_slots_used(&self) -> usize {
        self.ledger.joker_slots_used
    }

    pub fn joker_slots_total(&self) -> usize {
        self.ledger.joker_slots_total
    }

    // Legacy read surface. Same answers as the engine would give for this
    // state, computed through the same shared generator, plus a deprecation
    // warning naming the replacement.

    pub fn gen_action_space(&mut self) -> ActionSpace {
        self.warnings
            .deprecated("Snapshot::gen_action_space", "Engine::gen_action_space");
        generate_space(
            &self.config,
            &self.catalog,
            &self.layout,
            &self.state,
            &self.ledger,
        )
    }

    pub fn gen_actions(&mut self) -> Vec<Action> {
        self.warnings
            .deprecated("Snapshot::gen_actions", "Engine::gen_actions");
        let space = generate_space(
            &self.config,
            &self.catalog,
            &self.layout,
            &self.state,
            &self.ledger,
        );
        space
            .valid_indices()
            .filter_map(|index| space.action_at(index).ok())
            .collect()
    }

    pub fn get_action_name(&mut self, index: usize) -> Result<String, GameError> {
        self.warnings
            .deprecated("Snapshot::get_action_name", "Engine::get_action_name");
        action_name(&self.catalog, &self.layout, index)
    }

    pub fn is_over(&mut self) -> bool {
        self.warnings
            .deprecated("Snapshot::is_over", "Engine::is_over");
        self.state.is_over()
    }

    pub fn is_win(&mut self) -> bool {
        self.warnings.deprecated("Snapshot::is_win", "Engine::is_win");
        self.state.is_win()
    }

    /// Legacy aggregate: full definitions for every owned joker, in
    /// acquisition order. Always the same length as [`Snapshot::joker_ids`].
    pub fn jokers(&mut self) -> Vec<JokerDef> {
        self.warnings
            .deprecated("Snapshot::jokers", "Snapshot::joker_ids");
        self.state
            .joker_ids
            .iter()
            .filter_map(|id| self.catalog.joker(id))
            .cloned()
            .collect()
    }

    // Legacy write surface. A snapshot owns no mutable game, so these fail
    // unconditionally; the warning still fires so migrating callers see both
    // signals.

    pub fn handle_action(&mut self, _action: Action) -> Result<(), GameError> {
        self.warnings
            .deprecated("Snapshot::handle_action", "Engine::handle_action");
        Err(GameError::SnapshotReadOnly)
    }

    pub fn handle_action_index(&mut self, _index: usize) -> Result<(), GameError> {
        self.warnings.deprecated(
            "Snapshot::handle_action_index",
            "Engine::handle_action_index",
        );
        Err(GameError::SnapshotReadOnly)
    }

    pub fn drain_warnings(&mut self) -> Vec<Warning> {
        self.warnings.drain()
    }
}
