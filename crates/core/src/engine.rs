use crate::{
    Action, ActionSpace, Catalog, Deck, EngineConfig, Event, EventBus, GameState, JokerDef,
    Ledger, LedgerError, RngState, Snapshot, SpaceError, SpaceLayout, Stage, VoucherDef, Warning,
    Warnings,
};
use std::sync::Arc;
use thiserror::Error;

mod apply;
mod flow;
mod generate;
mod shop;

pub(crate) use generate::{action_name, generate_space};

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("{action} is not legal in stage {stage:?}")]
    InvalidAction { action: Action, stage: Stage },
    #[error("action index {index} out of bounds for space of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("not enough money: cost {cost}, have {money}")]
    InsufficientFunds { cost: i64, money: i64 },
    #[error("no free joker slot")]
    NoAvailableSlot,
    #[error("prerequisites not met for {id}")]
    PrerequisiteNotMet { id: String },
    #[error("unknown catalog item {id}")]
    UnknownItem { id: String },
    #[error("snapshots are read-only; apply actions through the engine")]
    SnapshotReadOnly,
}

impl From<SpaceError> for GameError {
    fn from(value: SpaceError) -> Self {
        match value {
            SpaceError::IndexOutOfBounds { index, len } => {
                GameError::IndexOutOfBounds { index, len }
            }
        }
    }
}

impl From<LedgerError> for GameError {
    fn from(value: LedgerError) -> Self {
        match value {
            LedgerError::InsufficientFunds { cost, money } => {
                GameError::InsufficientFunds { cost, money }
            }
            LedgerError::NoJokerSlot => GameError::NoAvailableSlot,
        }
    }
}

/// The mutation-owning handle. Single-threaded; `handle_action` /
/// `handle_action_index` are the only mutation paths and each apply either
/// fully commits or fails before any visible change.
#[derive(Debug)]
pub struct Engine {
    pub config: EngineConfig,
    pub catalog: Arc<Catalog>,
    pub layout: SpaceLayout,
    pub rng: RngState,
    pub deck: Deck,
    pub ledger: Ledger,
    pub state: GameState,
    pub events: EventBus,
    pub warnings: Warnings,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    /// Build from caller key/value options on top of the defaults. Unknown
    /// keys warn through the engine's sink rather than failing.
    pub fn from_options(options: &[(String, String)]) -> Self {
        let mut warnings = Warnings::default();
        let mut config = EngineConfig::new();
        config.apply_options(options, &mut warnings);
        let mut engine = Self::new(config);
        for warning in warnings.drain() {
            engine.warnings.push(warning);
        }
        engine
    }

    pub fn with_catalog(config: EngineConfig, catalog: Catalog) -> Self {
        let layout = SpaceLayout::new(
            config.hand_size,
            catalog.jokers().len(),
            catalog.vouchers().len(),
        );
        let mut rng = RngState::from_seed(config.seed);
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        let ledger = Ledger::new(
            config.money_start,
            config.joker_slots,
            config.consumable_slots,
        );
        let state = GameState::new(config.ante_start);
        Self {
            config,
            catalog: Arc::new(catalog),
            layout,
            rng,
            deck,
            ledger,
            state,
            events: EventBus::default(),
            warnings: Warnings::default(),
        }
    }

    /// Immutable view for read-only callers, including the legacy API.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.state.clone(),
            self.ledger.clone(),
            self.config.clone(),
            Arc::clone(&self.catalog),
            self.layout,
        )
    }

    /// Fresh validity mask over the fixed layout. Pure read; identical state
    /// always yields an identical mask.
    pub fn gen_action_space(&self) -> ActionSpace {
        generate_space(
            &self.config,
            &self.catalog,
            &self.layout,
            &self.state,
            &self.ledger,
        )
    }

    /// Structured actions for every valid slot, in ascending slot order.
    pub fn gen_actions(&self) -> Vec<Action> {
        let space = self.gen_action_space();
        space
            .valid_indices()
            .map(|index| space.action_at(index).expect("valid index"))
            .collect()
    }

    pub fn get_action_name(&self, index: usize) -> Result<String, GameError> {
        action_name(&self.catalog, &self.layout, index)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn is_win(&self) -> bool {
        self.state.is_win()
    }

    pub fn get_joker_info(&self, id: &str) -> Option<&JokerDef> {
        self.catalog.joker(id)
    }

    /// Cost the shop would charge right now, with owned voucher discounts.
    pub fn get_joker_cost(&self, id: &str) -> Result<i64, GameError> {
        let def = self
            .catalog
            .joker(id)
            .ok_or_else(|| GameError::UnknownItem { id: id.to_string() })?;
        Ok(self
            .catalog
            .effective_cost(def.base_cost, &self.state.owned_vouchers))
    }

    /// Ids currently offered in the shop, in offer order.
    pub fn get_available_jokers(&self) -> Vec<String> {
        self.state
            .shop
            .jokers
            .iter()
            .filter_map(|index| self.catalog.jokers().get(*index))
            .map(|def| def.id.clone())
            .collect()
    }

    pub fn get_voucher_info(&self, id: &str) -> Option<&VoucherDef> {
        self.catalog.voucher(id)
    }

    pub fn get_voucher_cost(&self, id: &str) -> Result<i64, GameError> {
        let def = self
            .catalog
            .voucher(id)
            .ok_or_else(|| GameError::UnknownItem { id: id.to_string() })?;
        Ok(self
            .catalog
            .effective_cost(def.base_cost, &self.state.owned_vouchers))
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain().collect()
    }

    pub fn drain_warnings(&mut self) -> Vec<Warning> {
        self.warnings.drain()
    }
}
