use crate::{BlindKind, Card, EndState, Stage};
use serde::{Deserialize, Serialize};

/// Current shop offers, stored as catalog indices so mask generation stays a
/// pure function of state plus catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopOffers {
    pub jokers: Vec<usize>,
    pub vouchers: Vec<usize>,
    pub reroll_cost: i64,
}

/// The authoritative game position. Owned by the engine; callers only ever
/// see clones inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub stage: Stage,
    pub ante: u8,
    pub round: u32,
    pub blind: BlindKind,
    pub score: i64,
    pub required_score: i64,
    pub plays: u8,
    pub discards: u8,
    pub available: Vec<Card>,
    pub selected: Vec<usize>,
    pub joker_ids: Vec<String>,
    pub owned_vouchers: Vec<String>,
    #[serde(default)]
    pub pending_reward: i64,
    #[serde(default)]
    pub hands_bonus: u8,
    #[serde(default)]
    pub discards_bonus: u8,
    #[serde(default)]
    pub shop: ShopOffers,
}

impl GameState {
    pub fn new(ante_start: u8) -> Self {
        Self {
            stage: Stage::PreBlind,
            ante: ante_start,
            round: 0,
            blind: BlindKind::Small,
            score: 0,
            required_score: 0,
            plays: 0,
            discards: 0,
            available: Vec::new(),
            selected: Vec::new(),
            joker_ids: Vec::new(),
            owned_vouchers: Vec::new(),
            pending_reward: 0,
            hands_bonus: 0,
            discards_bonus: 0,
            shop: ShopOffers::default(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.stage.is_over()
    }

    pub fn is_win(&self) -> bool {
        self.stage == Stage::End(EndState::Win)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected cards in hand order.
    pub fn selected_cards(&self) -> Vec<Card> {
        self.selected
            .iter()
            .filter_map(|index| self.available.get(*index))
            .copied()
            .collect()
    }
}
