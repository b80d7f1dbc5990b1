use crate::{Warning, Warnings};
use serde::{Deserialize, Serialize};

const DEFAULT_PLAYS: u8 = 4;
const DEFAULT_DISCARDS: u8 = 4;
const DEFAULT_HAND_SIZE: usize = 8;
const DEFAULT_SELECTED_MAX: usize = 5;
const DEFAULT_MONEY_START: i64 = 4;
const DEFAULT_JOKER_SLOTS: usize = 5;
const DEFAULT_CONSUMABLE_SLOTS: usize = 2;
const DEFAULT_ANTE_START: u8 = 1;
const DEFAULT_ANTE_END: u8 = 8;
const DEFAULT_REWARD_SMALL: i64 = 3;
const DEFAULT_REWARD_BIG: i64 = 4;
const DEFAULT_REWARD_BOSS: i64 = 5;
const DEFAULT_PER_PLAY_REWARD: i64 = 1;
const DEFAULT_SHOP_JOKER_OFFERS: usize = 2;
const DEFAULT_SHOP_VOUCHER_OFFERS: usize = 1;
const DEFAULT_REROLL_COST: i64 = 5;
const DEFAULT_REROLL_STEP: i64 = 1;
const DEFAULT_SEED: u64 = 0x7A10;

const DEFAULT_ANTE_TARGETS: [i64; 8] = [300, 800, 2000, 5000, 11000, 20000, 35000, 50000];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub seed: u64,
    pub plays: u8,
    pub discards: u8,
    pub hand_size: usize,
    pub selected_max: usize,
    pub money_start: i64,
    pub joker_slots: usize,
    pub consumable_slots: usize,
    pub ante_start: u8,
    pub ante_end: u8,
    pub ante_targets: Vec<i64>,
    pub big_blind_mult: f64,
    pub boss_blind_mult: f64,
    pub reward_small: i64,
    pub reward_big: i64,
    pub reward_boss: i64,
    pub per_play_reward: i64,
    pub shop_joker_offers: usize,
    pub shop_voucher_offers: usize,
    pub reroll_cost: i64,
    pub reroll_step: i64,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            plays: DEFAULT_PLAYS,
            discards: DEFAULT_DISCARDS,
            hand_size: DEFAULT_HAND_SIZE,
            selected_max: DEFAULT_SELECTED_MAX,
            money_start: DEFAULT_MONEY_START,
            joker_slots: DEFAULT_JOKER_SLOTS,
            consumable_slots: DEFAULT_CONSUMABLE_SLOTS,
            ante_start: DEFAULT_ANTE_START,
            ante_end: DEFAULT_ANTE_END,
            ante_targets: DEFAULT_ANTE_TARGETS.to_vec(),
            big_blind_mult: 1.5,
            boss_blind_mult: 2.0,
            reward_small: DEFAULT_REWARD_SMALL,
            reward_big: DEFAULT_REWARD_BIG,
            reward_boss: DEFAULT_REWARD_BOSS,
            per_play_reward: DEFAULT_PER_PLAY_REWARD,
            shop_joker_offers: DEFAULT_SHOP_JOKER_OFFERS,
            shop_voucher_offers: DEFAULT_SHOP_VOUCHER_OFFERS,
            reroll_cost: DEFAULT_REROLL_COST,
            reroll_step: DEFAULT_REROLL_STEP,
        }
    }

    /// Required score for an ante and blind. Antes past the configured table
    /// reuse the last entry.
    pub fn target_for(&self, ante: u8, blind: crate::BlindKind) -> i64 {
        let index = ante.saturating_sub(1) as usize;
        let base = self
            .ante_targets
            .get(index)
            .or_else(|| self.ante_targets.last())
            .copied()
            .unwrap_or(300);
        let mult = match blind {
            crate::BlindKind::Small => 1.0,
            crate::BlindKind::Big => self.big_blind_mult,
            crate::BlindKind::Boss => self.boss_blind_mult,
        };
        (base as f64 * mult).round() as i64
    }

    pub fn reward_for(&self, blind: crate::BlindKind) -> i64 {
        match blind {
            crate::BlindKind::Small => self.reward_small,
            crate::BlindKind::Big => self.reward_big,
            crate::BlindKind::Boss => self.reward_boss,
        }
    }

    /// Applies caller-provided key/value options. Unknown keys and
    /// unparsable values are tolerated with a warning; recognized keys with
    /// good values overwrite the defaults.
    pub fn apply_options(&mut self, options: &[(String, String)], warnings: &mut Warnings) {
        for (key, value) in options {
            let applied = match key.as_str() {
                "seed" => parse_into(value, &mut self.seed),
                "plays" => parse_into(value, &mut self.plays),
                "discards" => parse_into(value, &mut self.discards),
                "hand_size" => parse_into(value, &mut self.hand_size),
                "selected_max" => parse_into(value, &mut self.selected_max),
                "money_start" => parse_into(value, &mut self.money_start),
                "joker_slots" => parse_into(value, &mut self.joker_slots),
                "consumable_slots" => parse_into(value, &mut self.consumable_slots),
                "ante_start" => parse_into(value, &mut self.ante_start),
                "ante_end" => parse_into(value, &mut self.ante_end),
                "reroll_cost" => parse_into(value, &mut self.reroll_cost),
                "reroll_step" => parse_into(value, &mut self.reroll_step),
                _ => {
                    warnings.push(Warning::UnknownConfigOption { key: key.clone() });
                    continue;
                }
            };
            if !applied {
                warnings.push(Warning::InvalidConfigValue {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_into<T: std::str::FromStr>(value: &str, slot: &mut T) -> bool {
    match value.parse() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}
