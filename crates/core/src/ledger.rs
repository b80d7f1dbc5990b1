use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("not enough money: cost {cost}, have {money}")]
    InsufficientFunds { cost: i64, money: i64 },
    #[error("no free joker slot")]
    NoJokerSlot,
}

/// Money and slot accounting. Slot reservations must be paired with the
/// matching `joker_ids` change in the same apply step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub money: i64,
    pub joker_slots_used: usize,
    pub joker_slots_total: usize,
    pub consumable_slots: usize,
}

impl Ledger {
    pub fn new(money: i64, joker_slots_total: usize, consumable_slots: usize) -> Self {
        Self {
            money: money.max(0),
            joker_slots_used: 0,
            joker_slots_total,
            consumable_slots,
        }
    }

    pub fn can_afford(&self, cost: i64) -> bool {
        cost <= self.money
    }

    pub fn debit(&mut self, cost: i64) -> Result<(), LedgerError> {
        if cost > self.money {
            return Err(LedgerError::InsufficientFunds {
                cost,
                money: self.money,
            });
        }
        self.money -= cost;
        Ok(())
    }

    pub fn credit(&mut self, amount: i64) {
        self.money = self.money.saturating_add(amount.max(0));
    }

    pub fn has_joker_slot(&self) -> bool {
        self.joker_slots_used < self.joker_slots_total
    }

    pub fn reserve_joker_slot(&mut self) -> Result<(), LedgerError> {
        if !self.has_joker_slot() {
            return Err(LedgerError::NoJokerSlot);
        }
        self.joker_slots_used += 1;
        Ok(())
    }

    pub fn release_joker_slot(&mut self) {
        self.joker_slots_used = self.joker_slots_used.saturating_sub(1);
    }

    pub fn add_joker_slots(&mut self, count: usize) {
        self.joker_slots_total = self.joker_slots_total.saturating_add(count);
    }

    /// Slot usage disagreeing with the owned joker list is a core bug, not a
    /// recoverable condition.
    pub fn check_slot_invariant(&self, joker_count: usize) {
        assert_eq!(
            joker_count, self.joker_slots_used,
            "joker list length and reserved slots diverged"
        );
        assert!(
            self.joker_slots_used <= self.joker_slots_total,
            "reserved joker slots exceed capacity"
        );
    }
}
