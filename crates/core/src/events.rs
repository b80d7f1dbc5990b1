use crate::{BlindKind, HandKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    BlindStarted {
        ante: u8,
        blind: BlindKind,
        target: i64,
    },
    BlindSkipped {
        ante: u8,
        blind: BlindKind,
    },
    HandPlayed {
        hand: HandKind,
        scored: i64,
        total: i64,
    },
    HandDiscarded {
        count: usize,
    },
    BlindCleared {
        score: i64,
        reward: i64,
    },
    BlindFailed {
        score: i64,
    },
    CashedOut {
        reward: i64,
        money: i64,
    },
    ShopEntered {
        jokers: usize,
        vouchers: usize,
        reroll_cost: i64,
    },
    ShopRerolled {
        cost: i64,
        reroll_cost: i64,
    },
    JokerBought {
        id: String,
        cost: i64,
        money: i64,
    },
    VoucherBought {
        id: String,
        cost: i64,
        money: i64,
    },
    RunWon {
        ante: u8,
    },
    RunLost {
        ante: u8,
        score: i64,
        target: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
