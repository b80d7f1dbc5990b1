use serde::{Deserialize, Serialize};
use std::fmt;

/// One player intent. Card payloads are hand positions, buy payloads are
/// catalog indices, so every variant maps onto a fixed action-space slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    SelectCard(usize),
    Play,
    Discard,
    CashOut,
    SelectBlind,
    SkipBlind,
    BuyJoker(usize),
    BuyVoucher(usize),
    RerollShop,
    NextRound,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::SelectCard(index) => write!(f, "select card {index}"),
            Action::Play => write!(f, "play selected cards"),
            Action::Discard => write!(f, "discard selected cards"),
            Action::CashOut => write!(f, "cash out"),
            Action::SelectBlind => write!(f, "select next blind"),
            Action::SkipBlind => write!(f, "skip blind"),
            Action::BuyJoker(index) => write!(f, "buy joker {index}"),
            Action::BuyVoucher(index) => write!(f, "buy voucher {index}"),
            Action::RerollShop => write!(f, "reroll shop"),
            Action::NextRound => write!(f, "next round"),
        }
    }
}
