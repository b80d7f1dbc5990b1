use crate::Action;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceError {
    #[error("action index {index} out of bounds for space of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Fixed slot layout for one engine build. Segment order and widths never
/// change after construction, so a slot index always denotes the same
/// action kind and payload; only the validity mask varies between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceLayout {
    select_cards: usize,
    jokers: usize,
    vouchers: usize,
}

// Fixed control slots between the card segment and the catalog segments.
const CONTROL_ACTIONS: [Action; 6] = [
    Action::Play,
    Action::Discard,
    Action::CashOut,
    Action::SelectBlind,
    Action::SkipBlind,
    Action::NextRound,
];

impl SpaceLayout {
    pub fn new(select_cards: usize, jokers: usize, vouchers: usize) -> Self {
        Self {
            select_cards,
            jokers,
            vouchers,
        }
    }

    pub fn len(&self) -> usize {
        self.select_cards + CONTROL_ACTIONS.len() + 1 + self.jokers + self.vouchers
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Permanent slot-to-action binding.
    pub fn action_at(&self, index: usize) -> Result<Action, SpaceError> {
        let len = self.len();
        if index >= len {
            return Err(SpaceError::IndexOutOfBounds { index, len });
        }
        let mut offset = index;
        if offset < self.select_cards {
            return Ok(Action::SelectCard(offset));
        }
        offset -= self.select_cards;
        if offset < CONTROL_ACTIONS.len() {
            return Ok(CONTROL_ACTIONS[offset]);
        }
        offset -= CONTROL_ACTIONS.len();
        if offset == 0 {
            return Ok(Action::RerollShop);
        }
        offset -= 1;
        if offset < self.jokers {
            return Ok(Action::BuyJoker(offset));
        }
        offset -= self.jokers;
        Ok(Action::BuyVoucher(offset))
    }

    /// Inverse of `action_at`. `None` means the payload falls outside the
    /// layout (card position past the slot cap, unknown catalog index).
    pub fn index_of(&self, action: &Action) -> Option<usize> {
        let control = |position: usize| self.select_cards + position;
        match action {
            Action::SelectCard(card) => (*card < self.select_cards).then_some(*card),
            Action::Play => Some(control(0)),
            Action::Discard => Some(control(1)),
            Action::CashOut => Some(control(2)),
            Action::SelectBlind => Some(control(3)),
            Action::SkipBlind => Some(control(4)),
            Action::NextRound => Some(control(5)),
            Action::RerollShop => Some(control(CONTROL_ACTIONS.len())),
            Action::BuyJoker(joker) => {
                (*joker < self.jokers).then(|| control(CONTROL_ACTIONS.len()) + 1 + joker)
            }
            Action::BuyVoucher(voucher) => (*voucher < self.vouchers)
                .then(|| control(CONTROL_ACTIONS.len()) + 1 + self.jokers + voucher),
        }
    }
}

/// A validity mask over one layout. Slots start masked; the generator
/// unmasks the ones legal in the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpace {
    layout: SpaceLayout,
    mask: Vec<bool>,
}

impl ActionSpace {
    pub fn all_masked(layout: SpaceLayout) -> Self {
        let mask = vec![false; layout.len()];
        Self { layout, mask }
    }

    pub fn layout(&self) -> &SpaceLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    pub fn valid_count(&self) -> usize {
        self.mask.iter().filter(|valid| **valid).count()
    }

    pub fn valid_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, valid)| **valid)
            .map(|(index, _)| index)
    }

    pub fn unmask(&mut self, index: usize) -> Result<(), SpaceError> {
        let len = self.mask.len();
        match self.mask.get_mut(index) {
            Some(slot) => {
                *slot = true;
                Ok(())
            }
            None => Err(SpaceError::IndexOutOfBounds { index, len }),
        }
    }

    pub fn unmask_action(&mut self, action: &Action) {
        if let Some(index) = self.layout.index_of(action) {
            self.mask[index] = true;
        }
    }

    pub fn action_at(&self, index: usize) -> Result<Action, SpaceError> {
        self.layout.action_at(index)
    }
}
