use super::{Engine, GameError};
use crate::{evaluate_hand, scoring_indices, Action, Event, JokerEffect, Stage, VoucherEffect};
use std::collections::HashSet;

impl Engine {
    /// Applies the action bound to `index`. The mask is regenerated here, so
    /// an index memorized before a state change is rejected rather than
    /// trusted.
    pub fn handle_action_index(&mut self, index: usize) -> Result<(), GameError> {
        let action = self.layout.action_at(index)?;
        self.dispatch(action)
    }

    /// Applies a structured action. Fails without mutating if the action has
    /// no slot in the layout or is illegal in the current state.
    pub fn handle_action(&mut self, action: Action) -> Result<(), GameError> {
        if self.layout.index_of(&action).is_none() {
            return Err(GameError::InvalidAction {
                action,
                stage: self.state.stage,
            });
        }
        self.dispatch(action)
    }

    /// All-or-nothing: every handler finishes validation before its first
    /// mutation.
    fn dispatch(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::SelectCard(index) => self.apply_select_card(index),
            Action::Play => self.apply_play(),
            Action::Discard => self.apply_discard(),
            Action::CashOut => self.apply_cash_out(),
            Action::SelectBlind => self.apply_select_blind(),
            Action::SkipBlind => self.apply_skip_blind(),
            Action::BuyJoker(offer) => self.apply_buy_joker(offer),
            Action::BuyVoucher(offer) => self.apply_buy_voucher(offer),
            Action::RerollShop => self.apply_reroll_shop(),
            Action::NextRound => self.apply_next_round(),
        }
    }

    fn invalid(&self, action: Action) -> GameError {
        GameError::InvalidAction {
            action,
            stage: self.state.stage,
        }
    }

    fn apply_select_card(&mut self, index: usize) -> Result<(), GameError> {
        if !self.state.stage.is_blind()
            || index >= self.state.available.len()
            || self.state.is_selected(index)
            || self.state.selected.len() >= self.config.selected_max
        {
            return Err(self.invalid(Action::SelectCard(index)));
        }
        self.state.selected.push(index);
        self.state.selected.sort_unstable();
        Ok(())
    }

    fn apply_play(&mut self) -> Result<(), GameError> {
        if !self.state.stage.is_blind()
            || self.state.plays == 0
            || self.state.selected.is_empty()
        {
            return Err(self.invalid(Action::Play));
        }

        let cards = self.state.selected_cards();
        let hand = evaluate_hand(&cards);
        let scoring = scoring_indices(&cards, hand);
        let (base_chips, base_mult) = hand.base();
        let rank_chips: i64 = scoring
            .iter()
            .map(|index| cards[*index].rank.chips())
            .sum();

        let mut chips = base_chips + rank_chips;
        let mut mult = base_mult;
        for id in &self.state.joker_ids {
            match self.catalog.joker(id).map(|def| def.effect) {
                Some(JokerEffect::FlatChips(bonus)) => chips += bonus,
                Some(JokerEffect::FlatMult(bonus)) => mult += bonus,
                Some(JokerEffect::TimesMult(factor)) => mult *= factor,
                Some(JokerEffect::None) | None => {}
            }
        }
        let total = (chips as f64 * mult).round() as i64;

        self.state.score += total;
        self.state.plays -= 1;
        self.events.push(Event::HandPlayed {
            hand,
            scored: total,
            total: self.state.score,
        });
        self.replace_selected();
        self.settle_blind();
        Ok(())
    }

    fn apply_discard(&mut self) -> Result<(), GameError> {
        if !self.state.stage.is_blind()
            || self.state.discards == 0
            || self.state.selected.is_empty()
        {
            return Err(self.invalid(Action::Discard));
        }
        let count = self.state.selected.len();
        self.state.discards -= 1;
        self.replace_selected();
        self.events.push(Event::HandDiscarded { count });
        Ok(())
    }

    fn apply_cash_out(&mut self) -> Result<(), GameError> {
        if self.state.stage != Stage::PostBlind {
            return Err(self.invalid(Action::CashOut));
        }
        let reward = self.state.pending_reward;
        self.ledger.credit(reward);
        self.state.pending_reward = 0;
        self.events.push(Event::CashedOut {
            reward,
            money: self.ledger.money,
        });
        self.enter_shop();
        Ok(())
    }

    fn apply_select_blind(&mut self) -> Result<(), GameError> {
        if self.state.stage != Stage::PreBlind {
            return Err(self.invalid(Action::SelectBlind));
        }
        self.start_blind();
        Ok(())
    }

    fn apply_skip_blind(&mut self) -> Result<(), GameError> {
        if self.state.stage != Stage::PreBlind || self.state.blind == crate::BlindKind::Boss {
            return Err(self.invalid(Action::SkipBlind));
        }
        self.events.push(Event::BlindSkipped {
            ante: self.state.ante,
            blind: self.state.blind,
        });
        self.advance_blind();
        Ok(())
    }

    fn apply_buy_joker(&mut self, offer: usize) -> Result<(), GameError> {
        if self.state.stage != Stage::Shop || !self.state.shop.jokers.contains(&offer) {
            return Err(self.invalid(Action::BuyJoker(offer)));
        }
        let def = self
            .catalog
            .jokers()
            .get(offer)
            .ok_or(GameError::IndexOutOfBounds {
                index: offer,
                len: self.catalog.jokers().len(),
            })?;
        let owned: HashSet<String> = self.state.joker_ids.iter().cloned().collect();
        if !crate::Catalog::prerequisites_satisfied(&def.prerequisites, &owned) {
            return Err(GameError::PrerequisiteNotMet { id: def.id.clone() });
        }
        let cost = self
            .catalog
            .effective_cost(def.base_cost, &self.state.owned_vouchers);
        if !self.ledger.can_afford(cost) {
            return Err(GameError::InsufficientFunds {
                cost,
                money: self.ledger.money,
            });
        }
        if !self.ledger.has_joker_slot() {
            return Err(GameError::NoAvailableSlot);
        }

        let id = def.id.clone();
        self.ledger.debit(cost)?;
        self.ledger.reserve_joker_slot()?;
        self.state.joker_ids.push(id.clone());
        self.state.shop.jokers.retain(|candidate| *candidate != offer);
        self.ledger.check_slot_invariant(self.state.joker_ids.len());
        self.events.push(Event::JokerBought {
            id,
            cost,
            money: self.ledger.money,
        });
        Ok(())
    }

    fn apply_buy_voucher(&mut self, offer: usize) -> Result<(), GameError> {
        if self.state.stage != Stage::Shop || !self.state.shop.vouchers.contains(&offer) {
            return Err(self.invalid(Action::BuyVoucher(offer)));
        }
        let def = self
            .catalog
            .vouchers()
            .get(offer)
            .ok_or(GameError::IndexOutOfBounds {
                index: offer,
                len: self.catalog.vouchers().len(),
            })?;
        let owned: HashSet<String> = self.state.owned_vouchers.iter().cloned().collect();
        if !crate::Catalog::prerequisites_satisfied(&def.prerequisites, &owned) {
            return Err(GameError::PrerequisiteNotMet { id: def.id.clone() });
        }
        let cost = self
            .catalog
            .effective_cost(def.base_cost, &self.state.owned_vouchers);
        if !self.ledger.can_afford(cost) {
            return Err(GameError::InsufficientFunds {
                cost,
                money: self.ledger.money,
            });
        }

        let id = def.id.clone();
        let effect = def.effect;
        self.ledger.debit(cost)?;
        self.state.owned_vouchers.push(id.clone());
        self.state.shop.vouchers.retain(|candidate| *candidate != offer);
        match effect {
            VoucherEffect::AddJokerSlots(count) => self.ledger.add_joker_slots(count as usize),
            VoucherEffect::AddHands(count) => {
                self.state.hands_bonus = self.state.hands_bonus.saturating_add(count);
            }
            VoucherEffect::AddDiscards(count) => {
                self.state.discards_bonus = self.state.discards_bonus.saturating_add(count);
            }
            // Discounts are read back through effective_cost.
            VoucherEffect::ShopDiscountPercent(_) | VoucherEffect::None => {}
        }
        self.events.push(Event::VoucherBought {
            id,
            cost,
            money: self.ledger.money,
        });
        Ok(())
    }

    fn apply_reroll_shop(&mut self) -> Result<(), GameError> {
        if self.state.stage != Stage::Shop {
            return Err(self.invalid(Action::RerollShop));
        }
        let cost = self.state.shop.reroll_cost;
        if !self.ledger.can_afford(cost) {
            return Err(GameError::InsufficientFunds {
                cost,
                money: self.ledger.money,
            });
        }
        self.ledger.debit(cost)?;
        self.roll_offers();
        self.state.shop.reroll_cost = cost + self.config.reroll_step;
        self.events.push(Event::ShopRerolled {
            cost,
            reroll_cost: self.state.shop.reroll_cost,
        });
        Ok(())
    }

    fn apply_next_round(&mut self) -> Result<(), GameError> {
        if self.state.stage != Stage::Shop {
            return Err(self.invalid(Action::NextRound));
        }
        self.state.shop = Default::default();
        self.advance_blind();
        Ok(())
    }
}
