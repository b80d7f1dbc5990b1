use super::Engine;
use crate::{BlindKind, EndState, Event, Stage};

impl Engine {
    /// Deals a fresh hand and enters the currently selected blind.
    pub(super) fn start_blind(&mut self) {
        let blind = self.state.blind;
        let target = self.config.target_for(self.state.ante, blind);
        self.state.required_score = target;
        self.state.score = 0;
        self.state.plays = self.config.plays.saturating_add(self.state.hands_bonus);
        self.state.discards = self.config.discards.saturating_add(self.state.discards_bonus);
        self.state.selected.clear();
        let stale = std::mem::take(&mut self.state.available);
        self.deck.discard(stale);
        self.state.available = self.deck.draw_cards(self.config.hand_size, &mut self.rng);
        self.state.stage = Stage::Blind(blind);
        self.events.push(Event::BlindStarted {
            ante: self.state.ante,
            blind,
            target,
        });
    }

    /// Moves to the next blind of the ante, or the next ante after the boss.
    /// Finishing the final ante wins the run.
    pub(super) fn advance_blind(&mut self) {
        match self.state.blind.next() {
            Some(next) => {
                self.state.blind = next;
                self.state.stage = Stage::PreBlind;
            }
            None => {
                if self.state.ante >= self.config.ante_end {
                    self.state.stage = Stage::End(EndState::Win);
                    self.events.push(Event::RunWon {
                        ante: self.state.ante,
                    });
                } else {
                    self.state.ante += 1;
                    self.state.blind = BlindKind::Small;
                    self.state.stage = Stage::PreBlind;
                }
            }
        }
    }

    /// Resolves the blind after a play. Reaching the target wins the blind
    /// even on the last play; running out of plays short of it ends the run.
    pub(super) fn settle_blind(&mut self) {
        if self.state.score >= self.state.required_score {
            let reward = self.config.reward_for(self.state.blind)
                + self.config.per_play_reward * self.state.plays as i64;
            self.state.pending_reward = reward;
            self.state.round += 1;
            self.state.stage = Stage::PostBlind;
            self.events.push(Event::BlindCleared {
                score: self.state.score,
                reward,
            });
        } else if self.state.plays == 0 {
            self.events.push(Event::BlindFailed {
                score: self.state.score,
            });
            self.events.push(Event::RunLost {
                ante: self.state.ante,
                score: self.state.score,
                target: self.state.required_score,
            });
            self.state.stage = Stage::End(EndState::Loss);
        }
    }

    /// Removes the selected cards to the discard pile and refills the hand.
    pub(super) fn replace_selected(&mut self) {
        let mut removed = Vec::with_capacity(self.state.selected.len());
        for index in self.state.selected.iter().rev() {
            removed.push(self.state.available.remove(*index));
        }
        self.deck.discard(removed);
        self.state.selected.clear();
        let missing = self
            .config
            .hand_size
            .saturating_sub(self.state.available.len());
        let drawn = self.deck.draw_cards(missing, &mut self.rng);
        self.state.available.extend(drawn);
    }

    pub(super) fn enter_shop(&mut self) {
        self.state.shop.reroll_cost = self.config.reroll_cost;
        self.roll_offers();
        self.state.stage = Stage::Shop;
        self.events.push(Event::ShopEntered {
            jokers: self.state.shop.jokers.len(),
            vouchers: self.state.shop.vouchers.len(),
            reroll_cost: self.state.shop.reroll_cost,
        });
    }
}
