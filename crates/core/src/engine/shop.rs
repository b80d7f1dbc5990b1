use super::Engine;
use crate::Catalog;
use std::collections::HashSet;

impl Engine {
    /// Fills the shop with catalog indices the player could plausibly buy:
    /// items not yet owned whose prerequisites are already met. Affordability
    /// is not checked here; the action mask handles that against the current
    /// balance.
    pub(super) fn roll_offers(&mut self) {
        let owned_jokers: HashSet<String> = self.state.joker_ids.iter().cloned().collect();
        let owned_vouchers: HashSet<String> = self.state.owned_vouchers.iter().cloned().collect();

        let eligible_jokers: Vec<usize> = self
            .catalog
            .jokers()
            .iter()
            .enumerate()
            .filter(|(_, def)| {
                !owned_jokers.contains(&def.id)
                    && Catalog::prerequisites_satisfied(&def.prerequisites, &owned_jokers)
            })
            .map(|(index, _)| index)
            .collect();
        let eligible_vouchers: Vec<usize> = self
            .catalog
            .vouchers()
            .iter()
            .enumerate()
            .filter(|(_, def)| {
                !owned_vouchers.contains(&def.id)
                    && Catalog::prerequisites_satisfied(&def.prerequisites, &owned_vouchers)
            })
            .map(|(index, _)| index)
            .collect();

        self.state.shop.jokers = self.draw_offers(eligible_jokers, self.config.shop_joker_offers);
        self.state.shop.vouchers =
            self.draw_offers(eligible_vouchers, self.config.shop_voucher_offers);
    }

    fn draw_offers(&mut self, mut eligible: Vec<usize>, count: usize) -> Vec<usize> {
        self.rng.shuffle(&mut eligible);
        eligible.truncate(count);
        // Stable presentation order regardless of the draw.
        eligible.sort_unstable();
        eligible
    }
}
