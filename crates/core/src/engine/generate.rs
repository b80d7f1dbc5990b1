use crate::{
    Action, ActionSpace, BlindKind, Catalog, EngineConfig, GameError, GameState, Ledger,
    SpaceLayout, Stage,
};
use std::collections::HashSet;

/// Builds the validity mask for a state. Shared by the engine and the
/// read-only snapshot so old and new read paths cannot diverge. Pure: no
/// RNG, no mutation.
pub(crate) fn generate_space(
    config: &EngineConfig,
    catalog: &Catalog,
    layout: &SpaceLayout,
    state: &GameState,
    ledger: &Ledger,
) -> ActionSpace {
    let mut space = ActionSpace::all_masked(*layout);
    match state.stage {
        Stage::Blind(_) => {
            if state.selected.len() < config.selected_max {
                for index in 0..state.available.len() {
                    if !state.is_selected(index) {
                        space.unmask_action(&Action::SelectCard(index));
                    }
                }
            }
            if !state.selected.is_empty() {
                if state.plays > 0 {
                    space.unmask_action(&Action::Play);
                }
                if state.discards > 0 {
                    space.unmask_action(&Action::Discard);
                }
            }
        }
        Stage::PostBlind => {
            space.unmask_action(&Action::CashOut);
        }
        Stage::PreBlind => {
            space.unmask_action(&Action::SelectBlind);
            if state.blind != BlindKind::Boss {
                space.unmask_action(&Action::SkipBlind);
            }
        }
        Stage::Shop => {
            space.unmask_action(&Action::NextRound);
            if ledger.can_afford(state.shop.reroll_cost) {
                space.unmask_action(&Action::RerollShop);
            }
            let owned_jokers: HashSet<String> = state.joker_ids.iter().cloned().collect();
            for offer in &state.shop.jokers {
                let Some(def) = catalog.jokers().get(*offer) else {
                    continue;
                };
                let cost = catalog.effective_cost(def.base_cost, &state.owned_vouchers);
                if Catalog::prerequisites_satisfied(&def.prerequisites, &owned_jokers)
                    && ledger.can_afford(cost)
                    && ledger.has_joker_slot()
                {
                    space.unmask_action(&Action::BuyJoker(*offer));
                }
            }
            let owned_vouchers: HashSet<String> =
                state.owned_vouchers.iter().cloned().collect();
            for offer in &state.shop.vouchers {
                let Some(def) = catalog.vouchers().get(*offer) else {
                    continue;
                };
                let cost = catalog.effective_cost(def.base_cost, &state.owned_vouchers);
                if Catalog::prerequisites_satisfied(&def.prerequisites, &owned_vouchers)
                    && ledger.can_afford(cost)
                {
                    space.unmask_action(&Action::BuyVoucher(*offer));
                }
            }
        }
        Stage::End(_) => {}
    }
    space
}

/// Stable human-readable slot name. Defined for every in-range slot, valid
/// or not; catalog-backed slots use the item's display name.
pub(crate) fn action_name(
    catalog: &Catalog,
    layout: &SpaceLayout,
    index: usize,
) -> Result<String, GameError> {
    let action = layout.action_at(index)?;
    let name = match action {
        Action::BuyJoker(offer) => {
            let def = catalog.jokers().get(offer).expect("layout covers catalog");
            format!("buy joker: {}", def.name)
        }
        Action::BuyVoucher(offer) => {
            let def = catalog
                .vouchers()
                .get(offer)
                .expect("layout covers catalog");
            format!("buy voucher: {}", def.name)
        }
        other => other.to_string(),
    };
    Ok(name)
}
