use talon_core::{
    builtin_catalog, Action, CatalogBuilder, Engine, EngineConfig, Event, GameError, JokerDef,
    JokerEffect, Ledger, LedgerError, Stage,
};

fn engine_in_shop(money: i64) -> Engine {
    let mut engine = Engine::new(EngineConfig::new());
    engine.ledger.money = money;
    engine.state.stage = Stage::Shop;
    engine.state.shop.jokers = vec![0, 2]; // joker ($2), banner ($5)
    engine.state.shop.vouchers = vec![0, 6]; // clearance_sale, blank ($10 each)
    engine.state.shop.reroll_cost = engine.config.reroll_cost;
    engine
}

#[test]
fn debit_refuses_overdraft() {
    let mut ledger = Ledger::new(4, 5, 2);
    assert_eq!(
        ledger.debit(10),
        Err(LedgerError::InsufficientFunds { cost: 10, money: 4 })
    );
    assert_eq!(ledger.money, 4);
    ledger.debit(4).unwrap();
    assert_eq!(ledger.money, 0);
}

#[test]
fn credit_never_leaves_money_negative() {
    let mut ledger = Ledger::new(2, 5, 2);
    ledger.credit(-10);
    assert_eq!(ledger.money, 0);
}

#[test]
fn buying_a_joker_spends_money_and_a_slot() {
    let mut engine = engine_in_shop(10);
    engine.handle_action(Action::BuyJoker(0)).unwrap();
    assert_eq!(engine.ledger.money, 8);
    assert_eq!(engine.ledger.joker_slots_used, 1);
    assert_eq!(engine.state.joker_ids, vec!["joker".to_string()]);
    assert_eq!(engine.state.shop.jokers, vec![2]);
    assert_eq!(
        engine.drain_events(),
        vec![Event::JokerBought {
            id: "joker".into(),
            cost: 2,
            money: 8,
        }]
    );
}

#[test]
fn unaffordable_item_reports_funds_not_legality() {
    let catalog = builtin_catalog()
        .register_joker(JokerDef {
            id: "golden_idol".into(),
            name: "Golden Idol".into(),
            description: "expensive".into(),
            base_cost: 20,
            prerequisites: vec![],
            effect: JokerEffect::None,
        })
        .build()
        .unwrap();
    let index = catalog.joker_index("golden_idol").unwrap();
    let mut engine = Engine::with_catalog(EngineConfig::new(), catalog);
    engine.ledger.money = 15;
    engine.state.stage = Stage::Shop;
    engine.state.shop.jokers = vec![index];

    let space = engine.gen_action_space();
    assert!(!space.is_valid(space.layout().index_of(&Action::BuyJoker(index)).unwrap()));
    assert_eq!(
        engine.handle_action(Action::BuyJoker(index)),
        Err(GameError::InsufficientFunds { cost: 20, money: 15 })
    );
    assert_eq!(engine.ledger.money, 15);
    assert!(engine.state.joker_ids.is_empty());
    assert_eq!(engine.state.shop.jokers, vec![index]);
}

#[test]
fn full_slots_block_the_purchase() {
    let mut config = EngineConfig::new();
    config.joker_slots = 1;
    let mut engine = Engine::new(config);
    engine.ledger.money = 50;
    engine.state.stage = Stage::Shop;
    engine.state.shop.jokers = vec![0, 1];
    engine.handle_action(Action::BuyJoker(0)).unwrap();
    assert_eq!(
        engine.handle_action(Action::BuyJoker(1)),
        Err(GameError::NoAvailableSlot)
    );
    assert_eq!(engine.state.joker_ids.len(), 1);
    let space = engine.gen_action_space();
    assert!(!space.is_valid(space.layout().index_of(&Action::BuyJoker(1)).unwrap()));
}

#[test]
fn voucher_discount_lowers_live_costs() {
    let mut engine = engine_in_shop(30);
    assert_eq!(engine.get_joker_cost("banner").unwrap(), 5);
    engine.handle_action(Action::BuyVoucher(0)).unwrap();
    assert_eq!(engine.ledger.money, 20);
    // Clearance sale: 25% off, integer math.
    assert_eq!(engine.get_joker_cost("banner").unwrap(), 4);
    assert_eq!(engine.get_voucher_cost("liquidation").unwrap(), 8);
}

#[test]
fn best_discount_wins_and_cost_floors_at_zero() {
    let catalog = CatalogBuilder::new()
        .register_joker(JokerDef {
            id: "pebble".into(),
            name: "Pebble".into(),
            description: "cheap".into(),
            base_cost: 1,
            prerequisites: vec![],
            effect: JokerEffect::None,
        })
        .register_voucher(talon_core::VoucherDef {
            id: "giveaway".into(),
            name: "Giveaway".into(),
            description: "everything free".into(),
            base_cost: 10,
            prerequisites: vec![],
            effect: talon_core::VoucherEffect::ShopDiscountPercent(100),
        })
        .build()
        .unwrap();
    let owned = vec!["giveaway".to_string()];
    assert_eq!(catalog.effective_cost(1, &owned), 0);
    assert_eq!(catalog.effective_cost(20, &owned), 0);
    assert_eq!(catalog.effective_cost(20, &[]), 20);
}

#[test]
fn utility_vouchers_change_the_next_round() {
    let mut engine = engine_in_shop(40);
    engine.state.shop.vouchers = vec![2, 4]; // grabber, wasteful
    engine.handle_action(Action::BuyVoucher(2)).unwrap();
    engine.handle_action(Action::BuyVoucher(4)).unwrap();
    engine.handle_action(Action::NextRound).unwrap();
    engine.handle_action(Action::SelectBlind).unwrap();
    assert_eq!(engine.state.plays, engine.config.plays + 1);
    assert_eq!(engine.state.discards, engine.config.discards + 1);
}

#[test]
fn slot_voucher_widens_the_ledger() {
    let mut engine = engine_in_shop(40);
    engine.state.shop.vouchers = vec![6, 7]; // blank, then antimatter
    let before = engine.ledger.joker_slots_total;
    engine.handle_action(Action::BuyVoucher(6)).unwrap();
    engine.handle_action(Action::BuyVoucher(7)).unwrap();
    assert_eq!(engine.ledger.joker_slots_total, before + 1);
}

#[test]
fn reroll_costs_money_and_gets_dearer() {
    let mut engine = engine_in_shop(10);
    engine.handle_action(Action::RerollShop).unwrap();
    assert_eq!(engine.ledger.money, 5);
    assert_eq!(engine.state.shop.reroll_cost, 6);
    assert_eq!(
        engine.handle_action(Action::RerollShop),
        Err(GameError::InsufficientFunds { cost: 6, money: 5 })
    );
    let space = engine.gen_action_space();
    assert!(!space.is_valid(space.layout().index_of(&Action::RerollShop).unwrap()));
}

#[test]
fn owned_jokers_are_not_offered_again() {
    let mut engine = engine_in_shop(100);
    engine.handle_action(Action::BuyJoker(0)).unwrap();
    engine.handle_action(Action::RerollShop).unwrap();
    assert!(!engine.state.shop.jokers.contains(&0));
}
