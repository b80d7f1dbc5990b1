use talon_core::{
    Action, BlindKind, Card, EndState, Engine, EngineConfig, Event, GameError, Rank, Stage, Suit,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::standard(suit, rank)
}

/// Engine inside a small blind with a known hand of eight cards.
fn engine_in_blind() -> Engine {
    let mut engine = Engine::new(EngineConfig::new());
    engine.handle_action(Action::SelectBlind).unwrap();
    engine.state.available = vec![
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Three),
    ];
    engine.drain_events();
    engine
}

#[test]
fn select_blind_deals_and_arms_the_round() {
    let mut engine = Engine::new(EngineConfig::new());
    engine.handle_action(Action::SelectBlind).unwrap();
    assert_eq!(engine.state.stage, Stage::Blind(BlindKind::Small));
    assert_eq!(engine.state.available.len(), engine.config.hand_size);
    assert_eq!(engine.state.plays, engine.config.plays);
    assert_eq!(engine.state.discards, engine.config.discards);
    assert_eq!(engine.state.required_score, 300);
    assert_eq!(
        engine.drain_events(),
        vec![Event::BlindStarted {
            ante: 1,
            blind: BlindKind::Small,
            target: 300,
        }]
    );
}

#[test]
fn skip_blind_advances_without_a_round() {
    let mut engine = Engine::new(EngineConfig::new());
    engine.handle_action(Action::SkipBlind).unwrap();
    assert_eq!(engine.state.stage, Stage::PreBlind);
    assert_eq!(engine.state.blind, BlindKind::Big);
    assert_eq!(engine.state.round, 0);
}

#[test]
fn pair_scores_base_plus_rank_chips() {
    let mut engine = engine_in_blind();
    engine.handle_action(Action::SelectCard(0)).unwrap();
    engine.handle_action(Action::SelectCard(1)).unwrap();
    engine.handle_action(Action::Play).unwrap();
    // Pair: (10 + 10 + 10) chips * 2.0 mult.
    assert_eq!(engine.state.score, 60);
    assert_eq!(engine.state.plays, engine.config.plays - 1);
    assert!(engine.state.selected.is_empty());
    assert_eq!(engine.state.available.len(), engine.config.hand_size);
}

#[test]
fn flush_scores_every_card() {
    let mut engine = engine_in_blind();
    for index in 2..7 {
        engine.handle_action(Action::SelectCard(index)).unwrap();
    }
    engine.handle_action(Action::Play).unwrap();
    // Flush: (35 + 2 + 4 + 6 + 8 + 10) chips * 4.0 mult.
    assert_eq!(engine.state.score, 260);
}

#[test]
fn joker_effects_apply_in_acquisition_order() {
    let mut engine = engine_in_blind();
    engine.ledger.reserve_joker_slot().unwrap();
    engine.ledger.reserve_joker_slot().unwrap();
    engine.state.joker_ids = vec!["sly_joker".into(), "joker".into()];
    engine.handle_action(Action::SelectCard(0)).unwrap();
    engine.handle_action(Action::SelectCard(1)).unwrap();
    engine.handle_action(Action::Play).unwrap();
    // (30 + 50) chips * (2.0 + 4.0) mult.
    assert_eq!(engine.state.score, 480);
}

#[test]
fn clearing_on_the_last_play_beats_exhaustion() {
    let mut engine = engine_in_blind();
    engine.state.required_score = 60;
    engine.state.plays = 1;
    engine.handle_action(Action::SelectCard(0)).unwrap();
    engine.handle_action(Action::SelectCard(1)).unwrap();
    engine.handle_action(Action::Play).unwrap();
    assert_eq!(engine.state.stage, Stage::PostBlind);
    assert_eq!(engine.state.pending_reward, 3);
    assert_eq!(engine.state.round, 1);
}

#[test]
fn unspent_plays_raise_the_reward() {
    let mut engine = engine_in_blind();
    engine.state.required_score = 60;
    engine.handle_action(Action::SelectCard(0)).unwrap();
    engine.handle_action(Action::SelectCard(1)).unwrap();
    engine.handle_action(Action::Play).unwrap();
    // Small blind reward 3 plus 1 per remaining play.
    assert_eq!(engine.state.pending_reward, 6);
}

#[test]
fn exhausting_plays_short_of_target_loses_the_run() {
    let mut engine = engine_in_blind();
    engine.state.plays = 1;
    engine.handle_action(Action::SelectCard(7)).unwrap();
    engine.handle_action(Action::Play).unwrap();
    assert_eq!(engine.state.stage, Stage::End(EndState::Loss));
    assert!(engine.is_over());
    assert!(!engine.is_win());
    let events = engine.drain_events();
    assert!(events.iter().any(|event| matches!(event, Event::BlindFailed { .. })));
    assert!(events.iter().any(|event| matches!(
        event,
        Event::RunLost { ante: 1, target: 300, .. }
    )));
}

#[test]
fn discard_replaces_cards_without_scoring() {
    let mut engine = engine_in_blind();
    engine.handle_action(Action::SelectCard(0)).unwrap();
    engine.handle_action(Action::SelectCard(1)).unwrap();
    engine.handle_action(Action::Discard).unwrap();
    assert_eq!(engine.state.score, 0);
    assert_eq!(engine.state.discards, engine.config.discards - 1);
    assert_eq!(engine.state.plays, engine.config.plays);
    assert_eq!(engine.state.available.len(), engine.config.hand_size);
}

#[test]
fn cash_out_credits_and_opens_the_shop() {
    let mut engine = engine_in_blind();
    engine.state.required_score = 60;
    engine.handle_action(Action::SelectCard(0)).unwrap();
    engine.handle_action(Action::SelectCard(1)).unwrap();
    engine.handle_action(Action::Play).unwrap();
    let reward = engine.state.pending_reward;
    let before = engine.ledger.money;
    engine.handle_action(Action::CashOut).unwrap();
    assert_eq!(engine.state.stage, Stage::Shop);
    assert_eq!(engine.ledger.money, before + reward);
    assert_eq!(engine.state.pending_reward, 0);
    assert_eq!(engine.state.shop.reroll_cost, engine.config.reroll_cost);
    assert!(!engine.state.shop.jokers.is_empty());
}

#[test]
fn boss_clear_rolls_the_ante_over() {
    let mut engine = Engine::new(EngineConfig::new());
    engine.state.stage = Stage::Shop;
    engine.state.blind = BlindKind::Boss;
    engine.handle_action(Action::NextRound).unwrap();
    assert_eq!(engine.state.ante, 2);
    assert_eq!(engine.state.blind, BlindKind::Small);
    assert_eq!(engine.state.stage, Stage::PreBlind);
}

#[test]
fn clearing_the_final_boss_wins_the_run() {
    let mut engine = Engine::new(EngineConfig::new());
    engine.state.stage = Stage::Shop;
    engine.state.ante = engine.config.ante_end;
    engine.state.blind = BlindKind::Boss;
    engine.handle_action(Action::NextRound).unwrap();
    assert_eq!(engine.state.stage, Stage::End(EndState::Win));
    assert!(engine.is_over());
    assert!(engine.is_win());
    assert_eq!(engine.drain_events(), vec![Event::RunWon { ante: 8 }]);
}

#[test]
fn memorized_index_is_rejected_after_the_state_moves_on() {
    let mut engine = Engine::new(EngineConfig::new());
    let space = engine.gen_action_space();
    let select_blind = 11;
    assert!(space.is_valid(select_blind));
    engine.handle_action_index(select_blind).unwrap();
    // Same slot, new stage: the slot still means SelectBlind but is illegal.
    assert_eq!(
        engine.handle_action_index(select_blind),
        Err(GameError::InvalidAction {
            action: Action::SelectBlind,
            stage: Stage::Blind(BlindKind::Small),
        })
    );
}

#[test]
fn failed_apply_leaves_no_trace() {
    let mut engine = engine_in_blind();
    let state = engine.state.clone();
    let money = engine.ledger.money;
    assert!(engine.handle_action(Action::CashOut).is_err());
    assert!(engine.handle_action(Action::Play).is_err());
    assert!(engine.handle_action_index(999).is_err());
    assert_eq!(engine.state, state);
    assert_eq!(engine.ledger.money, money);
}

#[test]
fn selection_is_capped_and_deduplicated() {
    let mut engine = engine_in_blind();
    for index in 0..5 {
        engine.handle_action(Action::SelectCard(index)).unwrap();
    }
    assert_eq!(
        engine.handle_action(Action::SelectCard(0)),
        Err(GameError::InvalidAction {
            action: Action::SelectCard(0),
            stage: Stage::Blind(BlindKind::Small),
        })
    );
    assert!(engine.handle_action(Action::SelectCard(5)).is_err());
    let space = engine.gen_action_space();
    for index in 0..engine.config.hand_size {
        assert!(!space.is_valid(index));
    }
}

#[test]
fn play_requires_a_selection() {
    let mut engine = engine_in_blind();
    assert!(engine.handle_action(Action::Play).is_err());
    let space = engine.gen_action_space();
    assert!(!space.is_valid(8));
    assert!(!space.is_valid(9));
}
