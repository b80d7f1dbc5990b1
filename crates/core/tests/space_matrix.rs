use talon_core::{
    Action, BlindKind, Engine, EngineConfig, GameError, SpaceError, SpaceLayout, Stage,
};

// Builtin catalog: 6 jokers, 8 vouchers. With hand_size 8 the slots are
// [0..8) select card, [8..14) controls, 14 reroll, [15..21) buy joker,
// [21..29) buy voucher.
const BUILTIN_LEN: usize = 29;

fn layout() -> SpaceLayout {
    SpaceLayout::new(8, 6, 8)
}

macro_rules! slot_case {
    ($name:ident, $index:expr, $action:expr) => {
        #[test]
        fn $name() {
            let layout = layout();
            assert_eq!(layout.action_at($index).unwrap(), $action);
            assert_eq!(layout.index_of(&$action), Some($index));
        }
    };
}

slot_case!(slot_first_card, 0, Action::SelectCard(0));
slot_case!(slot_last_card, 7, Action::SelectCard(7));
slot_case!(slot_play, 8, Action::Play);
slot_case!(slot_discard, 9, Action::Discard);
slot_case!(slot_cash_out, 10, Action::CashOut);
slot_case!(slot_select_blind, 11, Action::SelectBlind);
slot_case!(slot_skip_blind, 12, Action::SkipBlind);
slot_case!(slot_next_round, 13, Action::NextRound);
slot_case!(slot_reroll, 14, Action::RerollShop);
slot_case!(slot_first_joker, 15, Action::BuyJoker(0));
slot_case!(slot_last_joker, 20, Action::BuyJoker(5));
slot_case!(slot_first_voucher, 21, Action::BuyVoucher(0));
slot_case!(slot_last_voucher, 28, Action::BuyVoucher(7));

#[test]
fn layout_len_matches_segments() {
    assert_eq!(layout().len(), BUILTIN_LEN);
    assert_eq!(Engine::new(EngineConfig::new()).layout.len(), BUILTIN_LEN);
}

#[test]
fn out_of_range_index_is_an_error() {
    let layout = layout();
    assert_eq!(
        layout.action_at(BUILTIN_LEN),
        Err(SpaceError::IndexOutOfBounds {
            index: BUILTIN_LEN,
            len: BUILTIN_LEN,
        })
    );
}

#[test]
fn payload_outside_layout_has_no_slot() {
    let layout = layout();
    assert_eq!(layout.index_of(&Action::SelectCard(8)), None);
    assert_eq!(layout.index_of(&Action::BuyJoker(6)), None);
    assert_eq!(layout.index_of(&Action::BuyVoucher(8)), None);
}

#[test]
fn every_slot_round_trips_through_index_of() {
    let layout = layout();
    for index in 0..layout.len() {
        let action = layout.action_at(index).unwrap();
        assert_eq!(layout.index_of(&action), Some(index));
    }
}

#[test]
fn mask_length_never_varies_across_stages() {
    let mut engine = Engine::new(EngineConfig::new());
    assert_eq!(engine.gen_action_space().len(), BUILTIN_LEN);
    engine.handle_action(Action::SelectBlind).unwrap();
    assert_eq!(engine.gen_action_space().len(), BUILTIN_LEN);
    engine.state.stage = Stage::End(talon_core::EndState::Loss);
    let space = engine.gen_action_space();
    assert_eq!(space.len(), BUILTIN_LEN);
    assert_eq!(space.valid_count(), 0);
}

#[test]
fn initial_mask_offers_exactly_the_blind_choices() {
    let engine = Engine::new(EngineConfig::new());
    let space = engine.gen_action_space();
    let valid: Vec<usize> = space.valid_indices().collect();
    assert_eq!(valid, vec![11, 12]);
    assert_eq!(engine.gen_actions(), vec![Action::SelectBlind, Action::SkipBlind]);
}

#[test]
fn boss_blind_cannot_be_skipped() {
    let mut engine = Engine::new(EngineConfig::new());
    engine.state.blind = BlindKind::Boss;
    let space = engine.gen_action_space();
    assert!(space.is_valid(11));
    assert!(!space.is_valid(12));
    assert_eq!(
        engine.handle_action(Action::SkipBlind),
        Err(GameError::InvalidAction {
            action: Action::SkipBlind,
            stage: Stage::PreBlind,
        })
    );
}

#[test]
fn generation_is_a_pure_read() {
    let engine = Engine::new(EngineConfig::new());
    let first = engine.gen_action_space();
    let second = engine.gen_action_space();
    assert_eq!(first, second);
}

#[test]
fn same_seed_same_run() {
    let mut left = Engine::new(EngineConfig::new());
    let mut right = Engine::new(EngineConfig::new());
    left.handle_action(Action::SelectBlind).unwrap();
    right.handle_action(Action::SelectBlind).unwrap();
    assert_eq!(left.state.available, right.state.available);
    assert_eq!(left.gen_action_space(), right.gen_action_space());
}

#[test]
fn action_names_are_defined_for_every_slot() {
    let engine = Engine::new(EngineConfig::new());
    for index in 0..BUILTIN_LEN {
        assert!(!engine.get_action_name(index).unwrap().is_empty());
    }
    assert_eq!(engine.get_action_name(8).unwrap(), "play selected cards");
    assert_eq!(engine.get_action_name(15).unwrap(), "buy joker: Joker");
    assert_eq!(
        engine.get_action_name(21).unwrap(),
        "buy voucher: Clearance Sale"
    );
    assert!(matches!(
        engine.get_action_name(BUILTIN_LEN),
        Err(GameError::IndexOutOfBounds { .. })
    ));
}
