use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::Trips => "trips",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::Quads => "quads",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
        }
    }

    /// Base chips and mult before card chips and joker effects.
    pub fn base(self) -> (i64, f64) {
        match self {
            HandKind::HighCard => (5, 1.0),
            HandKind::Pair => (10, 2.0),
            HandKind::TwoPair => (20, 2.0),
            HandKind::Trips => (30, 3.0),
            HandKind::Straight => (30, 4.0),
            HandKind::Flush => (35, 4.0),
            HandKind::FullHouse => (40, 4.0),
            HandKind::Quads => (60, 7.0),
            HandKind::StraightFlush | HandKind::RoyalFlush => (100, 8.0),
        }
    }
}

pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    if cards.is_empty() {
        return HandKind::HighCard;
    }

    let len = cards.len();
    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    let mut suit_counts: HashMap<crate::Suit, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
        *suit_counts.entry(card.suit).or_insert(0) += 1;
    }

    let mut counts: Vec<usize> = rank_counts.values().copied().collect();
    counts.sort_by(|a, b| b.cmp(a));

    let is_flush = len == 5 && suit_counts.len() == 1;
    let is_straight = len == 5 && is_straight_run(cards);

    if len == 5 {
        if is_flush && is_straight {
            return if is_royal(cards) {
                HandKind::RoyalFlush
            } else {
                HandKind::StraightFlush
            };
        }
        if counts == [4, 1] {
            return HandKind::Quads;
        }
        if counts == [3, 2] {
            return HandKind::FullHouse;
        }
        if is_flush {
            return HandKind::Flush;
        }
        if is_straight {
            return HandKind::Straight;
        }
    }

    match counts.first().copied().unwrap_or(1) {
        4 => HandKind::Quads,
        3 => HandKind::Trips,
        2 => {
            if counts.get(1) == Some(&2) {
                HandKind::TwoPair
            } else {
                HandKind::Pair
            }
        }
        _ => HandKind::HighCard,
    }
}

/// Indices of the cards that count toward the score. Straights, flushes and
/// full houses score every card; for the rest only the matched ranks (or the
/// single highest card) score.
pub fn scoring_indices(cards: &[Card], hand: HandKind) -> Vec<usize> {
    match hand {
        HandKind::Straight
        | HandKind::Flush
        | HandKind::FullHouse
        | HandKind::StraightFlush
        | HandKind::RoyalFlush => (0..cards.len()).collect(),
        HandKind::HighCard => {
            let best = cards
                .iter()
                .enumerate()
                .max_by_key(|(_, card)| card.rank.order())
                .map(|(idx, _)| idx);
            best.into_iter().collect()
        }
        _ => {
            let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
            for card in cards {
                *rank_counts.entry(card.rank).or_insert(0) += 1;
            }
            cards
                .iter()
                .enumerate()
                .filter(|(_, card)| rank_counts.get(&card.rank).copied().unwrap_or(0) >= 2)
                .map(|(idx, _)| idx)
                .collect()
        }
    }
}

fn is_straight_run(cards: &[Card]) -> bool {
    let mut orders: Vec<u8> = cards.iter().map(|card| card.rank.order()).collect();
    orders.sort_unstable();
    orders.dedup();
    if orders.len() != cards.len() {
        return false;
    }
    if orders.windows(2).all(|pair| pair[1] - pair[0] == 1) {
        return true;
    }
    // Ace-low wheel: A 2 3 4 5.
    orders == [2, 3, 4, 5, 14]
}

fn is_royal(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.rank.order() >= 10)
}
