//! Core engine. Keep this crate free of IO and platform concerns.

pub mod actions;
pub mod cards;
pub mod catalog;
pub mod compat;
pub mod config;
pub mod deck;
pub mod engine;
pub mod events;
pub mod hand;
pub mod ledger;
pub mod rng;
pub mod space;
pub mod stage;
pub mod state;
pub mod warnings;

pub use actions::*;
pub use cards::*;
pub use catalog::*;
pub use compat::*;
pub use config::*;
pub use deck::*;
pub use engine::*;
pub use events::*;
pub use hand::*;
pub use ledger::*;
pub use rng::*;
pub use space::*;
pub use stage::*;
pub use state::*;
pub use warnings::*;
