//! Core data types: cards, configuration, RNG, and game state.

mod card;
mod config;
mod rng;
mod state;

pub use card::{Card, SuitId};
pub use config::GameConfig;
pub use rng::GameRng;
pub use state::{Column, Foundation, GameState};
