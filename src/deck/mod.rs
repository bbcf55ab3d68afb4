//! Deal construction.

mod generator;

pub use generator::{generate_deck, Deal};
