//! # spider-core
//!
//! Rules engine for a single-player, Spider-style foundation-building
//! solitaire: cards are dealt into tableau columns, and the player exposes
//! and relocates runs to build ascending same-suit sequences on per-suit
//! foundations.
//!
//! ## Design Principles
//!
//! 1. **Engine-only**: deck construction, move legality, state mutation,
//!    undo history, and win detection. Rendering, input wiring, and asset
//!    loading are external collaborators that read `&`-views of engine
//!    state and issue move requests.
//!
//! 2. **Explicit instances**: [`GameEngine`] is a plain value owned by the
//!    host - no global game, so multiple concurrent games and isolated
//!    tests come for free.
//!
//! 3. **No-op rejection**: illegal requests return [`GameError`] values
//!    and leave state and history untouched; nothing panics, nothing
//!    aborts the session.
//!
//! 4. **Outcome over callbacks**: mutating operations return a
//!    [`MoveOutcome`] carrying the win flag, instead of a mutable
//!    subscriber slot.
//!
//! ## Example
//!
//! ```
//! use spider_core::{GameConfig, GameEngine};
//!
//! let mut engine = GameEngine::with_seed(GameConfig::default(), 42);
//!
//! assert_eq!(engine.tableau().len(), 6);
//! assert_eq!(engine.foundations().len(), 4);
//!
//! // Rejected moves are no-ops; accepted ones report the win flag.
//! if let Ok(outcome) = engine.move_stack(0, 0, 1) {
//!     assert!(!outcome.won);
//!     engine.undo().unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, configuration, RNG, game state
//! - `deck`: deal construction (suit selection, shuffle, interleave, deal)
//! - `rules`: pure move-legality predicates
//! - `engine`: the mutating engine with undo history and outcomes

pub mod core;
pub mod deck;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Card, Column, Foundation, GameConfig, GameRng, GameState, SuitId};
pub use crate::deck::{generate_deck, Deal};
pub use crate::engine::{GameEngine, GameError, IndexKind, MoveOutcome};
