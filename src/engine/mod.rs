//! The game engine: owns the state, applies validated moves, keeps undo
//! history, and reports wins.
//!
//! `GameEngine` is an explicit value owned by the host application - there
//! is no global instance. Hosts pass `&`/`&mut` references into their
//! renderer and input collaborators, and may run several games at once.
//!
//! Every mutation goes through the engine's public operations; accepted
//! moves snapshot the prior state first, rejected requests are complete
//! no-ops. Mutating operations report the win status in their
//! [`MoveOutcome`] so the host decides how to notify.

mod history;
mod outcome;

pub use outcome::{GameError, IndexKind, MoveOutcome};

use history::History;

use crate::core::{Card, Column, Foundation, GameConfig, GameRng, GameState, SuitId};
use crate::deck::generate_deck;
use crate::rules;

fn check_index(kind: IndexKind, index: usize, len: usize) -> Result<(), GameError> {
    if index < len {
        Ok(())
    } else {
        Err(GameError::IndexOutOfRange { kind, index, len })
    }
}

/// One game session: configuration, live state, undo history, and the
/// RNG used for dealing.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    history: History,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine and deal a fresh game with an OS-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine and deal a fresh game from a fixed seed.
    ///
    /// The same configuration and seed always produce the same deal.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        config.validate();
        let mut engine = Self {
            config,
            state: GameState::new(Vec::new(), Vec::new(), Default::default()),
            history: History::new(),
            rng,
        };
        engine.init_game();
        engine
    }

    /// Create an engine over an explicit state (custom deals, tests).
    ///
    /// The state's dimensions must match the configuration.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        config.validate();
        assert_eq!(
            state.tableau().len(),
            config.column_count,
            "State column count must match the configuration"
        );
        assert_eq!(
            state.foundations().len(),
            config.selected_suit_count,
            "State foundation count must match the configuration"
        );
        Self {
            config,
            state,
            history: History::new(),
            rng: GameRng::from_entropy(),
        }
    }

    /// Replace the current game with a fresh deal and clear the history.
    pub fn init_game(&mut self) {
        let deal = generate_deck(&self.config, &mut self.rng);
        let foundations = vec![Foundation::new(); deal.foundation_suits.len()];
        self.state = GameState::new(deal.tableau, foundations, deal.foundation_suits);
        self.history.clear();
    }

    // === Read views ===

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The full game state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The tableau columns.
    #[must_use]
    pub fn tableau(&self) -> &[Column] {
        self.state.tableau()
    }

    /// The foundation piles.
    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        self.state.foundations()
    }

    /// The suit each foundation accepts.
    #[must_use]
    pub fn foundation_suits(&self) -> &[SuitId] {
        self.state.foundation_suits()
    }

    /// How many moves can currently be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The seed behind this engine's deals.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Queries ===

    /// Would `card` (leading a dragged run) be accepted on column
    /// `column_index`? Out-of-range indices simply answer `false`, so
    /// hosts can probe freely while highlighting drop targets.
    #[must_use]
    pub fn can_move_to_tableau(&self, card: &Card, column_index: usize) -> bool {
        self.state
            .column(column_index)
            .is_some_and(|column| rules::can_land_on_column(card, column))
    }

    /// Would `card` be accepted on foundation `foundation_index`?
    /// Out-of-range indices answer `false`.
    #[must_use]
    pub fn can_move_to_foundation(&self, card: &Card, foundation_index: usize) -> bool {
        match (
            self.state.foundation(foundation_index),
            self.state.suit_for(foundation_index),
        ) {
            (Some(foundation), Some(suit)) => {
                rules::can_land_on_foundation(card, foundation, suit, self.config.low_value())
            }
            _ => false,
        }
    }

    /// Does foundation `index` hold its full value run? Out-of-range
    /// indices answer `false`.
    #[must_use]
    pub fn is_foundation_complete(&self, index: usize) -> bool {
        self.state
            .foundation(index)
            .is_some_and(|foundation| rules::is_complete(foundation, self.config.run_length()))
    }

    /// Is the game won, i.e. is every foundation complete?
    #[must_use]
    pub fn check_win(&self) -> bool {
        !self.state.foundations.is_empty()
            && self
                .state
                .foundations
                .iter()
                .all(|foundation| rules::is_complete(foundation, self.config.run_length()))
    }

    // === Mutations ===

    /// Move the run `from[start..]` onto column `to` as a unit.
    ///
    /// Only the run's first card is validated against the destination; the
    /// run's internal ordering is deliberately not checked. On acceptance
    /// the prior state is snapshotted, the run moves, and the source's new
    /// top (if any) is exposed. Rejection changes nothing.
    ///
    /// Moving a run onto its own column is rejected as [`GameError::InvalidMove`].
    pub fn move_stack(
        &mut self,
        from: usize,
        start: usize,
        to: usize,
    ) -> Result<MoveOutcome, GameError> {
        let columns = self.state.tableau.len();
        check_index(IndexKind::Column, from, columns)?;
        check_index(IndexKind::Column, to, columns)?;
        if from == to {
            return Err(GameError::InvalidMove);
        }

        let source = &self.state.tableau[from];
        let lead = source.get(start).ok_or(GameError::IndexOutOfRange {
            kind: IndexKind::Card,
            index: start,
            len: source.len(),
        })?;
        if !rules::can_land_on_column(lead, &self.state.tableau[to]) {
            return Err(GameError::InvalidMove);
        }

        self.history.save(&self.state);
        let run = self.state.tableau[from].take_run(start);
        self.state.tableau[to].append_run(run);
        self.state.tableau[from].expose_top();

        Ok(MoveOutcome {
            won: self.check_win(),
        })
    }

    /// Move the top card of column `from` onto foundation `foundation`.
    ///
    /// Only a column's top card may go to a foundation. On acceptance the
    /// prior state is snapshotted, the card moves, and the source's new
    /// top (if any) is exposed.
    pub fn move_to_foundation(
        &mut self,
        from: usize,
        foundation: usize,
    ) -> Result<MoveOutcome, GameError> {
        check_index(IndexKind::Column, from, self.state.tableau.len())?;
        check_index(IndexKind::Foundation, foundation, self.state.foundations.len())?;

        let card = self.state.tableau[from]
            .top()
            .cloned()
            .ok_or(GameError::InvalidMove)?;
        let suit = self.state.foundation_suits[foundation];
        if !rules::can_land_on_foundation(
            &card,
            &self.state.foundations[foundation],
            suit,
            self.config.low_value(),
        ) {
            return Err(GameError::InvalidMove);
        }

        self.history.save(&self.state);
        let _ = self.state.tableau[from].pop();
        self.state.foundations[foundation].push(card);
        self.state.tableau[from].expose_top();

        Ok(MoveOutcome {
            won: self.check_win(),
        })
    }

    /// Restore the most recent snapshot, undoing one accepted move.
    ///
    /// The foundation suit assignment is immutable after the deal and is
    /// left untouched.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.pop().ok_or(GameError::EmptyHistory)?;
        snapshot.restore(&mut self.state);
        Ok(())
    }
}
