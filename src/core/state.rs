//! Game state: tableau columns, foundations, and their suit assignment.
//!
//! `GameState` is owned exclusively by the engine; collaborators (renderer,
//! input handler) only ever receive `&`-views and issue move requests back
//! through the engine's public operations.
//!
//! Column and foundation contents use `im::Vector` so that undo snapshots
//! are O(1) structural clones. The persistent vectors are copy-on-write: a
//! snapshot never shares mutable storage with the live state.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, SuitId};

/// One tableau column, ordered bottom-to-top.
///
/// Straight after a deal only the last (top) card is face-up; deeper cards
/// become face-up when the cards above them move away.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column(Vector<Card>);

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self(Vector::new())
    }

    /// Create a column from cards in bottom-to-top order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self(cards.into_iter().collect())
    }

    /// Number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The top (last) card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.0.back()
    }

    /// The card at `index` (0 = bottom), if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.0.get(index)
    }

    /// Iterate the cards bottom-to-top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }

    /// Append a card on top.
    pub(crate) fn push(&mut self, card: Card) {
        self.0.push_back(card);
    }

    /// Remove and return the top card.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.0.pop_back()
    }

    /// Split off the run from `index` to the top, leaving `0..index`.
    pub(crate) fn take_run(&mut self, index: usize) -> Vector<Card> {
        self.0.split_off(index)
    }

    /// Append a run on top of this column.
    pub(crate) fn append_run(&mut self, run: Vector<Card>) {
        self.0.append(run);
    }

    /// Turn the top card face-up, if the column is non-empty.
    pub(crate) fn expose_top(&mut self) {
        if self.0.is_empty() {
            return;
        }
        let top = self.0.len() - 1;
        if let Some(card) = self.0.get_mut(top) {
            card.face_up = true;
        }
    }
}

/// One foundation pile: a single suit built gapless upward from the low
/// value. Complete when it holds the full value run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation(Vector<Card>);

impl Foundation {
    /// Create an empty foundation.
    #[must_use]
    pub fn new() -> Self {
        Self(Vector::new())
    }

    /// Number of cards placed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no card has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The highest card placed so far, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.0.back()
    }

    /// Iterate the cards low-to-high.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }

    /// Place a card on top.
    pub(crate) fn push(&mut self, card: Card) {
        self.0.push_back(card);
    }
}

/// The entire mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Tableau columns, fixed count for the lifetime of a deal.
    pub(crate) tableau: Vec<Column>,

    /// Foundation piles, index-aligned with `foundation_suits`.
    pub(crate) foundations: Vec<Foundation>,

    /// Which suit each foundation accepts. Immutable after the deal, so
    /// undo snapshots leave it alone.
    pub(crate) foundation_suits: SmallVec<[SuitId; 4]>,
}

impl GameState {
    /// Create a state from explicit parts.
    ///
    /// Foundations must be index-aligned with their suits. Mostly useful
    /// for custom deals and tests; regular games go through
    /// `GameEngine::init_game`.
    #[must_use]
    pub fn new(
        tableau: Vec<Column>,
        foundations: Vec<Foundation>,
        foundation_suits: SmallVec<[SuitId; 4]>,
    ) -> Self {
        assert_eq!(
            foundations.len(),
            foundation_suits.len(),
            "Foundations must be index-aligned with their suits"
        );
        Self {
            tableau,
            foundations,
            foundation_suits,
        }
    }

    /// The tableau columns.
    #[must_use]
    pub fn tableau(&self) -> &[Column] {
        &self.tableau
    }

    /// The foundation piles.
    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    /// The suit each foundation accepts, index-aligned with `foundations`.
    #[must_use]
    pub fn foundation_suits(&self) -> &[SuitId] {
        &self.foundation_suits
    }

    /// The column at `index`, if in range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.tableau.get(index)
    }

    /// The foundation at `index`, if in range.
    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Foundation> {
        self.foundations.get(index)
    }

    /// The suit assigned to foundation `index`, if in range.
    #[must_use]
    pub fn suit_for(&self, index: usize) -> Option<SuitId> {
        self.foundation_suits.get(index).copied()
    }

    /// Total cards currently on the table (tableau + foundations).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_tableau: usize = self.tableau.iter().map(Column::len).sum();
        let in_foundations: usize = self.foundations.iter().map(Foundation::len).sum();
        in_tableau + in_foundations
    }
}
