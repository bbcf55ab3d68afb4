//! Undo history.
//!
//! A snapshot is an independent copy of the mutable containers, pushed
//! LIFO immediately before each accepted mutation. `foundation_suits` is
//! immutable after the deal and is not part of snapshots.
//!
//! Columns and foundations are persistent vectors, so capturing a snapshot
//! is a structural O(1) clone that shares no mutable storage with the live
//! state.

use serde::{Deserialize, Serialize};

use crate::core::{Column, Foundation, GameState};

/// An independent copy of the mutable game containers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    tableau: Vec<Column>,
    foundations: Vec<Foundation>,
}

impl Snapshot {
    /// Capture the current mutable state.
    pub(crate) fn capture(state: &GameState) -> Self {
        Self {
            tableau: state.tableau.clone(),
            foundations: state.foundations.clone(),
        }
    }

    /// Replace the live containers wholesale with this snapshot.
    pub(crate) fn restore(self, state: &mut GameState) {
        state.tableau = self.tableau;
        state.foundations = self.foundations;
    }
}

/// LIFO stack of snapshots, unbounded for the lifetime of one game.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot of the current state. Called exactly once per
    /// accepted move, always before the mutation.
    pub(crate) fn save(&mut self, state: &GameState) {
        self.snapshots.push(Snapshot::capture(state));
    }

    /// Pop the most recent snapshot, if any.
    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Drop all snapshots. A fresh deal starts with empty history.
    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, SuitId};
    use smallvec::SmallVec;

    fn sample_state() -> GameState {
        GameState::new(
            vec![Column::from_cards([
                Card::new(SuitId::new(0), 2),
                Card::face_up(SuitId::new(0), 1),
            ])],
            vec![Foundation::new()],
            SmallVec::from_slice(&[SuitId::new(0)]),
        )
    }

    #[test]
    fn test_save_and_pop_lifo() {
        let mut history = History::new();
        let state = sample_state();

        history.save(&state);
        history.save(&state);
        assert_eq!(history.len(), 2);

        assert!(history.pop().is_some());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut history = History::new();
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_snapshot_is_independent_of_live_state() {
        let mut state = sample_state();
        let snapshot = Snapshot::capture(&state);
        let before = state.clone();

        // Mutate the live state after capturing.
        let _ = state.tableau[0].pop();
        state.tableau[0].expose_top();
        assert_ne!(state, before);

        snapshot.restore(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.save(&sample_state());
        history.clear();
        assert_eq!(history.len(), 0);
        assert!(history.pop().is_none());
    }
}
