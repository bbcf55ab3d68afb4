//! Deal construction.
//!
//! `generate_deck` builds a fresh tableau:
//!
//! 1. Rejection-sample the game's distinct suits from the pool.
//! 2. Build each suit's value run face-down and shuffle it independently.
//! 3. Interleave the runs round-robin, popping from each tail.
//! 4. Deal the combined deck into columns by `index % column_count`.
//! 5. Turn the top card of every non-empty column face-up.
//!
//! The deal guarantees card-count and per-suit-completeness invariants but
//! makes no claim that the resulting layout is winnable by legal moves.

use smallvec::SmallVec;

use crate::core::{Card, Column, GameConfig, GameRng, SuitId};

/// A freshly generated deal: dealt columns plus the suit assignment for
/// the (initially empty) foundations.
#[derive(Clone, Debug)]
pub struct Deal {
    /// Dealt tableau columns, `config.column_count` of them.
    pub tableau: Vec<Column>,

    /// The selected suits, one per foundation, in selection order.
    pub foundation_suits: SmallVec<[SuitId; 4]>,
}

/// Generate a shuffled deal for the given configuration.
///
/// Deterministic for a given RNG state: the same seed always yields the
/// same deal.
#[must_use]
pub fn generate_deck(config: &GameConfig, rng: &mut GameRng) -> Deal {
    let suits = pick_suits(rng, config.suit_pool_size, config.selected_suit_count);

    let mut groups: Vec<Vec<Card>> = suits.iter().map(|&suit| suit_run(suit, config)).collect();
    for group in &mut groups {
        rng.shuffle(group);
    }

    let deck = interleave(groups);
    let tableau = deal_columns(deck, config.column_count);

    Deal {
        tableau,
        foundation_suits: suits,
    }
}

/// Draw `count` distinct suits from a pool of `pool` by rejection
/// sampling: draw uniformly, discard duplicates, repeat.
fn pick_suits(rng: &mut GameRng, pool: u8, count: usize) -> SmallVec<[SuitId; 4]> {
    let mut suits: SmallVec<[SuitId; 4]> = SmallVec::new();
    while suits.len() < count {
        let pick = SuitId::new(rng.gen_range_usize(0..pool as usize) as u8);
        if !suits.contains(&pick) {
            suits.push(pick);
        }
    }
    suits
}

/// One suit's full value run, face-down, low value first.
fn suit_run(suit: SuitId, config: &GameConfig) -> Vec<Card> {
    config
        .values
        .clone()
        .map(|value| Card::new(suit, value))
        .collect()
}

/// Combine per-suit groups round-robin, popping one card off the tail of
/// each non-empty group until all are exhausted.
fn interleave(mut groups: Vec<Vec<Card>>) -> Vec<Card> {
    let total = groups.iter().map(Vec::len).sum();
    let mut deck = Vec::with_capacity(total);

    while groups.iter().any(|group| !group.is_empty()) {
        for group in &mut groups {
            if let Some(card) = group.pop() {
                deck.push(card);
            }
        }
    }

    deck
}

/// Deal the combined deck into columns round-robin and expose each top.
fn deal_columns(deck: Vec<Card>, column_count: usize) -> Vec<Column> {
    let mut tableau = vec![Column::new(); column_count];

    for (position, card) in deck.into_iter().enumerate() {
        tableau[position % column_count].push(card);
    }
    for column in &mut tableau {
        column.expose_top();
    }

    tableau
}
