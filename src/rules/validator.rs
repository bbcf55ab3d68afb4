//! Pure move-legality predicates.
//!
//! These functions read state and answer yes/no; they never mutate and
//! never touch history. The engine wraps them with index handling, and
//! hosts can call them directly (e.g. to highlight legal drop targets
//! while a drag is in progress).

use crate::core::{Card, Column, Foundation, SuitId};

/// Can `card` (the first card of a dragged run) land on `column`?
///
/// An empty column accepts anything. A non-empty column accepts iff its
/// top card is face-up and exactly one higher in value. Suit is not
/// checked for tableau placement.
#[must_use]
pub fn can_land_on_column(card: &Card, column: &Column) -> bool {
    match column.top() {
        None => true,
        Some(top) => top.face_up && top.value == card.value + 1,
    }
}

/// Can `card` land on a foundation assigned `suit`?
///
/// The suit must match. An empty foundation accepts only `low_value`;
/// otherwise the card must be exactly one higher than the current top.
#[must_use]
pub fn can_land_on_foundation(
    card: &Card,
    foundation: &Foundation,
    suit: SuitId,
    low_value: u8,
) -> bool {
    if card.suit != suit {
        return false;
    }
    match foundation.top() {
        None => card.value == low_value,
        Some(top) => card.value == top.value + 1,
    }
}

/// Is the foundation complete, i.e. does it hold the full value run?
///
/// Foundations only ever grow gapless from the low value, so length alone
/// decides completeness.
#[must_use]
pub fn is_complete(foundation: &Foundation, run_length: usize) -> bool {
    foundation.len() == run_length
}
