//! Cards and suit identities.
//!
//! A card's identity is its suit plus value - within one game each selected
//! suit contributes exactly one card per value. `face_up` and `image` are
//! display state: `image` is a path the engine produces for collaborators
//! (renderers) but never interprets.
//!
//! ## Asset path convention
//!
//! - Face image: `cards/{suit}/{value}.png`
//! - Back image: `cards/back.png` (any face-down card)
//! - Foundation placeholder: `cards/T/{suit}.png` (empty foundation slot)

use serde::{Deserialize, Serialize};

/// Suit identifier, drawn from the configured suit pool.
///
/// The engine doesn't interpret suit IDs beyond equality - games assign
/// artwork and names via the asset path convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitId(pub u8);

impl SuitId {
    /// Create a new suit ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Path of the placeholder texture shown on an empty foundation slot.
    #[must_use]
    pub fn placeholder_image(self) -> String {
        format!("cards/T/{}.png", self.0)
    }
}

impl std::fmt::Display for SuitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Suit({})", self.0)
    }
}

/// A single playing card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Suit this card belongs to.
    pub suit: SuitId,

    /// Face value (low value upward, default 1..=10).
    pub value: u8,

    /// Whether the card is exposed. Freshly dealt cards are face-down.
    pub face_up: bool,

    /// Face artwork path. Produced once at deal time, never interpreted.
    pub image: String,
}

impl Card {
    /// Path of the shared back artwork for face-down cards.
    pub const BACK_IMAGE: &'static str = "cards/back.png";

    /// Create a face-down card with its computed face image path.
    #[must_use]
    pub fn new(suit: SuitId, value: u8) -> Self {
        Self {
            suit,
            value,
            face_up: false,
            image: format!("cards/{}/{}.png", suit.raw(), value),
        }
    }

    /// Create a face-up card. Convenience for custom deals and tests.
    #[must_use]
    pub fn face_up(suit: SuitId, value: u8) -> Self {
        Self {
            face_up: true,
            ..Self::new(suit, value)
        }
    }

    /// The image a renderer should draw right now: the face artwork when
    /// exposed, the shared back otherwise.
    #[must_use]
    pub fn display_image(&self) -> &str {
        if self.face_up {
            &self.image
        } else {
            Self::BACK_IMAGE
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({}:{})", self.suit.raw(), self.value)
    }
}
