//! Game configuration.
//!
//! All table dimensions are configurable; the defaults match the classic
//! layout: a pool of 12 suits, 4 selected per game, values 1..=10, dealt
//! into 6 columns.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Configuration for one game.
///
/// Built with the builder-style `with_*` methods:
///
/// ```
/// use spider_core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_selected_suit_count(2)
///     .with_column_count(4);
///
/// assert_eq!(config.total_cards(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Size of the suit pool suits are drawn from.
    pub suit_pool_size: u8,

    /// How many distinct suits one game uses (= foundation count).
    pub selected_suit_count: usize,

    /// Card values, low to high. Each selected suit gets one card per value.
    pub values: RangeInclusive<u8>,

    /// Number of tableau columns the deck is dealt into.
    pub column_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            suit_pool_size: 12,
            selected_suit_count: 4,
            values: 1..=10,
            column_count: 6,
        }
    }
}

impl GameConfig {
    /// Set the suit pool size.
    #[must_use]
    pub fn with_suit_pool_size(mut self, size: u8) -> Self {
        self.suit_pool_size = size;
        self
    }

    /// Set how many suits are selected per game.
    #[must_use]
    pub fn with_selected_suit_count(mut self, count: usize) -> Self {
        self.selected_suit_count = count;
        self
    }

    /// Set the card value range.
    #[must_use]
    pub fn with_values(mut self, values: RangeInclusive<u8>) -> Self {
        self.values = values;
        self
    }

    /// Set the tableau column count.
    #[must_use]
    pub fn with_column_count(mut self, count: usize) -> Self {
        self.column_count = count;
        self
    }

    /// Lowest card value; foundations start from this value.
    #[must_use]
    pub fn low_value(&self) -> u8 {
        *self.values.start()
    }

    /// Cards per suit, which is also the size of a complete foundation.
    #[must_use]
    pub fn run_length(&self) -> usize {
        self.values.clone().count()
    }

    /// Total cards in one game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.selected_suit_count * self.run_length()
    }

    /// Assert the configuration is playable.
    ///
    /// Called by the engine constructors; a bad configuration is a
    /// programming error, not a runtime condition.
    pub(crate) fn validate(&self) {
        assert!(self.selected_suit_count > 0, "Must select at least 1 suit");
        assert!(
            self.selected_suit_count <= self.suit_pool_size as usize,
            "Cannot select more suits than the pool holds"
        );
        assert!(self.column_count > 0, "Must have at least 1 column");
        assert!(!self.values.is_empty(), "Value range must be non-empty");
        assert!(self.low_value() >= 1, "Card values start at 1 or above");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.suit_pool_size, 12);
        assert_eq!(config.selected_suit_count, 4);
        assert_eq!(config.values, 1..=10);
        assert_eq!(config.column_count, 6);
        assert_eq!(config.total_cards(), 40);
        config.validate();
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_suit_pool_size(6)
            .with_selected_suit_count(1)
            .with_values(1..=2)
            .with_column_count(1);

        assert_eq!(config.run_length(), 2);
        assert_eq!(config.low_value(), 1);
        assert_eq!(config.total_cards(), 2);
        config.validate();
    }

    #[test]
    #[should_panic(expected = "Cannot select more suits")]
    fn test_validate_rejects_oversized_selection() {
        GameConfig::default()
            .with_suit_pool_size(2)
            .with_selected_suit_count(3)
            .validate();
    }

    #[test]
    #[should_panic(expected = "at least 1 column")]
    fn test_validate_rejects_zero_columns() {
        GameConfig::default().with_column_count(0).validate();
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_validate_rejects_empty_values() {
        #[allow(reversed_empty_ranges)]
        let config = GameConfig::default().with_values(5..=4);
        config.validate();
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
