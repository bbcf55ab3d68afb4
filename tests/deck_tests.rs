//! Deal invariants, checked across configurations with proptest.

use std::collections::HashMap;

use proptest::prelude::*;
use spider_core::{GameConfig, GameEngine, SuitId};

fn arb_config() -> impl Strategy<Value = GameConfig> {
    (1usize..=4, 2u8..=10, 1usize..=8).prop_map(|(suits, high, columns)| {
        GameConfig::default()
            .with_selected_suit_count(suits)
            .with_values(1..=high)
            .with_column_count(columns)
    })
}

proptest! {
    #[test]
    fn deal_has_exactly_one_card_per_suit_and_value(
        seed in any::<u64>(),
        config in arb_config(),
    ) {
        let engine = GameEngine::with_seed(config.clone(), seed);

        prop_assert_eq!(engine.state().total_cards(), config.total_cards());

        let mut counts: HashMap<(SuitId, u8), usize> = HashMap::new();
        for column in engine.tableau() {
            for card in column.iter() {
                *counts.entry((card.suit, card.value)).or_default() += 1;
            }
        }

        for &suit in engine.foundation_suits() {
            for value in config.values.clone() {
                prop_assert_eq!(counts.get(&(suit, value)), Some(&1));
            }
        }
        prop_assert_eq!(counts.len(), config.total_cards());
    }

    #[test]
    fn deal_selects_distinct_suits_from_the_pool(
        seed in any::<u64>(),
        config in arb_config(),
    ) {
        let engine = GameEngine::with_seed(config.clone(), seed);
        let suits = engine.foundation_suits();

        prop_assert_eq!(suits.len(), config.selected_suit_count);
        for (i, suit) in suits.iter().enumerate() {
            prop_assert!(suit.raw() < config.suit_pool_size);
            prop_assert!(!suits[i + 1..].contains(suit));
        }
    }

    #[test]
    fn deal_exposes_exactly_the_top_of_each_column(
        seed in any::<u64>(),
        config in arb_config(),
    ) {
        let engine = GameEngine::with_seed(config, seed);

        for column in engine.tableau() {
            for (i, card) in column.iter().enumerate() {
                prop_assert_eq!(card.face_up, i + 1 == column.len());
            }
        }
    }

    #[test]
    fn deal_fills_columns_round_robin(
        seed in any::<u64>(),
        config in arb_config(),
    ) {
        let engine = GameEngine::with_seed(config.clone(), seed);

        // Position i goes to column i % column_count, so column sizes
        // differ by at most one and the longer ones come first.
        let sizes: Vec<usize> = engine.tableau().iter().map(|c| c.len()).collect();
        let total = config.total_cards();
        let base = total / config.column_count;
        let remainder = total % config.column_count;

        for (i, &size) in sizes.iter().enumerate() {
            let expected = if i < remainder { base + 1 } else { base };
            prop_assert_eq!(size, expected);
        }
    }

    #[test]
    fn deal_is_deterministic_per_seed(seed in any::<u64>()) {
        let config = GameConfig::default();
        let a = GameEngine::with_seed(config.clone(), seed);
        let b = GameEngine::with_seed(config, seed);

        prop_assert_eq!(a.state(), b.state());
    }

    #[test]
    fn foundations_start_empty(seed in any::<u64>(), config in arb_config()) {
        let engine = GameEngine::with_seed(config, seed);

        for foundation in engine.foundations() {
            prop_assert!(foundation.is_empty());
        }
        prop_assert!(!engine.check_win());
    }
}
