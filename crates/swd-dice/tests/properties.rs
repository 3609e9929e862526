//! Property tests for parsing and rolling.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use swd_dice::{DicePool, DieKind, Symbol, Tally, parse_dice_pool, roll_pool};

fn die_kind() -> impl Strategy<Value = DieKind> {
    prop::sample::select(DieKind::ALL.to_vec())
}

fn pool() -> impl Strategy<Value = DicePool> {
    prop::collection::vec((die_kind(), 0u32..6), 0..8)
        .prop_map(|entries| entries.into_iter().collect::<DicePool>())
}

fn alias() -> impl Strategy<Value = (DieKind, &'static str)> {
    die_kind().prop_flat_map(|kind| {
        prop::sample::select(kind.aliases()).prop_map(move |code| (kind, code))
    })
}

proptest! {
    #[test]
    fn log_length_matches_pool(pool in pool(), seed in any::<u64>()) {
        let result = roll_pool(&pool, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(result.log.len() as u64, pool.total_dice());
        for entry in &result.log {
            prop_assert!(pool.contains(entry.kind));
        }
    }

    #[test]
    fn tally_equals_symbols_in_log(pool in pool(), seed in any::<u64>()) {
        let result = roll_pool(&pool, &mut StdRng::seed_from_u64(seed));
        let mut expected = Tally::new();
        for entry in &result.log {
            for name in entry.face.split('+').filter(|s| !s.is_empty()) {
                let symbol: Symbol = name.parse().unwrap();
                expected.add(symbol);
            }
        }
        prop_assert_eq!(expected, result.tally);
    }

    #[test]
    fn parser_never_emits_zero_counts(input in "[0-9a-z, ]{0,40}") {
        let pool = parse_dice_pool(&input);
        for (_, count) in pool.iter() {
            prop_assert!(count > 0);
        }
    }

    #[test]
    fn display_round_trips(pool in pool()) {
        prop_assert_eq!(parse_dice_pool(&pool.to_string()), pool);
    }

    #[test]
    fn aliases_accumulate(entries in prop::collection::vec((alias(), 1u32..5), 1..10)) {
        let text: Vec<String> = entries
            .iter()
            .map(|((_, code), count)| format!("{count}{code}"))
            .collect();
        let pool = parse_dice_pool(&text.join(" "));
        for kind in DieKind::ALL {
            let expected: u32 = entries
                .iter()
                .filter(|((k, _), _)| *k == kind)
                .map(|(_, count)| *count)
                .sum();
            prop_assert_eq!(pool.get(kind), expected);
        }
    }
}
