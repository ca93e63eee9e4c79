use proptest::prelude::*;

use crate::domain::guess::GuessResult;
use crate::domain::proximity::{ProximityScale, RankScale};

#[test]
fn fill_is_full_at_distance_zero() {
    assert_eq!(RankScale.fill_percent(0), 100);
}

#[test]
fn fill_is_empty_far_away() {
    assert_eq!(RankScale.fill_percent(u32::MAX), 0);
}

proptest! {
    #[test]
    fn fill_never_exceeds_one_hundred(distance in 0u32..2_000_000) {
        prop_assert!(RankScale.fill_percent(distance) <= 100);
    }

    #[test]
    fn fill_is_monotonic_non_increasing(a in 0u32..2_000_000, b in 0u32..2_000_000) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RankScale.fill_percent(near) >= RankScale.fill_percent(far));
    }

    #[test]
    fn color_never_improves_with_distance(a in 0u32..2_000_000, b in 0u32..2_000_000) {
        // Green < Cyan < Gray when ordered by distance band.
        fn band(scale: &RankScale, d: u32) -> u8 {
            match scale.color(d) {
                crate::domain::proximity::BarColor::Green => 0,
                crate::domain::proximity::BarColor::Cyan => 1,
                crate::domain::proximity::BarColor::Gray => 2,
            }
        }
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(band(&RankScale, near) <= band(&RankScale, far));
    }

    #[test]
    fn displayed_rank_is_always_distance_plus_one(distance in 0u32..1_000_000) {
        let guess = GuessResult {
            word: "w".into(),
            lemma: "w".into(),
            distance: Some(distance),
            error: None,
        };
        prop_assert_eq!(guess.display_rank(), distance + 1);
    }
}
