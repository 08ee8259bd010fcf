//! Property-based tests for EAT/BITE scoring.

use proptest::prelude::*;

use crate::domain::scoring::{score, ScoreResult};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: eat and bite are bounded and sum to at most 3.
    #[test]
    fn prop_eat_bite_bounded(
        a in test_gens::any_number(),
        g in test_gens::any_number(),
    ) {
        let s = score(a, g);
        prop_assert!(s.eat <= 3);
        prop_assert!(s.bite <= 3);
        prop_assert!(s.eat + s.bite <= 3);
    }

    /// Property: a number scored against itself is a win, never (0, 3).
    #[test]
    fn prop_self_score_is_win(a in test_gens::any_number()) {
        let s = score(a, a);
        prop_assert_eq!(s, ScoreResult::new(3, 0));
        prop_assert!(s.is_win());
    }

    /// Property: with digit-distinct inputs the digit-multiset
    /// intersection is symmetric, so swapping answer and guess changes
    /// nothing.
    #[test]
    fn prop_score_symmetric(
        a in test_gens::any_number(),
        g in test_gens::any_number(),
    ) {
        prop_assert_eq!(score(a, g), score(g, a));
    }

    /// Property: eat 3 implies identical numbers.
    #[test]
    fn prop_win_only_on_exact_match(
        a in test_gens::any_number(),
        g in test_gens::any_number(),
    ) {
        if score(a, g).is_win() {
            prop_assert_eq!(a, g);
        }
    }
}
