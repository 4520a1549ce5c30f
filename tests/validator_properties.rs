//! Property-based tests for predicate semantics

use affirm::{Text, Validator};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_be_and_inverse_be_are_complements(a in any::<i64>(), b in any::<i64>()) {
        let positive = Validator::new(a).checked().be(b).is_ok();
        let inverse = Validator::inverse(a).checked().be(b).is_ok();
        prop_assert_eq!(positive, a == b);
        prop_assert_eq!(inverse, a != b);
    }

    #[test]
    fn prop_approximately_matches_tolerance(
        a in -1.0e6_f64..1.0e6,
        b in -1.0e6_f64..1.0e6,
        tolerance in 0.0_f64..1.0e3,
    ) {
        let passed = Validator::new(a).checked().be_approximately(b, tolerance).is_ok();
        prop_assert_eq!(passed, (a - b).abs() <= tolerance);
    }

    #[test]
    fn prop_between_matches_inclusive_range(
        a in any::<i32>(),
        min in any::<i32>(),
        max in any::<i32>(),
    ) {
        let passed = Validator::new(a).checked().be_between(min, max).is_ok();
        prop_assert_eq!(passed, min <= a && a <= max);
        if min > max {
            prop_assert!(!passed);
        }
    }

    #[test]
    fn prop_inverted_bounds_echo_as_given(a in any::<u8>(), low in 0_u8..100, gap in 1_u8..100) {
        let high = low + gap;
        let violation = Validator::new(a).checked().be_between(high, low).unwrap_err();
        let expected = format!("to be between \"{high}\" and \"{low}\"");
        prop_assert_eq!(violation.expectation(), expected.as_str());
    }

    #[test]
    fn prop_one_of_ignores_order(
        a in 0_u8..10,
        candidates in prop::collection::vec(0_u8..10, 0..8),
    ) {
        let mut candidates = candidates;
        let forward = Validator::new(a).checked().be_one_of(candidates.clone()).is_ok();
        candidates.reverse();
        let backward = Validator::new(a).checked().be_one_of(candidates.clone()).is_ok();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, candidates.contains(&a));
    }

    #[test]
    fn prop_null_fails_comparisons_and_passes_inverse(bound in any::<i16>(), other in any::<i16>()) {
        let positive = Validator::new(None::<i16>).checked();
        let inverse = Validator::inverse(None::<i16>).checked();

        prop_assert!(positive.be_greater_than(bound).is_err());
        prop_assert!(positive.be_less_than(bound).is_err());
        prop_assert!(positive.be_between(bound.min(other), bound.max(other)).is_err());
        prop_assert!(inverse.be_greater_than_or_equal_to(bound).is_ok());
        prop_assert!(inverse.be_less_than_or_equal_to(bound).is_ok());
        prop_assert!(inverse.be_between(bound.min(other), bound.max(other)).is_ok());
    }

    #[test]
    fn prop_star_pattern_matches_prefix_and_suffix(
        prefix in "[a-z]{0,5}",
        middle in "[a-zA-Z0-9 .()+?]{0,10}",
        suffix in "[a-z]{0,5}",
    ) {
        let text = format!("{prefix}{middle}{suffix}");
        let pattern = format!("{prefix}*{suffix}");
        prop_assert!(Validator::new(Text::from(text.as_str()))
            .checked()
            .match_pattern(&pattern)
            .is_ok());
    }

    #[test]
    fn prop_literal_pattern_is_exact_equality(a in "[a-z.?+]{0,8}", b in "[a-z.?+]{0,8}") {
        let matched = Validator::new(Text::from(a.as_str()))
            .checked()
            .match_pattern(&b)
            .is_ok();
        prop_assert_eq!(matched, a == b);
    }

    #[test]
    fn prop_ignore_case_pattern(word in "[a-z]{1,8}") {
        let upper = word.to_uppercase();
        let validator = Validator::new(Text::from(word.as_str())).checked();
        prop_assert!(validator.match_pattern_ignoring_case(&upper).is_ok());
        prop_assert!(validator.match_pattern(&upper).is_err());
    }
}
