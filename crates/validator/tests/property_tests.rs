//! Property-based tests for formkit-validator.

use formkit_validator::prelude::*;
use proptest::prelude::*;

fn any_rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        Just(Rule::from(required())),
        (0usize..10, 0usize..30).prop_map(|(min, extra)| Rule::from(length(min, min + extra))),
        Just(Rule::from(email())),
        (proptest::option::of(-100.0f64..100.0), proptest::option::of(-100.0f64..100.0))
            .prop_map(|(min, max)| match (min, max) {
                (Some(a), Some(b)) if a > b => Rule::from(number(Some(b), Some(a))),
                _ => Rule::from(number(min, max)),
            }),
        Just(Rule::from(pattern(r"^\d+$").unwrap())),
    ]
}

fn any_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Absent),
        any::<bool>().prop_map(FieldValue::Bool),
        any::<f64>().prop_map(FieldValue::Number),
        ".{0,24}".prop_map(FieldValue::Text),
        proptest::collection::vec(".{0,4}", 0..3).prop_map(FieldValue::from),
    ]
}

// ============================================================================
// SPECS: every built rule rebuilds from its own spec
// ============================================================================

proptest! {
    #[test]
    fn spec_rebuilds_same_rule(rule in any_rule()) {
        let rebuilt = rule.spec().build().unwrap();
        prop_assert_eq!(rebuilt, rule);
    }

    #[test]
    fn number_spec_bounds_are_checked(a in -1e3f64..1e3, b in -1e3f64..1e3) {
        let built = RuleSpec::number(Some(a), Some(b)).build();
        prop_assert_eq!(built.is_ok(), a <= b);
    }
}

// ============================================================================
// OPTIONAL BY DEFAULT: non-Required rules accept absent and empty input
// ============================================================================

proptest! {
    #[test]
    fn non_required_rules_accept_absent_and_empty(rule in any_rule()) {
        prop_assume!(rule.kind() != RuleKind::Required);
        prop_assert!(rule.validate(&FieldValue::Absent).is_ok());
        prop_assert!(rule.check("").is_ok());
    }
}

// ============================================================================
// LENGTH: passes iff min <= chars <= max
// ============================================================================

proptest! {
    #[test]
    fn length_matches_char_count(s in "\\PC{1,30}", min in 0usize..15, extra in 0usize..15) {
        let max = min + extra;
        let count = s.chars().count();
        let ok = length(min, max).check(s.as_str()).is_ok();
        prop_assert_eq!(ok, (min..=max).contains(&count));
    }
}

// ============================================================================
// NUMBER: parsed text passes iff within inclusive bounds
// ============================================================================

proptest! {
    #[test]
    fn number_text_within_bounds(x in -1e6f64..1e6, a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let text = x.to_string();
        let parsed: f64 = text.parse().unwrap();
        let ok = number(Some(min), Some(max)).check(text).is_ok();
        prop_assert_eq!(ok, min <= parsed && parsed <= max);
    }

    #[test]
    fn number_rejects_alphabetic_text(s in "[a-zA-Z]{1,8}") {
        // "inf", "infinity" and "nan" parse as floats; skip them.
        let lower = s.to_ascii_lowercase();
        prop_assume!(!["inf", "infinity", "nan"].contains(&lower.as_str()));
        let err = number(None, None).check(s.as_str()).unwrap_err();
        prop_assert_eq!(err.message(), format!("`{s}` is not a valid number"));
    }
}

// ============================================================================
// CHAIN: first failure is the failure of the first rejecting rule
// ============================================================================

proptest! {
    #[test]
    fn chain_reports_first_rejecting_rule(
        rules in proptest::collection::vec(any_rule(), 0..6),
        value in any_value(),
    ) {
        let chain: ValidatorChain = rules.iter().cloned().collect();
        let expected = rules.iter().find_map(|r| r.validate(&value).err());
        prop_assert_eq!(chain.validate(&value).err(), expected);
    }

    #[test]
    fn chain_is_idempotent(
        rules in proptest::collection::vec(any_rule(), 0..6),
        value in any_value(),
    ) {
        let chain: ValidatorChain = rules.into_iter().collect();
        let first = chain.validate(&value);
        let second = chain.validate(&value);
        prop_assert_eq!(first, second);
    }
}
