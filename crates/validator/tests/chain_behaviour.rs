//! End-to-end behaviour of rules and chains through the public API.

use formkit_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// INDIVIDUAL RULES
// ============================================================================

#[rstest]
#[case("用户名", false)]
#[case("abcdef", true)]
#[case("", true)]
fn username_length(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(length(6, 20).check(input).is_ok(), ok);
}

#[rstest]
#[case("test@example.com", true)]
#[case("user.name@domain.co.uk", true)]
#[case("test@example", false)]
#[case("@example.com", false)]
#[case("test@", false)]
fn email_examples(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(email().check(input).is_ok(), ok, "{input}");
}

#[rstest]
#[case("13812345678", true)]
#[case("12812345678", false)]
#[case("1381234567", false)]
fn mobile_number_pattern(#[case] input: &str, #[case] ok: bool) {
    let validator = pattern(r"^1[3-9]\d{9}$").unwrap();
    assert_eq!(validator.check(input).is_ok(), ok, "{input}");
}

#[test]
fn number_parse_and_empty() {
    let validator = number(Some(0.0), Some(150.0));
    assert!(validator.check("").is_ok());
    assert_eq!(
        validator.check("abc").unwrap_err().message(),
        "`abc` is not a valid number"
    );
    assert!(validator.check("150").is_ok());
    assert!(validator.check("150.5").is_err());
}

#[test]
fn invalid_pattern_builds_nothing() {
    assert!(pattern("[").is_err());
    assert!(ValidatorChain::new().pattern("[", Some("never used")).is_err());
}

// ============================================================================
// CHAINS
// ============================================================================

#[test]
fn required_then_length_short_circuits() {
    let chain = ValidatorChain::new().required(None).length(5, 20, None);

    assert_eq!(
        chain.check("").unwrap_err().message(),
        REQUIRED_MESSAGE,
        "empty input must report the Required message, not the Length one"
    );
    assert_eq!(
        chain.check("abc").unwrap_err().message(),
        "length must be between 5 and 20"
    );
    assert!(chain.check("hello").is_ok());
}

#[test]
fn repeated_validation_is_stable() {
    let chain = ValidatorChain::new()
        .required(None)
        .email(None)
        .length(0, 12, Some("too long"));

    let inputs = ["", "bad", "someone@example.com", "a@b.io"];
    let first: Vec<_> = inputs.iter().map(|i| chain.check(*i)).collect();
    for _ in 0..3 {
        let again: Vec<_> = inputs.iter().map(|i| chain.check(*i)).collect();
        assert_eq!(again, first);
    }
}

#[test]
fn chain_shared_across_threads() {
    let chain = std::sync::Arc::new(
        ValidatorChain::new()
            .required(None)
            .pattern(r"^[a-z]+$", Some("lowercase letters only"))
            .unwrap(),
    );

    let handles: Vec<_> = ["abc", "ABC", ""]
        .into_iter()
        .map(|input| {
            let chain = std::sync::Arc::clone(&chain);
            std::thread::spawn(move || chain.check(input).map_err(String::from))
        })
        .collect();

    let results: Vec<Result<(), String>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            Ok(()),
            Err("lowercase letters only".to_owned()),
            Err(REQUIRED_MESSAGE.to_owned()),
        ]
    );
}

#[test]
fn rules_are_introspectable() {
    let chain = ValidatorChain::new()
        .required(None)
        .number(None, Some(10.0), None)
        .pattern("^[0-9]+$", None)
        .unwrap();

    let kinds: Vec<RuleKind> = chain.rules().iter().map(Rule::kind).collect();
    assert_eq!(kinds, [RuleKind::Required, RuleKind::Number, RuleKind::Pattern]);

    let messages: Vec<&str> = chain.rules().iter().map(Rule::message).collect();
    assert_eq!(messages, [REQUIRED_MESSAGE, "must be ≤ 10", PATTERN_MESSAGE]);
}
