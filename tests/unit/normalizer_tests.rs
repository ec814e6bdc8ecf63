/*!
 * Tests for tokenizing and normalizing numbers through a policy
 */

use numverify::verifier::{NumberToken, SeparatorPolicy, Side, normalize};

fn continental_and_english() -> SeparatorPolicy {
    SeparatorPolicy::builder()
        .source_thousands(false, true)
        .source_decimal(true, false)
        .target_thousands(true, false)
        .target_decimal(false, true)
        .build()
        .unwrap()
}

#[test]
fn test_tokenize_withMissingText_shouldYieldNoTokens() {
    let policy = continental_and_english();
    for side in [Side::Source, Side::Target] {
        assert!(policy.tokenizer(side).tokenize(None).is_empty());
        assert!(policy.tokenizer(side).tokenize(Some("")).is_empty());
    }
}

#[test]
fn test_tokenize_shouldUseEachSidesSeparators() {
    let policy = SeparatorPolicy::builder()
        .source_decimal(true, false)
        .target_thousands(false, true)
        .build()
        .unwrap();
    let text = Some("1.554,5");

    let source: Vec<String> = policy.tokenizer(Side::Source).tokenize(text).into_iter().map(|t| t.raw).collect();
    let target: Vec<String> = policy.tokenizer(Side::Target).tokenize(text).into_iter().map(|t| t.raw).collect();

    assert_eq!(source, vec!["1", "554,5"]);
    assert_eq!(target, vec!["1.554", "5"]);
}

#[test]
fn test_normalize_withSwappedConventions_shouldGiveSameValue() {
    let policy = continental_and_english();
    let pairs = [
        ("1.234,5", "1,234.5"),
        ("-12.000.000,01", "-12,000,000.01"),
        ("999", "999"),
        ("0,25", "0.25"),
    ];

    for (continental, english) in pairs {
        let source = normalize(&NumberToken::new(continental, 0), policy.source());
        let target = normalize(&NumberToken::new(english, 0), policy.target());
        assert_eq!(source.value, target.value, "{} vs {}", continental, english);
        assert!(source.same_shape(&target));
    }
}

#[test]
fn test_normalize_sameLiteralOnBothSides_shouldDiffer() {
    let policy = continental_and_english();
    let token = NumberToken::new("1.500", 0);

    let source = normalize(&token, policy.source());
    let target = normalize(&token, policy.target());

    assert_eq!(source.value.to_string(), "1500");
    assert_eq!(target.value.to_string(), "1.5");
    assert_ne!(source.value, target.value);
}
