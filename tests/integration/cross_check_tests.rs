/*!
 * Segment-pair scenarios with known expected findings.
 *
 * Each test builds the separator settings of a language pair and checks the
 * exact ordered list of findings.
 */

use numverify::verifier::{DiagnosticKind, DiagnosticReport, DiagnosticScope, NumberVerifier, SeparatorPolicy};

use crate::common::{kinds, kinds_at};

/// Source uses decimal commas, target uses thousands commas
fn comma_decimal_to_comma_thousands() -> NumberVerifier {
    let policy = SeparatorPolicy::builder()
        .require_localization()
        .source_decimal(true, false)
        .target_thousands(true, false)
        .alternate_script_digits(true)
        .build()
        .expect("valid policy");
    NumberVerifier::new(policy)
}

/// Source is continental (period thousands, comma decimal), target is English
fn continental_to_english() -> NumberVerifier {
    let policy = SeparatorPolicy::builder()
        .allow_localization()
        .source_thousands(false, true)
        .target_thousands(true, false)
        .source_decimal(true, false)
        .target_decimal(false, true)
        .alternate_script_digits(true)
        .build()
        .expect("valid policy");
    NumberVerifier::new(policy)
}

#[test]
fn test_numberRemoved_whenNumberIsNotPresentInTheTarget() {
    let result = comma_decimal_to_comma_thousands().check_source_and_target(Some("11,200"), None);
    assert_eq!(kinds(&result), vec![DiagnosticKind::NumberRemoved]);
}

#[test]
fn test_numberAdded_whenNumberIsNotPresentInTheSource() {
    let result = comma_decimal_to_comma_thousands().check_source_and_target(None, Some("11,200"));
    assert_eq!(kinds(&result), vec![DiagnosticKind::NumberAdded]);
}

#[test]
fn test_differentSequences_whenSequencesAreDifferent() {
    let policy = SeparatorPolicy::builder()
        .allow_localization()
        .source_decimal(false, true)
        .source_thousands(true, false)
        .target_decimal(false, true)
        .target_thousands(true, false)
        .alternate_script_digits(true)
        .build()
        .expect("valid policy");

    let result = NumberVerifier::new(policy).check_source_and_target(Some("343,44"), Some("343.44"));

    assert_eq!(
        kinds(&result),
        vec![
            DiagnosticKind::DecimalSeparatorNotValid,
            DiagnosticKind::DifferentSequences
        ]
    );
}

#[test]
fn test_differentValues_whenNumbersAreDifferent() {
    let result = comma_decimal_to_comma_thousands().check_source_and_target(Some("34,2"), Some("11,200"));
    assert_eq!(kinds(&result), vec![DiagnosticKind::DifferentValues]);
}

#[test]
fn test_sameSequencesDifferentMeanings_whenDecimalSeparatorsDifferent_localizationAllowed() {
    let verifier = continental_to_english();

    for (source, target) in [
        ("11,200.300", "11,200.300"),
        ("1,234.89", "\u{0661},\u{0662}\u{0663}\u{0664}.\u{0668}\u{0669}"),
    ] {
        let result = verifier.check_source_and_target(Some(source), Some(target));
        assert_eq!(
            kinds(&result),
            vec![
                DiagnosticKind::SeparatorAfterDecimal,
                DiagnosticKind::SourceUnlocalised
            ],
            "source={:?} target={:?}",
            source,
            target
        );
    }
}

#[test]
fn test_sameSequencesButDifferentValues_whenSeparatorsHaveDifferentMeanings() {
    let result = comma_decimal_to_comma_thousands().check_source_and_target(Some("11,200"), Some("11,200"));
    assert_eq!(kinds(&result), vec![DiagnosticKind::SameSequenceDifferentValues]);
}

#[test]
fn test_missingTargetSeparators_whenTargetRoleAtThatPositionIsNotValid() {
    let result = comma_decimal_to_comma_thousands().check_source_and_target(Some("11,20"), Some("11,20"));
    assert_eq!(
        kinds(&result),
        vec![
            DiagnosticKind::MissingTargetSeparators,
            DiagnosticKind::DecimalSeparatorNotValid
        ]
    );
}

#[test]
fn test_noErrors_whenCustomSeparatorsAreUsed() {
    let policy = SeparatorPolicy::builder()
        .allow_localization()
        .source_thousands_custom(false, true, "t")
        .target_thousands_custom(true, false, "t")
        .source_decimal_custom(true, false, "d")
        .target_decimal_custom(false, true, "d")
        .build()
        .expect("valid policy");

    let result = NumberVerifier::new(policy).check_source_and_target(Some("11t200d300"), Some("11t200d300"));
    assert!(result.is_empty(), "unexpected findings: {:?}", kinds(&result));
}

#[test]
fn test_noErrors_whenDecimalSeparatorsDifferent_localizationAllowed() {
    let policy = SeparatorPolicy::builder()
        .allow_localization()
        .source_decimal(true, false)
        .target_decimal(false, true)
        .build()
        .expect("valid policy");

    let result = NumberVerifier::new(policy)
        .check_source_and_target(Some("2400 bis 2483,5"), Some("2400 to 2483.5"));
    assert!(result.is_empty(), "unexpected findings: {:?}", kinds(&result));
}

#[test]
fn test_check_withSurplusNumbers_shouldReportAtLeastTheDifference() {
    let verifier = continental_to_english();

    let result = verifier.check_source_and_target(Some("1 2 3 4 5"), Some("1 2"));
    let removed = kinds(&result)
        .into_iter()
        .filter(|k| *k == DiagnosticKind::NumberRemoved)
        .count();
    assert!(removed >= 3);

    let result = verifier.check_source_and_target(Some("7"), Some("7, 8 and 9"));
    let added = kinds(&result)
        .into_iter()
        .filter(|k| *k == DiagnosticKind::NumberAdded)
        .count();
    assert!(added >= 2);
}

#[test]
fn test_check_calledTwice_shouldGiveIdenticalOutput() {
    let verifier = continental_to_english();
    let source = Some("Der Preis stieg von 1.250,75 auf 2.000 Euro, plus 3,5 %");
    let target = Some("The price rose from 1,250.75 to 2,000.5 euros, plus 3.5%, and 4");

    let first = verifier.check_source_and_target(source, target);
    let second = verifier.check_source_and_target(source, target);

    assert_eq!(first, second);
    assert_eq!(
        kinds(&first),
        vec![DiagnosticKind::DifferentValues, DiagnosticKind::NumberAdded]
    );
}

#[test]
fn test_check_requiredAndAllowed_shouldGiveSameFindings() {
    let build = |required: bool| {
        let builder = SeparatorPolicy::builder()
            .source_thousands(false, true)
            .target_thousands(true, false)
            .source_decimal(true, false)
            .target_decimal(false, true);
        let builder = if required {
            builder.require_localization()
        } else {
            builder.allow_localization()
        };
        NumberVerifier::new(builder.build().expect("valid policy"))
    };

    for (source, target) in [
        ("11,200.300", "11,200.300"),
        ("1.250,75 und 2483,5", "1,250.75 and 2483.5"),
        ("343,44", "343.44"),
        ("1.000", "1000"),
    ] {
        assert_eq!(
            build(true).check_source_and_target(Some(source), Some(target)),
            build(false).check_source_and_target(Some(source), Some(target)),
            "source={:?} target={:?}",
            source,
            target
        );
    }
}

#[test]
fn test_check_withMixedThousandsGlyphsAndSplitTarget_shouldPairPositionally() {
    let policy = SeparatorPolicy::builder()
        .require_localization()
        .target_decimal(true, false)
        .source_thousands_custom(true, true, " ")
        .source_decimal(true, false)
        .build()
        .expect("valid policy");

    let result = NumberVerifier::new(policy).check_source_and_target(
        Some("1 554,5 some word 1.234,5 another word -1,222,3"),
        Some("1.554,5 test 1,234,5 another test word \u{2212}1.222,3"),
    );

    assert_eq!(
        kinds_at(&DiagnosticReport::from(result), DiagnosticScope::SegmentPairLevel),
        vec![
            DiagnosticKind::DifferentValues,
            DiagnosticKind::DifferentValues,
            DiagnosticKind::DifferentValues,
            DiagnosticKind::NumberAdded,
            DiagnosticKind::NumberAdded
        ]
    );
}
