/*!
 * Aligner and classifier.
 *
 * Numbers are paired positionally, left to right. Formatting findings for
 * each token (or aligned pair) come first in the report; comparison
 * findings about the segment pair follow, in pair order, then removed and
 * added numbers.
 */

use log::debug;

use super::diagnostics::{Diagnostic, DiagnosticKind};
use super::normalizer::{NormalizedNumber, normalize};
use super::policy::{SeparatorPolicy, Side};
use super::rules::{PairFacts, classify_pair};
use super::tokenizer::NumberToken;

/// A token and its reading under its own side
struct ReadToken {
    token: NumberToken,
    number: NormalizedNumber,
}

/// Checks numbers of segment pairs against a fixed policy
#[derive(Debug, Clone)]
pub struct NumberVerifier {
    policy: SeparatorPolicy,
}

impl NumberVerifier {
    pub fn new(policy: SeparatorPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SeparatorPolicy {
        &self.policy
    }

    /// Compare the numbers of a source text and its translation
    pub fn check_source_and_target(
        &self,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Vec<Diagnostic> {
        compare(source, target, &self.policy)
    }
}

/// Compare the numbers of a source text and its translation.
///
/// Pure function of its arguments; never fails. A missing text has no
/// numbers, so its counterpart's numbers are all reported as removed or added.
pub fn compare(
    source_text: Option<&str>,
    target_text: Option<&str>,
    policy: &SeparatorPolicy,
) -> Vec<Diagnostic> {
    let sources = read_side(source_text, policy, Side::Source);
    let targets = read_side(target_text, policy, Side::Target);

    let mut token_level: Vec<Diagnostic> = Vec::new();
    let mut segment_level: Vec<Diagnostic> = Vec::new();

    for (source, target) in sources.iter().zip(targets.iter()) {
        let comparable = check_source_token(source, Some(&target.token), policy, &mut token_level);

        if comparable.has_valid_decimal()
            && !target.number.has_valid_decimal()
            && comparable.value == target.number.value
        {
            token_level.push(Diagnostic::new(
                DiagnosticKind::MissingTargetSeparators,
                Some(&source.token),
                Some(&target.token),
            ));
        }

        check_token_format(target, None, Some(&target.token), &mut token_level);

        let facts = PairFacts {
            values_equal: comparable.value == target.number.value,
            sequences_equal: comparable.sequence == target.number.sequence,
            shapes_equal: comparable.same_shape(&target.number),
            both_well_formed: comparable.well_formed && target.number.well_formed,
            mode: policy.localization_mode(),
        };

        if let Some(kind) = classify_pair(&facts) {
            segment_level.push(Diagnostic::new(kind, Some(&source.token), Some(&target.token)));
        }
    }

    for source in sources.iter().skip(targets.len()) {
        check_source_token(source, None, policy, &mut token_level);
        segment_level.push(Diagnostic::new(
            DiagnosticKind::NumberRemoved,
            Some(&source.token),
            None,
        ));
    }

    for target in targets.iter().skip(sources.len()) {
        check_token_format(target, None, Some(&target.token), &mut token_level);
        segment_level.push(Diagnostic::new(
            DiagnosticKind::NumberAdded,
            None,
            Some(&target.token),
        ));
    }

    debug!(
        "Compared {} source and {} target number(s): {} token-level, {} segment-level finding(s)",
        sources.len(),
        targets.len(),
        token_level.len(),
        segment_level.len()
    );

    token_level.extend(segment_level);
    token_level
}

fn read_side(text: Option<&str>, policy: &SeparatorPolicy, side: Side) -> Vec<ReadToken> {
    policy
        .tokenizer(side)
        .tokenize(text)
        .into_iter()
        .map(|token| {
            let number = normalize(&token, policy.side(side));
            ReadToken { token, number }
        })
        .collect()
}

/// Report formatting problems of a source token and return the reading to compare with.
///
/// A source number that is malformed in its own convention but valid in the
/// target's is reported as unlocalised and compared under the target reading.
fn check_source_token(
    source: &ReadToken,
    target_token: Option<&NumberToken>,
    policy: &SeparatorPolicy,
    out: &mut Vec<Diagnostic>,
) -> NormalizedNumber {
    check_token_format(source, Some(&source.token), target_token, out);

    if source.number.well_formed || !policy.localization_mode().permits_reformatting() {
        return source.number.clone();
    }

    let as_target = normalize(&source.token, policy.target());
    if !as_target.well_formed {
        return source.number.clone();
    }

    out.push(Diagnostic::new(
        DiagnosticKind::SourceUnlocalised,
        Some(&source.token),
        target_token,
    ));
    as_target
}

fn check_token_format(
    read: &ReadToken,
    source_token: Option<&NumberToken>,
    target_token: Option<&NumberToken>,
    out: &mut Vec<Diagnostic>,
) {
    if read.number.separator_after_decimal {
        out.push(Diagnostic::new(
            DiagnosticKind::SeparatorAfterDecimal,
            source_token,
            target_token,
        ));
    }
    if !read.number.decimal_separator_valid {
        out.push(Diagnostic::new(
            DiagnosticKind::DecimalSeparatorNotValid,
            source_token,
            target_token,
        ));
    }
}
