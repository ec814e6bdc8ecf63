/*!
 * Decision table for aligned number pairs.
 *
 * Each rule is a predicate over the facts of one pair and the outcome it
 * produces. Rules are evaluated in order and the first match wins, so value
 * checks always run before formatting checks.
 */

use super::diagnostics::DiagnosticKind;
use super::policy::LocalizationMode;

/// What is known about an aligned source/target pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairFacts {
    /// Normalized values are equal
    pub values_equal: bool,
    /// Digit-normalized texts are identical
    pub sequences_equal: bool,
    /// Digit groups and separator kinds match
    pub shapes_equal: bool,
    /// Both numbers follow their own side's conventions
    pub both_well_formed: bool,
    pub mode: LocalizationMode,
}

/// One row of the decision table
#[derive(Debug, Clone, Copy)]
pub struct PairRule {
    pub name: &'static str,
    pub applies: fn(&PairFacts) -> bool,
    pub outcome: Option<DiagnosticKind>,
}

fn same_text_other_value(f: &PairFacts) -> bool {
    !f.values_equal && f.sequences_equal
}

fn other_value(f: &PairFacts) -> bool {
    !f.values_equal
}

fn same_text(f: &PairFacts) -> bool {
    f.sequences_equal
}

fn reformatting_not_allowed(f: &PairFacts) -> bool {
    !f.mode.permits_reformatting()
}

fn malformed(f: &PairFacts) -> bool {
    !f.both_well_formed
}

fn regrouped(f: &PairFacts) -> bool {
    !f.shapes_equal
}

fn always(_: &PairFacts) -> bool {
    true
}

/// Ordered rules for aligned pairs
pub const PAIR_RULES: &[PairRule] = &[
    PairRule {
        name: "same text, different value",
        applies: same_text_other_value,
        outcome: Some(DiagnosticKind::SameSequenceDifferentValues),
    },
    PairRule {
        name: "different value",
        applies: other_value,
        outcome: Some(DiagnosticKind::DifferentValues),
    },
    PairRule {
        name: "identical",
        applies: same_text,
        outcome: None,
    },
    PairRule {
        name: "reformatted without localization",
        applies: reformatting_not_allowed,
        outcome: Some(DiagnosticKind::DifferentSequences),
    },
    PairRule {
        name: "reformatted from a malformed number",
        applies: malformed,
        outcome: Some(DiagnosticKind::DifferentSequences),
    },
    PairRule {
        name: "digits regrouped",
        applies: regrouped,
        outcome: Some(DiagnosticKind::DifferentSequences),
    },
    PairRule {
        name: "localized",
        applies: always,
        outcome: None,
    },
];

/// First matching rule for a pair
pub fn matching_rule(facts: &PairFacts) -> &'static PairRule {
    PAIR_RULES
        .iter()
        .find(|rule| (rule.applies)(facts))
        .unwrap_or(&PAIR_RULES[PAIR_RULES.len() - 1])
}

/// Outcome of the decision table for a pair
pub fn classify_pair(facts: &PairFacts) -> Option<DiagnosticKind> {
    matching_rule(facts).outcome
}
