/*!
 * Diagnostic report types.
 *
 * Every kind maps to a fixed scope and a stable message key, so a host can
 * render any diagnostic without an "unknown kind" fallback.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::tokenizer::NumberToken;

static KINDS_BY_MESSAGE_KEY: Lazy<HashMap<&'static str, DiagnosticKind>> = Lazy::new(|| {
    DiagnosticKind::ALL
        .iter()
        .map(|kind| (kind.message_key(), *kind))
        .collect()
});

/// Granularity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticScope {
    /// About the formatting of one token, or one aligned token pair
    TokenPairLevel,
    /// About the numbers of the segment pair as a whole
    SegmentPairLevel,
}

impl std::fmt::Display for DiagnosticScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticScope::TokenPairLevel => write!(f, "token"),
            DiagnosticScope::SegmentPairLevel => write!(f, "segment"),
        }
    }
}

/// What went wrong with a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A source number has no counterpart in the target
    NumberRemoved,
    /// A target number has no counterpart in the source
    NumberAdded,
    /// Aligned numbers have different values
    DifferentValues,
    /// Same value, but written in a way the localization mode does not excuse
    DifferentSequences,
    /// Identical text that means different values on the two sides
    SameSequenceDifferentValues,
    /// The glyph in decimal position is not a decimal separator of its side
    DecimalSeparatorNotValid,
    /// A further separator follows the decimal separator
    SeparatorAfterDecimal,
    /// The target lacks the decimal separator the source has
    MissingTargetSeparators,
    /// The source number is written in the target convention
    SourceUnlocalised,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 9] = [
        DiagnosticKind::NumberRemoved,
        DiagnosticKind::NumberAdded,
        DiagnosticKind::DifferentValues,
        DiagnosticKind::DifferentSequences,
        DiagnosticKind::SameSequenceDifferentValues,
        DiagnosticKind::DecimalSeparatorNotValid,
        DiagnosticKind::SeparatorAfterDecimal,
        DiagnosticKind::MissingTargetSeparators,
        DiagnosticKind::SourceUnlocalised,
    ];

    /// Scope every occurrence of this kind is reported at
    pub fn scope(&self) -> DiagnosticScope {
        match self {
            DiagnosticKind::NumberRemoved
            | DiagnosticKind::NumberAdded
            | DiagnosticKind::DifferentValues
            | DiagnosticKind::DifferentSequences
            | DiagnosticKind::SameSequenceDifferentValues => DiagnosticScope::SegmentPairLevel,
            DiagnosticKind::DecimalSeparatorNotValid
            | DiagnosticKind::SeparatorAfterDecimal
            | DiagnosticKind::MissingTargetSeparators
            | DiagnosticKind::SourceUnlocalised => DiagnosticScope::TokenPairLevel,
        }
    }

    /// Resource key for the host's localized message lookup
    pub fn message_key(&self) -> &'static str {
        match self {
            DiagnosticKind::NumberRemoved => "Error_NumbersRemoved",
            DiagnosticKind::NumberAdded => "Error_NumberAdded",
            DiagnosticKind::DifferentValues => "Error_DifferentValues",
            DiagnosticKind::DifferentSequences => "Error_DifferentSequences",
            DiagnosticKind::SameSequenceDifferentValues => "Error_SameSequenceDifferentValues",
            DiagnosticKind::DecimalSeparatorNotValid => "Error_DecimalSeparatorNotValid",
            DiagnosticKind::SeparatorAfterDecimal => "SeparatorAfterDecimal",
            DiagnosticKind::MissingTargetSeparators => "Error_MissingTargetSeparators",
            DiagnosticKind::SourceUnlocalised => "Error_SourceUnlocalised",
        }
    }

    /// Default English description
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticKind::NumberRemoved => "Number removed from the target",
            DiagnosticKind::NumberAdded => "Number added to the target",
            DiagnosticKind::DifferentValues => "Source and target numbers have different values",
            DiagnosticKind::DifferentSequences => "Source and target numbers are written differently",
            DiagnosticKind::SameSequenceDifferentValues => {
                "Same number text, but its value differs between source and target"
            }
            DiagnosticKind::DecimalSeparatorNotValid => "Decimal separator is not valid",
            DiagnosticKind::SeparatorAfterDecimal => "Separator found after the decimal separator",
            DiagnosticKind::MissingTargetSeparators => "Target number is missing a separator",
            DiagnosticKind::SourceUnlocalised => "Source number follows the target convention",
        }
    }

    /// Look a kind up by its message key
    pub fn from_message_key(key: &str) -> Option<DiagnosticKind> {
        KINDS_BY_MESSAGE_KEY.get(key).copied()
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// One finding, with the tokens it is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub scope: DiagnosticScope,
    pub source_token: Option<NumberToken>,
    pub target_token: Option<NumberToken>,
}

impl Diagnostic {
    /// Create a diagnostic at the kind's own scope
    pub fn new(
        kind: DiagnosticKind,
        source_token: Option<&NumberToken>,
        target_token: Option<&NumberToken>,
    ) -> Self {
        Self {
            kind,
            scope: kind.scope(),
            source_token: source_token.cloned(),
            target_token: target_token.cloned(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.scope, self.kind)?;
        match (&self.source_token, &self.target_token) {
            (Some(s), Some(t)) => write!(f, ": '{}' -> '{}'", s.raw, t.raw),
            (Some(s), None) => write!(f, ": '{}'", s.raw),
            (None, Some(t)) => write!(f, ": '{}'", t.raw),
            (None, None) => Ok(()),
        }
    }
}

/// Ordered diagnostics of one segment pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticReport {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Kinds in report order
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.diagnostics.iter().map(|d| d.kind).collect()
    }

    /// Findings at one scope, order preserved
    pub fn filter_scope(&self, scope: DiagnosticScope) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.scope == scope).collect()
    }

    /// Drop findings outside one scope, order preserved
    pub fn retain_scope(&mut self, scope: DiagnosticScope) {
        self.diagnostics.retain(|d| d.scope == scope);
    }

    /// Drop findings of the given kinds
    pub fn remove_kinds(&mut self, kinds: &[DiagnosticKind]) {
        self.diagnostics.retain(|d| !kinds.contains(&d.kind));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a DiagnosticReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl From<Vec<Diagnostic>> for DiagnosticReport {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}
