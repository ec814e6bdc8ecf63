/*!
 * Number verification engine.
 *
 * Checks that every number of a source text survives, in value and in the
 * expected separator convention, in its translation.
 *
 * # Architecture
 *
 * - `policy`: Which glyphs act as thousands/decimal separators per side
 * - `tokenizer`: Finds candidate numbers in text
 * - `normalizer`: Reads a token into a value and a digit-group shape
 * - `rules`: Ordered decision table for aligned number pairs
 * - `checker`: Pairs numbers and produces diagnostics
 * - `diagnostics`: Report types
 * - `batch`: Concurrent verification of many segment pairs
 */

pub mod policy;
pub mod tokenizer;
pub mod normalizer;
pub mod rules;
pub mod checker;
pub mod diagnostics;
pub mod batch;

// Re-export main types
pub use policy::{LocalizationMode, PolicySide, SeparatorPolicy, SeparatorPolicyBuilder, SeparatorSpec, Side};
pub use tokenizer::{NumberToken, Tokenizer};
pub use normalizer::{NormalizedNumber, NumericValue, normalize};
pub use checker::{NumberVerifier, compare};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticReport, DiagnosticScope};
pub use batch::{BatchSummary, BatchVerifier, SegmentPair, SegmentReport};
