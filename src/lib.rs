/*!
 * # numverify - number verification for translations
 *
 * A Rust library that checks whether the numbers of a source sentence are
 * preserved in its translation, both in value and in the separator
 * conventions of each language.
 *
 * ## Features
 *
 * - Per-language thousands and decimal separators (comma, period, custom glyphs)
 * - Disabled, allowed or required localization of number formats
 * - Arabic-Indic and Devanagari digit recognition
 * - Typed diagnostics at token-pair and segment-pair level
 * - Concurrent verification of whole documents
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `verifier`: The verification engine:
 *   - `verifier::policy`: Separator policy and its builder
 *   - `verifier::tokenizer`: Number extraction
 *   - `verifier::normalizer`: Value and shape of a number
 *   - `verifier::checker`: Alignment and classification
 *   - `verifier::batch`: Batch processing of segment pairs
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod verifier;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use verifier::{
    Diagnostic, DiagnosticKind, DiagnosticScope, LocalizationMode, NumberVerifier, SeparatorPolicy,
    SeparatorSpec, compare,
};
pub use errors::{AppError, PolicyError};
