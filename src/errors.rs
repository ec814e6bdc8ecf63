/*!
 * Error types for the numverify crate.
 *
 * The verification engine itself never fails: irregular numbers are reported
 * as diagnostics. The only errors are configuration errors, raised once when
 * a separator policy is built, and the I/O errors of the application layer.
 */

use thiserror::Error;

use crate::verifier::policy::Side;

/// Errors raised while building a separator policy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// Thousands and decimal specs of one side both allow only the same glyph
    #[error("{side} thousands and decimal separators both use only '{separator}'")]
    AmbiguousSeparator {
        /// Side the conflict was found on
        side: Side,
        /// The glyph claimed by both roles
        separator: String,
    },

    /// A custom separator that would be read as part of a number
    #[error("{side} custom separator '{separator}' must not contain digits or sign characters")]
    InvalidCustomSeparator {
        /// Side the separator belongs to
        side: Side,
        /// The offending custom separator
        separator: String,
    },

    /// Localization is required but there is no decimal separator to localize
    #[error("localization is required but no decimal separator is configured for either side")]
    NothingToLocalize,

    /// The number pattern for a side could not be compiled
    #[error("failed to compile number pattern for {side}: {message}")]
    Pattern {
        /// Side whose pattern failed
        side: Side,
        /// Message from the regex engine
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid separator policy
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
