//! Error types for `Cache-Control` parsing.
//!
//! Structural failures abort the whole header value. Shape and numeric
//! failures name the directive that caused them so callers can report the
//! offending part precisely.

use thiserror::Error;

use crate::names::Directive;

/// Errors returned when a `Cache-Control` value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheControlError {
    /// A quoted value was not closed before the end of input.
    ///
    /// A backslash escape cut off by the end of input is reported the same
    /// way.
    #[error("missing closing quote")]
    MissingClosingQuote,

    /// A directive that takes delta-seconds appeared without a value.
    #[error("invalid delta-seconds value in `{directive}` directive")]
    MissingDeltaSeconds {
        /// Directive that requires a value.
        directive: Directive,
    },

    /// A delta-seconds value is not a non-negative decimal integer.
    #[error("invalid delta-seconds value in `{directive}` directive: {source}")]
    InvalidDeltaSeconds {
        /// Directive carrying the malformed value.
        directive: Directive,
        /// Why the value was rejected.
        #[source]
        source: DeltaSecondsError,
    },

    /// A directive that must appear bare was given a value.
    #[error("{directive} directive does not accept a value")]
    UnexpectedValue {
        /// Directive that forbids a value.
        directive: Directive,
    },
}

impl CacheControlError {
    /// Returns the directive the error is attributed to, if any.
    #[must_use]
    pub const fn directive(&self) -> Option<Directive> {
        match self {
            Self::MissingClosingQuote => None,
            Self::MissingDeltaSeconds { directive }
            | Self::InvalidDeltaSeconds { directive, .. }
            | Self::UnexpectedValue { directive } => Some(*directive),
        }
    }
}

/// Errors produced while reading a delta-seconds value.
///
/// Values too large for `i32` are not errors; they saturate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeltaSecondsError {
    /// The value is empty.
    #[error("empty value")]
    Empty,

    /// The value contains something other than ASCII digits.
    #[error("'{value}' is not a non-negative decimal integer")]
    InvalidDigit {
        /// The rejected value.
        value: String,
    },
}
