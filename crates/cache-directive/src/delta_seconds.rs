//! Delta-seconds values shared by every time-valued directive.

use crate::error::{CacheControlError, DeltaSecondsError};
use crate::names::Directive;

/// Parses a delta-seconds value.
///
/// The value must be a non-empty run of ASCII digits with no sign. Numbers
/// above `i32::MAX`, however many digits they have, saturate to `i32::MAX`
/// because the grammar treats very large ages as effectively infinite.
///
/// # Errors
///
/// Returns [`DeltaSecondsError`] when the value is empty or contains a
/// non-digit.
///
/// # Examples
///
/// ```
/// use cache_directive::parse_delta_seconds;
///
/// assert_eq!(parse_delta_seconds("3600"), Ok(3600));
/// assert_eq!(parse_delta_seconds("99999999999999999999"), Ok(i32::MAX));
/// assert!(parse_delta_seconds("+5").is_err());
/// ```
pub fn parse_delta_seconds(value: &str) -> Result<i32, DeltaSecondsError> {
    if value.is_empty() {
        return Err(DeltaSecondsError::Empty);
    }
    if !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(DeltaSecondsError::InvalidDigit {
            value: value.to_owned(),
        });
    }

    // All digits, so the only possible failure is overflow.
    let seconds = value.parse::<u32>().unwrap_or(u32::MAX);
    Ok(i32::try_from(seconds).unwrap_or(i32::MAX))
}

/// Parses the value of `directive`, attributing failures to it.
pub(crate) fn delta_seconds(directive: Directive, value: &str) -> Result<i32, CacheControlError> {
    parse_delta_seconds(value)
        .map_err(|source| CacheControlError::InvalidDeltaSeconds { directive, source })
}
