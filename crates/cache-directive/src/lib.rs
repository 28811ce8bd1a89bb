//! Typed parsing of HTTP `Cache-Control` header values.
//!
//! This crate turns the raw value of a `Cache-Control` header into a request
//! or response directive record, validating the shape of every recognised
//! directive along the way. It performs no I/O and makes no caching decisions;
//! freshness and revalidation policy belong to the caller.
//!
//! # Overview
//!
//! - Directive names are matched case-insensitively; values are kept as sent,
//!   apart from unescaping inside quoted strings.
//! - Directives that need delta-seconds reject the bare form; flag directives
//!   reject a value. Either mistake aborts the parse with a
//!   [`CacheControlError`] naming the directive.
//! - Unrecognised directives never fail. They are kept in order as
//!   `extensions`.
//! - Delta-seconds values above `i32::MAX` saturate instead of failing.
//!
//! # Example
//!
//! ```
//! use cache_directive::{CacheControlError, Directive, parse_request_directive, parse_response_directive};
//!
//! let response = parse_response_directive("public, max-age=604800, immutable")
//!     .expect("valid response directives");
//! assert!(response.public && response.immutable);
//! assert_eq!(response.max_age, 604_800);
//!
//! let err = parse_request_directive("max-stale").expect_err("max-stale needs a value");
//! assert_eq!(
//!     err,
//!     CacheControlError::MissingDeltaSeconds { directive: Directive::MaxStale }
//! );
//! ```

mod delta_seconds;
mod error;
mod field_name;
pub mod inspect_cli;
mod lex;
pub mod names;
mod parser;
mod quoted;
mod request;
mod response;

pub use delta_seconds::parse_delta_seconds;
pub use error::{CacheControlError, DeltaSecondsError};
pub use field_name::canonical_field_name;
pub use names::Directive;
pub use request::RequestCacheDirective;
pub use response::ResponseCacheDirective;

/// Parses the `Cache-Control` value of a request.
///
/// # Errors
///
/// See [`RequestCacheDirective::parse`].
pub fn parse_request_directive(value: &str) -> Result<RequestCacheDirective, CacheControlError> {
    RequestCacheDirective::parse(value)
}

/// Parses the `Cache-Control` value of a response.
///
/// # Errors
///
/// See [`ResponseCacheDirective::parse`].
pub fn parse_response_directive(value: &str) -> Result<ResponseCacheDirective, CacheControlError> {
    ResponseCacheDirective::parse(value)
}
