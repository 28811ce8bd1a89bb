//! Request-side `Cache-Control` directives.

use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, trace};

use crate::delta_seconds::delta_seconds;
use crate::error::CacheControlError;
use crate::names::Directive;
use crate::parser::{DirectiveSink, parse_directives};

/// Directives parsed from a request's `Cache-Control` header.
///
/// Age-like fields hold [`RequestCacheDirective::ABSENT`] (`-1`) when the
/// directive did not appear. Response directives use `0` for the same purpose,
/// so callers must check which record they hold before comparing ages.
///
/// # Examples
///
/// ```
/// use cache_directive::RequestCacheDirective;
///
/// let directive = RequestCacheDirective::parse("max-age=0, no-cache, x-trace")
///     .expect("valid request directives");
///
/// assert_eq!(directive.max_age, 0);
/// assert_eq!(directive.max_stale, RequestCacheDirective::ABSENT);
/// assert!(directive.no_cache);
/// assert_eq!(directive.extensions, vec!["x-trace".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RequestCacheDirective {
    /// `max-age`: the oldest response, in seconds, the client will accept.
    pub max_age: i32,

    /// `max-stale`: how far past its freshness lifetime, in seconds, a
    /// response may be and still be accepted.
    pub max_stale: i32,

    /// `min-fresh`: how long, in seconds, a response must stay fresh.
    pub min_fresh: i32,

    /// `no-cache`: a stored response must be validated before use.
    pub no_cache: bool,

    /// `no-store`: nothing from this request or its response may be stored.
    pub no_store: bool,

    /// `only-if-cached`: the client wants a stored response only.
    pub only_if_cached: bool,

    /// Unrecognised directives in order of appearance, as `name` or
    /// `name=value`. Duplicates are kept.
    pub extensions: Vec<String>,
}

impl RequestCacheDirective {
    /// Sentinel stored in an age-like field whose directive did not appear.
    pub const ABSENT: i32 = -1;

    /// Parses a request `Cache-Control` value.
    ///
    /// Later occurrences of a directive overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`CacheControlError`] on an unterminated quoted value, a bare
    /// `max-age`/`max-stale`/`min-fresh`, a malformed delta-seconds value, or a
    /// valued `no-cache`/`no-store`/`only-if-cached`.
    pub fn parse(value: &str) -> Result<Self, CacheControlError> {
        let mut directive = Self::default();
        parse_directives(&mut directive, value).inspect_err(|error| {
            debug!(%error, value, "rejected request cache-control value");
        })?;
        Ok(directive)
    }

    fn push_extension(&mut self, extension: String) {
        trace!(%extension, "kept unrecognised request directive");
        self.extensions.push(extension);
    }
}

impl Default for RequestCacheDirective {
    fn default() -> Self {
        Self {
            max_age: Self::ABSENT,
            max_stale: Self::ABSENT,
            min_fresh: Self::ABSENT,
            no_cache: false,
            no_store: false,
            only_if_cached: false,
            extensions: Vec::new(),
        }
    }
}

impl FromStr for RequestCacheDirective {
    type Err = CacheControlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl DirectiveSink for RequestCacheDirective {
    fn accept_token(&mut self, name: &str) -> Result<(), CacheControlError> {
        match Directive::from_name(name) {
            Some(directive @ (Directive::MaxAge | Directive::MaxStale | Directive::MinFresh)) => {
                return Err(CacheControlError::MissingDeltaSeconds { directive });
            }
            Some(Directive::NoCache) => self.no_cache = true,
            Some(Directive::NoStore) => self.no_store = true,
            Some(Directive::OnlyIfCached) => self.only_if_cached = true,
            _ => self.push_extension(name.to_owned()),
        }
        Ok(())
    }

    fn accept_pair(&mut self, name: &str, value: &str) -> Result<(), CacheControlError> {
        match Directive::from_name(name) {
            Some(
                directive @ (Directive::NoCache | Directive::NoStore | Directive::OnlyIfCached),
            ) => {
                return Err(CacheControlError::UnexpectedValue { directive });
            }
            Some(directive @ Directive::MaxAge) => self.max_age = delta_seconds(directive, value)?,
            Some(directive @ Directive::MaxStale) => {
                self.max_stale = delta_seconds(directive, value)?;
            }
            Some(directive @ Directive::MinFresh) => {
                self.min_fresh = delta_seconds(directive, value)?;
            }
            _ => self.push_extension(format!("{name}={value}")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::DeltaSecondsError;

    #[test]
    fn empty_value_yields_defaults() {
        let directive = RequestCacheDirective::parse("").expect("empty value parses");
        assert_eq!(directive, RequestCacheDirective::default());
        assert_eq!(directive.max_age, -1);
        assert_eq!(directive.max_stale, -1);
        assert_eq!(directive.min_fresh, -1);
    }

    #[test]
    fn parses_every_recognised_directive() {
        let directive = RequestCacheDirective::parse(
            "max-age=10, max-stale=20, min-fresh=30, no-cache, no-store, only-if-cached",
        )
        .expect("valid directives");

        assert_eq!(
            directive,
            RequestCacheDirective {
                max_age: 10,
                max_stale: 20,
                min_fresh: 30,
                no_cache: true,
                no_store: true,
                only_if_cached: true,
                extensions: Vec::new(),
            }
        );
    }

    #[test]
    fn names_are_case_insensitive() {
        let directive = RequestCacheDirective::parse("MAX-AGE=5, No-Cache").expect("valid");
        assert_eq!(directive.max_age, 5);
        assert!(directive.no_cache);
    }

    #[test]
    fn last_occurrence_wins() {
        let directive = RequestCacheDirective::parse("max-age=5, max-age=7").expect("valid");
        assert_eq!(directive.max_age, 7);
    }

    #[rstest]
    #[case("max-age", Directive::MaxAge)]
    #[case("max-stale", Directive::MaxStale)]
    #[case("min-fresh", Directive::MinFresh)]
    #[case("max-age=", Directive::MaxAge)]
    fn bare_age_directives_are_rejected(#[case] value: &str, #[case] directive: Directive) {
        assert_eq!(
            RequestCacheDirective::parse(value),
            Err(CacheControlError::MissingDeltaSeconds { directive })
        );
    }

    #[rstest]
    #[case("no-cache=x", Directive::NoCache)]
    #[case("no-store=\"x\"", Directive::NoStore)]
    #[case("only-if-cached=1", Directive::OnlyIfCached)]
    fn valued_flags_are_rejected(#[case] value: &str, #[case] directive: Directive) {
        assert_eq!(
            RequestCacheDirective::parse(value),
            Err(CacheControlError::UnexpectedValue { directive })
        );
    }

    #[test]
    fn malformed_age_is_wrapped_with_directive() {
        assert_eq!(
            RequestCacheDirective::parse("min-fresh=soon"),
            Err(CacheControlError::InvalidDeltaSeconds {
                directive: Directive::MinFresh,
                source: DeltaSecondsError::InvalidDigit {
                    value: "soon".to_owned(),
                },
            })
        );
    }

    #[test]
    fn response_only_directives_become_extensions() {
        let directive =
            RequestCacheDirective::parse("public, s-maxage=5, foo=bar, foo=bar").expect("valid");
        assert_eq!(
            directive.extensions,
            vec![
                "public".to_owned(),
                "s-maxage=5".to_owned(),
                "foo=bar".to_owned(),
                "foo=bar".to_owned(),
            ]
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: RequestCacheDirective = "max-stale=60".parse().expect("valid");
        assert_eq!(parsed.max_stale, 60);
    }

    #[test]
    fn serialises_with_wire_names() {
        let directive = RequestCacheDirective::parse("only-if-cached").expect("valid");
        let json = serde_json::to_value(&directive).expect("serialise");
        assert_eq!(json["only-if-cached"], serde_json::Value::Bool(true));
        assert_eq!(json["max-age"], serde_json::json!(-1));
    }
}
