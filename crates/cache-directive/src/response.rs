//! Response-side `Cache-Control` directives.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, trace};

use crate::delta_seconds::delta_seconds;
use crate::error::CacheControlError;
use crate::field_name::field_names;
use crate::names::Directive;
use crate::parser::{DirectiveSink, parse_directives};

/// Directives parsed from a response's `Cache-Control` header.
///
/// Age-like fields are `0` when the directive did not appear, which cannot be
/// told apart from an explicit `0`. Request directives use `-1` instead.
///
/// `no-cache` and `private` may appear bare or with a field-name list. The
/// `*_present` flags record that the directive appeared at all; the field sets
/// are only filled by the valued form.
///
/// # Examples
///
/// ```
/// use cache_directive::ResponseCacheDirective;
///
/// let directive = ResponseCacheDirective::parse(r#"private="x-user, set-cookie", max-age=60"#)
///     .expect("valid response directives");
///
/// assert!(directive.private_present);
/// assert!(directive.private.contains("X-User"));
/// assert!(directive.private.contains("Set-Cookie"));
/// assert_eq!(directive.max_age, 60);
/// assert_eq!(directive.s_maxage, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResponseCacheDirective {
    /// `must-revalidate`: stale responses must be revalidated before reuse.
    pub must_revalidate: bool,

    /// Canonical field names listed by a valued `no-cache`.
    pub no_cache: BTreeSet<String>,

    /// `no-cache` appeared, bare or valued.
    pub no_cache_present: bool,

    /// `no-store`: the response must not be stored.
    pub no_store: bool,

    /// `no-transform`: intermediaries must not transform the payload.
    pub no_transform: bool,

    /// `public`: any cache may store the response.
    pub public: bool,

    /// Canonical field names listed by a valued `private`.
    pub private: BTreeSet<String>,

    /// `private` appeared, bare or valued.
    pub private_present: bool,

    /// `proxy-revalidate`: like `must-revalidate`, for shared caches only.
    pub proxy_revalidate: bool,

    /// `max-age`: freshness lifetime in seconds.
    pub max_age: i32,

    /// `s-maxage`: freshness lifetime in seconds for shared caches.
    pub s_maxage: i32,

    /// `immutable`: the payload will not change while fresh.
    pub immutable: bool,

    /// `stale-if-error`: seconds a stale response may be served on error.
    pub stale_if_error: i32,

    /// `stale-while-revalidate`: seconds a stale response may be served while
    /// revalidating in the background.
    pub stale_while_revalidate: i32,

    /// Unrecognised directives in order of appearance, as `name` or
    /// `name=value`. Duplicates are kept.
    pub extensions: Vec<String>,
}

impl ResponseCacheDirective {
    /// Parses a response `Cache-Control` value.
    ///
    /// Later occurrences overwrite scalar fields; field-name lists from
    /// repeated `no-cache` or `private` directives accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`CacheControlError`] on an unterminated quoted value, a bare
    /// time-valued directive, a malformed delta-seconds value, or a value on a
    /// directive that must appear bare.
    pub fn parse(value: &str) -> Result<Self, CacheControlError> {
        let mut directive = Self::default();
        parse_directives(&mut directive, value).inspect_err(|error| {
            debug!(%error, value, "rejected response cache-control value");
        })?;
        Ok(directive)
    }

    fn push_extension(&mut self, extension: String) {
        trace!(%extension, "kept unrecognised response directive");
        self.extensions.push(extension);
    }
}

impl FromStr for ResponseCacheDirective {
    type Err = CacheControlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl DirectiveSink for ResponseCacheDirective {
    fn accept_token(&mut self, name: &str) -> Result<(), CacheControlError> {
        match Directive::from_name(name) {
            Some(
                directive @ (Directive::MaxAge
                | Directive::SMaxAge
                | Directive::StaleIfError
                | Directive::StaleWhileRevalidate),
            ) => return Err(CacheControlError::MissingDeltaSeconds { directive }),
            Some(Directive::Public) => self.public = true,
            Some(Directive::NoStore) => self.no_store = true,
            Some(Directive::Immutable) => self.immutable = true,
            Some(Directive::NoTransform) => self.no_transform = true,
            Some(Directive::Private) => self.private_present = true,
            Some(Directive::MustRevalidate) => self.must_revalidate = true,
            Some(Directive::NoCache) => self.no_cache_present = true,
            Some(Directive::ProxyRevalidate) => self.proxy_revalidate = true,
            _ => self.push_extension(name.to_owned()),
        }
        Ok(())
    }

    fn accept_pair(&mut self, name: &str, value: &str) -> Result<(), CacheControlError> {
        match Directive::from_name(name) {
            Some(
                directive @ (Directive::MustRevalidate
                | Directive::NoStore
                | Directive::NoTransform
                | Directive::Public
                | Directive::ProxyRevalidate
                | Directive::Immutable),
            ) => return Err(CacheControlError::UnexpectedValue { directive }),
            Some(Directive::NoCache) => {
                self.no_cache_present = true;
                self.no_cache.extend(field_names(value));
            }
            Some(Directive::Private) => {
                self.private_present = true;
                self.private.extend(field_names(value));
            }
            Some(directive @ Directive::MaxAge) => self.max_age = delta_seconds(directive, value)?,
            Some(directive @ Directive::SMaxAge) => {
                self.s_maxage = delta_seconds(directive, value)?;
            }
            Some(directive @ Directive::StaleIfError) => {
                self.stale_if_error = delta_seconds(directive, value)?;
            }
            Some(directive @ Directive::StaleWhileRevalidate) => {
                self.stale_while_revalidate = delta_seconds(directive, value)?;
            }
            _ => self.push_extension(format!("{name}={value}")),
        }
        Ok(())
    }
}
