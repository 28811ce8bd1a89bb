//! Recognised `Cache-Control` directive names.
//!
//! The string constants are the lower-case wire names and can be used when
//! building header values or comparing names. [`Directive`] is the typed form
//! carried by errors.

use std::fmt;

/// `max-age`
pub const MAX_AGE: &str = "max-age";
/// `no-cache`
pub const NO_CACHE: &str = "no-cache";
/// `no-store`
pub const NO_STORE: &str = "no-store";
/// `max-stale`
pub const MAX_STALE: &str = "max-stale";
/// `min-fresh`
pub const MIN_FRESH: &str = "min-fresh";
/// `no-transform`
pub const NO_TRANSFORM: &str = "no-transform";
/// `only-if-cached`
pub const ONLY_IF_CACHED: &str = "only-if-cached";

/// `public`
pub const PUBLIC: &str = "public";
/// `private`
pub const PRIVATE: &str = "private";
/// `s-maxage`
pub const S_MAXAGE: &str = "s-maxage";
/// `immutable`
pub const IMMUTABLE: &str = "immutable";
/// `stale-if-error`
pub const STALE_IF_ERROR: &str = "stale-if-error";
/// `must-revalidate`
pub const MUST_REVALIDATE: &str = "must-revalidate";
/// `proxy-revalidate`
pub const PROXY_REVALIDATE: &str = "proxy-revalidate";
/// `stale-while-revalidate`
pub const STALE_WHILE_REVALIDATE: &str = "stale-while-revalidate";

/// A directive name known to the request or response assembler.
///
/// # Examples
///
/// ```
/// use cache_directive::Directive;
///
/// assert_eq!(Directive::from_name("s-maxage"), Some(Directive::SMaxAge));
/// assert_eq!(Directive::SMaxAge.to_string(), "s-maxage");
/// assert_eq!(Directive::from_name("x-custom"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `max-age`
    MaxAge,
    /// `no-cache`
    NoCache,
    /// `no-store`
    NoStore,
    /// `max-stale`
    MaxStale,
    /// `min-fresh`
    MinFresh,
    /// `no-transform`
    NoTransform,
    /// `only-if-cached`
    OnlyIfCached,
    /// `public`
    Public,
    /// `private`
    Private,
    /// `s-maxage`
    SMaxAge,
    /// `immutable`
    Immutable,
    /// `stale-if-error`
    StaleIfError,
    /// `must-revalidate`
    MustRevalidate,
    /// `proxy-revalidate`
    ProxyRevalidate,
    /// `stale-while-revalidate`
    StaleWhileRevalidate,
}

impl Directive {
    /// Returns the lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaxAge => MAX_AGE,
            Self::NoCache => NO_CACHE,
            Self::NoStore => NO_STORE,
            Self::MaxStale => MAX_STALE,
            Self::MinFresh => MIN_FRESH,
            Self::NoTransform => NO_TRANSFORM,
            Self::OnlyIfCached => ONLY_IF_CACHED,
            Self::Public => PUBLIC,
            Self::Private => PRIVATE,
            Self::SMaxAge => S_MAXAGE,
            Self::Immutable => IMMUTABLE,
            Self::StaleIfError => STALE_IF_ERROR,
            Self::MustRevalidate => MUST_REVALIDATE,
            Self::ProxyRevalidate => PROXY_REVALIDATE,
            Self::StaleWhileRevalidate => STALE_WHILE_REVALIDATE,
        }
    }

    /// Looks up a lower-case wire name. Matching is exact.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let directive = match name {
            MAX_AGE => Self::MaxAge,
            NO_CACHE => Self::NoCache,
            NO_STORE => Self::NoStore,
            MAX_STALE => Self::MaxStale,
            MIN_FRESH => Self::MinFresh,
            NO_TRANSFORM => Self::NoTransform,
            ONLY_IF_CACHED => Self::OnlyIfCached,
            PUBLIC => Self::Public,
            PRIVATE => Self::Private,
            S_MAXAGE => Self::SMaxAge,
            IMMUTABLE => Self::Immutable,
            STALE_IF_ERROR => Self::StaleIfError,
            MUST_REVALIDATE => Self::MustRevalidate,
            PROXY_REVALIDATE => Self::ProxyRevalidate,
            STALE_WHILE_REVALIDATE => Self::StaleWhileRevalidate,
            _ => return None,
        };
        Some(directive)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
