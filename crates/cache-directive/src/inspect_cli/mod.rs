//! CLI support for inspecting `Cache-Control` values.
//!
//! The `cache-control-inspect` binary delegates to these functions so that
//! argument handling and rendering can be exercised without spawning a
//! process.

use thiserror::Error;

use crate::error::CacheControlError;
use crate::request::RequestCacheDirective;
use crate::response::ResponseCacheDirective;

/// Which side of the exchange the header value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    /// Parse with the request directive rules.
    Request,
    /// Parse with the response directive rules.
    #[default]
    Response,
}

/// Parsed options for the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    side: Side,
    value: String,
    pretty: bool,
}

impl Options {
    /// Returns the side whose rules the value is parsed with.
    ///
    /// # Example
    ///
    /// ```
    /// use cache_directive::inspect_cli::{ParseOutcome, Side, parse_args};
    ///
    /// let args = vec!["--request".to_owned(), "--value".to_owned(), "no-cache".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.side(), Side::Request);
    /// ```
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the header value to inspect.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the JSON output is pretty-printed.
    #[must_use]
    pub const fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into inspector options.
///
/// # Errors
///
/// Returns [`CliError`] when `--value` is missing, a flag lacks its value,
/// both sides are requested, or an argument is not recognised.
///
/// # Example
///
/// ```
/// use cache_directive::inspect_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--value".to_owned(), "max-age=60".to_owned(), "--pretty".to_owned()];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut side: Option<Side> = None;
    let mut value: Option<String> = None;
    let mut pretty = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--request" => side = Some(select_side(side, Side::Request)?),
            "--response" => side = Some(select_side(side, Side::Response)?),
            "--value" => value = Some(next_value(&mut args, "--value")?),
            "--pretty" => pretty = true,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_value = value.ok_or(CliError::MissingHeaderValue)?;
    Ok(ParseOutcome::Options(Options {
        side: side.unwrap_or_default(),
        value: resolved_value,
        pretty,
    }))
}

/// Parses the configured value and renders the directive record as JSON.
///
/// # Errors
///
/// Returns [`CliError::Directive`] when the header value is rejected.
///
/// # Example
///
/// ```
/// use cache_directive::inspect_cli::{ParseOutcome, parse_args, render};
///
/// let args = vec!["--value".to_owned(), "private, max-age=0".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let json = render(&options).expect("render");
/// assert!(json.contains("\"private-present\":true"));
/// ```
pub fn render(options: &Options) -> Result<String, CliError> {
    let rendered = match options.side {
        Side::Request => to_json(&RequestCacheDirective::parse(&options.value)?, options.pretty),
        Side::Response => to_json(&ResponseCacheDirective::parse(&options.value)?, options.pretty),
    };
    rendered.map_err(|err| CliError::Serialisation {
        message: err.to_string(),
    })
}

fn to_json<T: serde::Serialize>(record: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    }
}

fn select_side(current: Option<Side>, requested: Side) -> Result<Side, CliError> {
    match current {
        Some(existing) if existing != requested => Err(CliError::ConflictingSides),
        _ => Ok(requested),
    }
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

/// Errors surfaced by the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The header value was not supplied.
    #[error("missing required flag: --value")]
    MissingHeaderValue,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// Both `--request` and `--response` were given.
    #[error("--request and --response are mutually exclusive")]
    ConflictingSides,
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// The header value could not be parsed.
    #[error("invalid Cache-Control value: {source}")]
    Directive {
        /// Underlying parse error.
        #[from]
        #[source]
        source: CacheControlError,
    },
    /// The directive record could not be rendered as JSON.
    #[error("failed to render JSON: {message}")]
    Serialisation {
        /// Error message describing the failure.
        message: String,
    },
}
