//! Tokenizer for the `Cache-Control` directive list.
//!
//! A single left-to-right pass splits the header value into bare directive
//! names and `name=value` pairs and hands each one to a [`DirectiveSink`].
//! Names are lower-cased; values are passed through untouched apart from
//! quoted-string unescaping.

use crate::error::CacheControlError;
use crate::lex::{is_token, is_white_space};
use crate::names::{NO_CACHE, PRIVATE};
use crate::quoted::parse_quoted_string;

/// Receives directives as the tokenizer finds them.
///
/// Implementors own the per-name validation rules. Returning an error stops
/// the parse.
pub(crate) trait DirectiveSink {
    /// Called for a directive that carried no value.
    fn accept_token(&mut self, name: &str) -> Result<(), CacheControlError>;

    /// Called for a `name=value` directive, with quoted values unescaped.
    fn accept_pair(&mut self, name: &str, value: &str) -> Result<(), CacheControlError>;
}

/// Walks `value` and feeds every directive into `sink`.
///
/// Whitespace and commas between directives are skipped. Parsing stops at the
/// first structural or sink error.
pub(crate) fn parse_directives<S>(sink: &mut S, value: &str) -> Result<(), CacheControlError>
where
    S: DirectiveSink + ?Sized,
{
    let bytes = value.as_bytes();
    let mut index = 0;

    while let Some(&byte) = bytes.get(index) {
        if is_white_space(byte) || byte == b',' {
            index += 1;
            continue;
        }

        let name_end = find_name_end(value, index);
        let name = value.get(index..name_end).unwrap_or_default().to_lowercase();

        // `=` only introduces a value when at least one byte follows it.
        if name_end + 1 < bytes.len() && bytes.get(name_end) == Some(&b'=') {
            let value_start = name_end + 1;
            index = if bytes.get(value_start) == Some(&b'"') {
                let rest = value.get(value_start..).unwrap_or_default();
                let (consumed, unescaped) =
                    parse_quoted_string(rest).ok_or(CacheControlError::MissingClosingQuote)?;
                sink.accept_pair(&name, &unescaped)?;
                value_start + consumed
            } else {
                let value_end = unquoted_value_end(bytes, value_start, allows_comma(&name));
                let raw = value.get(value_start..value_end).unwrap_or_default();
                sink.accept_pair(&name, raw.strip_suffix(',').unwrap_or(raw))?;
                value_end
            };
        } else {
            if name != "," {
                sink.accept_token(&name)?;
            }
            index = name_end;
        }
    }

    Ok(())
}

/// Directives whose unquoted value is a comma-separated field-name list.
fn allows_comma(name: &str) -> bool {
    matches!(name, NO_CACHE | PRIVATE)
}

/// Finds the end of the directive name starting at `start`.
///
/// The first character is always taken, even when it is not a token byte, so
/// stray punctuation still makes progress and surfaces as an extension.
fn find_name_end(value: &str, start: usize) -> usize {
    let first_len = value
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8);
    let bytes = value.as_bytes();
    let mut end = start + first_len;
    while bytes.get(end).copied().is_some_and(is_token) {
        end += 1;
    }
    end
}

fn unquoted_value_end(bytes: &[u8], start: usize, allow_comma: bool) -> usize {
    let mut end = start;
    while let Some(&byte) = bytes.get(end) {
        if is_white_space(byte) || (!allow_comma && byte == b',') {
            break;
        }
        end += 1;
    }
    end
}
