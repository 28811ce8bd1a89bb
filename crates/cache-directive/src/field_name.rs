//! Field-name lists carried by `no-cache` and `private`.

use crate::lex::is_token;

/// Canonicalises an HTTP field name.
///
/// The first letter and every letter following a hyphen are upper-cased and
/// all other letters lower-cased. Names containing a byte that is not a token
/// byte (spaces, quotes, non-ASCII) are returned unchanged.
///
/// # Examples
///
/// ```
/// use cache_directive::canonical_field_name;
///
/// assert_eq!(canonical_field_name("set-cookie"), "Set-Cookie");
/// assert_eq!(canonical_field_name("x-API-key"), "X-Api-Key");
/// assert_eq!(canonical_field_name("not a name"), "not a name");
/// ```
#[must_use]
pub fn canonical_field_name(name: &str) -> String {
    if !name.bytes().all(is_token) {
        return name.to_owned();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}

/// Splits a comma-separated field-name list into canonical names.
///
/// Each piece is trimmed of ASCII spaces, tabs, and line breaks. Empty pieces
/// are kept as empty names.
pub(crate) fn field_names(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(|piece| canonical_field_name(piece.trim_matches(is_trimmed)))
}

const fn is_trimmed(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
