//! `quoted-string` scanning with backslash unescaping.

use crate::lex::is_qd_text;

/// Stand-in for raw bytes that are not quoted text and for unknown escapes.
const SUBSTITUTE: u8 = b'?';

/// Scans a quoted string at the start of `raw`.
///
/// Returns the number of bytes consumed, both quotes included, together with
/// the unescaped content. Returns `None` when `raw` does not open with `"` or
/// when the input ends before the closing quote, including a trailing lone
/// backslash.
///
/// Invalid raw bytes never abort the scan; they are replaced with `?`.
pub(crate) fn parse_quoted_string(raw: &str) -> Option<(usize, String)> {
    let bytes = raw.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }

    let mut content = Vec::with_capacity(bytes.len());
    let mut position = 1;
    while let Some(&byte) = bytes.get(position) {
        match byte {
            b'"' => {
                let text = String::from_utf8_lossy(&content).into_owned();
                return Some((position + 1, text));
            }
            b'\\' => {
                let escaped = bytes.get(position + 1)?;
                content.push(unquote_pair(*escaped));
                position += 2;
            }
            _ => {
                content.push(if is_qd_text(byte) { byte } else { SUBSTITUTE });
                position += 1;
            }
        }
    }
    None
}

/// Maps the byte after a backslash to the byte it stands for.
const fn unquote_pair(byte: u8) -> u8 {
    match byte {
        b'a' => 0x07,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        b'\\' => b'\\',
        b'\'' => b'\'',
        b'"' => b'"',
        _ => SUBSTITUTE,
    }
}
