//! Byte classes from the HTTP/1.1 message grammar.
//!
//! These predicates decide where directive names and values start and stop.
//! They follow the RFC 2616 definitions byte for byte; non-ASCII bytes are
//! never token bytes but do count as quoted text.

/// Horizontal tab or space.
pub(crate) const fn is_white_space(byte: u8) -> bool {
    matches!(byte, b'\t' | b' ')
}

/// RFC 2616 `separators`.
pub(crate) const fn is_separator(byte: u8) -> bool {
    matches!(
        byte,
        b'(' | b')'
            | b'<'
            | b'>'
            | b'@'
            | b','
            | b';'
            | b':'
            | b'\\'
            | b'"'
            | b'/'
            | b'['
            | b']'
            | b'?'
            | b'='
            | b'{'
            | b'}'
            | b' '
            | b'\t'
    )
}

/// RFC 2616 `CTL`: octets 0 to 31 and DEL.
pub(crate) const fn is_ctl(byte: u8) -> bool {
    byte <= 31 || byte == 127
}

/// Any 7-bit US-ASCII octet.
pub(crate) const fn is_char(byte: u8) -> bool {
    byte <= 127
}

pub(crate) const fn is_any_text(byte: u8) -> bool {
    !is_ctl(byte)
}

/// Text allowed verbatim between the quotes of a `quoted-string`.
pub(crate) const fn is_qd_text(byte: u8) -> bool {
    is_any_text(byte) && byte != b'"'
}

/// RFC 2616 `token` octet: 7-bit, not a control, not a separator.
pub(crate) const fn is_token(byte: u8) -> bool {
    is_char(byte) && !is_ctl(byte) && !is_separator(byte)
}
