use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Pair separators accepted on read. `;` is deprecated but still common.
pub const SEPARATORS: [u8; 2] = [b'&', b';'];

/// Separator emitted on write
pub const WRITE_SEPARATOR: char = '&';

/// Check if a byte separates two parameters
pub fn is_separator(b: u8) -> bool {
    matches!(b, b'&' | b';')
}

/// Query component percent-encode set (application/x-www-form-urlencoded).
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `~`.
/// Space stays in the set; the encoder renders it as `+`.
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A key can only ever match when it fits inside a single `key=value`
/// segment: non-empty, no separator and no `=`.
pub fn is_matchable_key(key: &str) -> bool {
    !key.is_empty() && !key.bytes().any(|b| is_separator(b) || b == b'=')
}
