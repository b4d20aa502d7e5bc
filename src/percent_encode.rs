use crate::character_sets::QUERY_COMPONENT_SET;
use crate::error::{DecodeError, Result};
use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// Form-urlencode a key or value
pub fn encode_component(input: &str) -> String {
    let mut buffer = String::new();
    encode_component_into(&mut buffer, input);
    buffer
}

/// Write a form-urlencoded key or value directly to buffer.
/// Space becomes `+`, everything outside `[A-Za-z0-9-_.~]` becomes `%XX`.
pub fn encode_component_into(buffer: &mut String, input: &str) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    // Each escaped byte comes out as its own "%XX" chunk
    for chunk in utf8_percent_encode(input, QUERY_COMPONENT_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-urlencoded key or value.
///
/// Borrows the input when there is nothing to decode.
///
/// # Errors
///
/// [`DecodeError::InvalidEscape`] when a `%` is not followed by two hex
/// digits, [`DecodeError::InvalidUtf8`] when the decoded bytes are not
/// UTF-8.
pub fn decode_component(input: &str) -> Result<Cow<'_, str>> {
    check_escapes(input)?;

    if memchr::memchr(b'+', input.as_bytes()).is_none() {
        return percent_decode_str(input)
            .decode_utf8()
            .map_err(|_| DecodeError::InvalidUtf8(input.to_string()));
    }

    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| Cow::Owned(decoded.into_owned()))
        .map_err(|_| DecodeError::InvalidUtf8(input.to_string()))
}

/// Reject the first malformed `%XX` escape in `input`.
fn check_escapes(input: &str) -> Result<()> {
    let bytes = input.as_bytes();
    for pos in memchr::memchr_iter(b'%', bytes) {
        let well_formed = bytes
            .get(pos + 1..pos + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            let end = bytes.len().min(pos + 3);
            let escape = String::from_utf8_lossy(&bytes[pos..end]).into_owned();
            return Err(DecodeError::InvalidEscape(escape));
        }
    }
    Ok(())
}
