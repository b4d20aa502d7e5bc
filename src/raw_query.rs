//! Point reads and edits directly on a raw query string.
//!
//! Nothing here builds a list of pairs: each call scans the text, and the
//! mutating calls rewrite the caller's `String` in one go. On error the
//! string is left exactly as it was.
//!
//! The `key` argument is matched against the raw (still encoded) query
//! text and is written back verbatim, so a key with reserved or non-ASCII
//! characters must be encoded by the caller, e.g. with
//! [`encode_component`](crate::encode_component). Values are plain text:
//! they are decoded on read and encoded on write.

use crate::character_sets::{WRITE_SEPARATOR, is_matchable_key, is_separator};
use crate::error::Result;
use crate::helpers::{Segments, param_values, segment_value, trim_trailing_separator};
use crate::percent_encode::{decode_component, encode_component_into};
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// Decoded value of the first `key=value` pair.
///
/// `Ok(None)` when the key is absent or appears without `=`.
///
/// # Errors
///
/// Returns [`DecodeError`](crate::DecodeError) if the value is not valid
/// form-urlencoded text.
pub fn get<'q>(query: &'q str, key: &str) -> Result<Option<Cow<'q, str>>> {
    param_values(query, key)
        .next()
        .map(decode_component)
        .transpose()
}

/// Decoded values of every `key=value` pair, left to right.
///
/// # Errors
///
/// The first value that fails to decode fails the whole call; no partial
/// list is returned.
pub fn get_all<'q>(query: &'q str, key: &str) -> Result<Vec<Cow<'q, str>>> {
    param_values(query, key).map(decode_component).collect()
}

/// Whether a `key=` pair is present. Values are not decoded.
pub fn has(query: &str, key: &str) -> bool {
    param_values(query, key).next().is_some()
}

/// Append one `key=value` pair per value, after any existing pairs.
///
/// Existing occurrences of `key` are left alone. No-op when `values` is
/// empty or the key could never be read back (empty, or containing `=`,
/// `&` or `;`).
pub fn add<I, V>(query: &mut String, key: &str, values: I)
where
    I: IntoIterator<Item = V>,
    V: AsRef<str>,
{
    if !is_matchable_key(key) {
        return;
    }
    for value in values {
        push_param(query, key, value.as_ref());
    }
}

/// Replace the value of the first `key` pair in place and remove every
/// later one. Appends the pair when the key is absent. No-op for a key
/// that could never be read back (empty, or containing `=`, `&` or `;`).
pub fn set(query: &mut String, key: &str, value: &str) {
    if !is_matchable_key(key) {
        return;
    }

    let rewritten = splice(query, key, |index| {
        if index > 0 {
            return Edit::Remove;
        }
        let mut pair = String::with_capacity(key.len() + value.len() + 1);
        pair.push_str(key);
        pair.push('=');
        encode_component_into(&mut pair, value);
        Edit::Replace(pair)
    });

    match rewritten {
        Some(rewritten) => *query = rewritten,
        None => push_param(query, key, value),
    }
}

/// Remove the first `key` pair. Returns whether anything was removed.
pub fn delete(query: &mut String, key: &str) -> bool {
    remove_matching(query, key, |index| index == 0) > 0
}

/// Remove every `key` pair. Returns how many were removed.
pub fn delete_all(query: &mut String, key: &str) -> usize {
    remove_matching(query, key, |_| true)
}

/// Remove the first `key` pair and return its decoded value.
///
/// # Errors
///
/// If the value does not decode, the error is returned and `query` is not
/// touched.
pub fn extract(query: &mut String, key: &str) -> Result<Option<String>> {
    let Some(value) = get(query, key)?.map(Cow::into_owned) else {
        return Ok(None);
    };
    delete(query, key);
    Ok(Some(value))
}

/// Remove every `key` pair and return their decoded values in order.
///
/// # Errors
///
/// All values are decoded before anything is removed: one bad value
/// fails the call and leaves `query` untouched.
pub fn extract_all(query: &mut String, key: &str) -> Result<Vec<String>> {
    let values: Vec<String> = param_values(query, key)
        .map(|raw| decode_component(raw).map(Cow::into_owned))
        .collect::<Result<_>>()?;
    if !values.is_empty() {
        delete_all(query, key);
    }
    Ok(values)
}

/// What to do with the n-th pair matching the key.
enum Edit {
    Keep,
    Remove,
    Replace(String),
}

/// Rebuild `query` applying `edit` to each pair matching `key`.
///
/// Every kept segment is written with the separator that followed it in
/// the input, and a separator left dangling at the end is trimmed. So a
/// removed pair takes its following separator with it, or its preceding
/// one when nothing is kept after it: `a=1;b=2&c=3` minus `b` is
/// `a=1;c=3`, and `a=1&b=2` minus `b` is `a=1`.
///
/// Returns `None` when no pair matched.
fn splice(query: &str, key: &str, mut edit: impl FnMut(usize) -> Edit) -> Option<String> {
    if !is_matchable_key(key) {
        return None;
    }

    let mut out = String::with_capacity(query.len());
    let mut matched = 0;
    let mut dangling = false;

    for segment in Segments::new(query) {
        let action = if segment_value(segment.text, key).is_some() {
            matched += 1;
            edit(matched - 1)
        } else {
            Edit::Keep
        };

        match action {
            Edit::Remove => continue,
            Edit::Keep => out.push_str(segment.text),
            Edit::Replace(pair) => out.push_str(&pair),
        }
        dangling = segment.sep.is_some();
        if let Some(sep) = segment.sep {
            out.push(sep);
        }
    }

    if matched == 0 {
        return None;
    }
    if dangling {
        let kept = trim_trailing_separator(&out).0.len();
        out.truncate(kept);
    }
    Some(out)
}

fn remove_matching(query: &mut String, key: &str, remove: impl Fn(usize) -> bool) -> usize {
    let mut removed = 0;
    let rewritten = splice(query, key, |index| {
        if remove(index) {
            removed += 1;
            Edit::Remove
        } else {
            Edit::Keep
        }
    });
    if let Some(rewritten) = rewritten {
        *query = rewritten;
    }
    removed
}

/// Append `key=value` with `&`, unless the query is empty or already ends
/// with a separator.
fn push_param(query: &mut String, key: &str, value: &str) {
    if query.as_bytes().last().is_some_and(|&b| !is_separator(b)) {
        query.push(WRITE_SEPARATOR);
    }
    query.push_str(key);
    query.push('=');
    encode_component_into(query, value);
}
