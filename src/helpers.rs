use crate::character_sets::{SEPARATORS, is_matchable_key, is_separator};
use memchr::memmem;

/// Split at the first `&` or `;`.
/// Returns (`before`, `after`, `separator`); without a separator the whole
/// input is `before` and `after` is empty.
/// Optimization: Uses SIMD-accelerated memchr2 for the separator search
pub fn cut_by_any_sep(input: &str) -> (&str, &str, Option<char>) {
    memchr::memchr2(SEPARATORS[0], SEPARATORS[1], input.as_bytes()).map_or(
        (input, "", None),
        |pos| {
            let sep = char::from(input.as_bytes()[pos]);
            (&input[..pos], &input[pos + 1..], Some(sep))
        },
    )
}

/// Strip exactly one trailing `&` or `;`, reporting which one was removed.
pub fn trim_trailing_separator(input: &str) -> (&str, Option<char>) {
    match input.as_bytes().last() {
        Some(&b) if is_separator(b) => (&input[..input.len() - 1], Some(char::from(b))),
        _ => (input, None),
    }
}

/// One `key[=value]` segment of a raw query and the separator after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// `None` only for the last segment of the query
    pub sep: Option<char>,
}

/// Iterator over the segments of a raw query, in order.
/// An empty query yields a single empty segment; consecutive separators
/// yield empty segments between them.
pub struct Segments<'a> {
    rest: &'a str,
    done: bool,
}

impl<'a> Segments<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            rest: query,
            done: false,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (text, after, sep) = cut_by_any_sep(self.rest);
        self.rest = after;
        self.done = sep.is_none();
        Some(Segment { text, sep })
    }
}

/// Raw value of `segment` if it is a `key=value` pair for `key`.
pub fn segment_value<'a>(segment: &'a str, key: &str) -> Option<&'a str> {
    if !is_matchable_key(key) {
        return None;
    }
    segment.strip_prefix(key)?.strip_prefix('=')
}

/// Raw values of every `key=value` pair in `query`, left to right.
///
/// Candidates are located with `memmem` and must start right after a
/// separator (or at the start of the query), so this agrees with
/// [`segment_value`] applied to each of [`Segments`] without splitting the
/// whole query.
pub fn param_values<'q>(query: &'q str, key: &str) -> impl Iterator<Item = &'q str> {
    let bytes = query.as_bytes();
    let key_len = key.len();
    let candidates = is_matchable_key(key).then(|| memmem::find_iter(bytes, key.as_bytes()));

    candidates.into_iter().flatten().filter_map(move |pos| {
        if pos > 0 && !is_separator(bytes[pos - 1]) {
            return None;
        }
        let value = query.get(pos + key_len..)?.strip_prefix('=')?;
        Some(cut_by_any_sep(value).0)
    })
}
