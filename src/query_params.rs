use crate::character_sets::WRITE_SEPARATOR;
use crate::error::DecodeErrors;
use crate::helpers::Segments;
use crate::percent_encode::{decode_component, encode_component_into};
use alloc::string::{String, ToString};
use alloc::vec::{self, Vec};
use core::str::FromStr;

/// A single decoded key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Param {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// An ordered list of decoded query parameters.
///
/// Order is kept exactly as parsed or inserted; it decides the encoded
/// output and which pair "first" refers to. A key may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<Param>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Pairs may be separated by `&` or `;`. A key or value that fails to
    /// decode is kept as the raw text and its error is collected, so the
    /// returned list always holds every non-empty segment of the input.
    /// The second element is `Some` if anything failed to decode.
    ///
    /// ```
    /// use rawquery::QueryParams;
    ///
    /// let (params, errors) = QueryParams::parse("a=1&q=100%+truth&b=2");
    /// assert_eq!(params.len(), 3);
    /// assert_eq!(params.get("q"), Some("100%+truth"));
    /// assert!(errors.is_some());
    /// ```
    pub fn parse(query: &str) -> (Self, Option<DecodeErrors>) {
        let mut errors = None;

        let params = Segments::new(query)
            .filter(|segment| !segment.text.is_empty())
            .map(|segment| {
                let (key, value) = segment.text.split_once('=').unwrap_or((segment.text, ""));
                Param {
                    key: decode_or_keep(key, &mut errors),
                    value: decode_or_keep(value, &mut errors),
                }
            })
            .collect();

        (Self { params }, errors)
    }

    /// Form-urlencode as `key=value` pairs joined with `&`.
    /// Values that failed to decode during parsing are escaped like any
    /// other text, so the output always parses back cleanly.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push(WRITE_SEPARATOR);
            }
            encode_component_into(&mut out, &param.key);
            out.push('=');
            encode_component_into(&mut out, &param.value);
        }
        out
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|param| matches_key(param, key))
            .map(|param| param.value.as_str())
    }

    /// Get all values for a key, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|param| matches_key(param, key))
            .map(|param| param.value.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|param| matches_key(param, key))
    }

    /// Append one pair per value. No-op for an empty key.
    pub fn add<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        if key.is_empty() {
            return;
        }
        self.params
            .extend(values.into_iter().map(|value| Param::new(key, value)));
    }

    /// Set the value of the first pair with `key` and drop the rest.
    /// Appends when the key is absent. No-op for an empty key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if key.is_empty() {
            return;
        }
        let mut value = Some(value.into());
        self.params.retain_mut(|param| {
            if param.key != key {
                return true;
            }
            match value.take() {
                Some(value) => {
                    param.value = value;
                    true
                }
                None => false,
            }
        });
        if let Some(value) = value {
            self.params.push(Param::new(key, value));
        }
    }

    /// Remove the first pair with `key` and return its value.
    pub fn extract(&mut self, key: &str) -> Option<String> {
        let index = self
            .params
            .iter()
            .position(|param| matches_key(param, key))?;
        Some(self.params.remove(index).value)
    }

    /// Remove every pair with `key` and return their values in order.
    pub fn extract_all(&mut self, key: &str) -> Vec<String> {
        let mut values = Vec::new();
        self.params.retain_mut(|param| {
            if matches_key(param, key) {
                values.push(core::mem::take(&mut param.value));
                false
            } else {
                true
            }
        });
        values
    }

    /// Remove the first pair with `key`. Returns whether one was found.
    pub fn delete(&mut self, key: &str) -> bool {
        self.extract(key).is_some()
    }

    /// Remove every pair with `key`. Returns how many were removed.
    pub fn delete_all(&mut self, key: &str) -> usize {
        let before = self.params.len();
        self.params.retain(|param| !matches_key(param, key));
        before - self.params.len()
    }

    /// Sort parameters by key.
    /// The sort is stable: pairs sharing a key keep their relative order.
    pub fn sort(&mut self) {
        self.params.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Move the pairs of the listed keys to the front, in the listed order.
    ///
    /// All pairs of a listed key move together and keep their relative
    /// order. Keys that are not present, or listed twice, are skipped.
    /// Unlisted pairs follow in their original order.
    pub fn set_order<I, K>(&mut self, order: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut rest = core::mem::take(&mut self.params);
        let mut ordered = Vec::with_capacity(rest.len());

        for key in order {
            let key = key.as_ref();
            if !rest.iter().any(|param| param.key == key) {
                continue;
            }
            let (matched, remaining): (Vec<_>, Vec<_>) =
                rest.into_iter().partition(|param| param.key == key);
            ordered.extend(matched);
            rest = remaining;
        }

        ordered.extend(rest);
        self.params = ordered;
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Param> {
        self.params.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|param| param.key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|param| param.value.as_str())
    }

    pub fn as_slice(&self) -> &[Param] {
        &self.params
    }

    pub fn into_vec(self) -> Vec<Param> {
        self.params
    }
}

/// Empty keys never match, the same as in the raw-string functions.
fn matches_key(param: &Param, key: &str) -> bool {
    !key.is_empty() && param.key == key
}

fn decode_or_keep(raw: &str, errors: &mut Option<DecodeErrors>) -> String {
    match decode_component(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, raw, "keeping undecoded query component");
            DecodeErrors::record(errors, error);
            raw.to_string()
        }
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Strict parse: fails if any key or value did not decode.
impl FromStr for QueryParams {
    type Err = DecodeErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            (params, None) => Ok(params),
            (_, Some(errors)) => Err(errors),
        }
    }
}

/// Lossy parse: every pair is kept, decode errors are dropped.
impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s).0
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s).0
    }
}

impl From<Vec<Param>> for QueryParams {
    fn from(params: Vec<Param>) -> Self {
        Self { params }
    }
}

impl<P: Into<Param>> FromIterator<P> for QueryParams {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<Param>> Extend<P> for QueryParams {
    fn extend<T: IntoIterator<Item = P>>(&mut self, iter: T) {
        self.params.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for QueryParams {
    type Item = Param;
    type IntoIter = vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = &'a Param;
    type IntoIter = core::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
