use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Errors that can occur while decoding a query component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits. Carries the offending
    /// sequence, e.g. `"%+t"` or a lone `"%"` at the end of input.
    InvalidEscape(String),
    /// The escapes were well formed but the decoded bytes are not UTF-8.
    /// Carries the raw component.
    InvalidUtf8(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape(escape) => write!(f, "invalid URL escape {escape:?}"),
            Self::InvalidUtf8(component) => {
                write!(f, "invalid UTF-8 after decoding {component:?}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Every decode failure met while parsing a whole query, in query order.
///
/// Parsing keeps going after a failure, so this is returned next to the
/// parsed pairs rather than instead of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeErrors {
    errors: Vec<DecodeError>,
}

impl DecodeErrors {
    /// Append `error`, creating the aggregate on first use.
    pub(crate) fn record(aggregate: &mut Option<Self>, error: DecodeError) {
        aggregate
            .get_or_insert_with(|| Self { errors: Vec::new() })
            .errors
            .push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false` for a value handed out by this crate.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first(&self) -> Option<&DecodeError> {
        self.errors.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecodeError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<DecodeError> {
        self.errors
    }
}

impl fmt::Display for DecodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|error| error as &(dyn std::error::Error + 'static))
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeError;
    type IntoIter = core::slice::Iter<'a, DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Result type for single-component operations
pub type Result<T> = core::result::Result<T, DecodeError>;
