use crate::compat::{Cow, String};

/// Level of regex escaping required for a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexMode {
    /// Regular expressions are not in use: no regex patterns are emitted and
    /// regex metacharacters need no escaping.
    NoEscape,
    /// The result is always a regular expression, so metacharacters are
    /// always escaped.
    AlwaysEscape,
    /// Metacharacters are escaped only if a regex pattern is emitted
    /// somewhere else in the same transformation.
    DynamicEscape,
}

/// How a single input byte is written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingType {
    NotEncoded,
    PercentEncoded,
    RegexEncoded,
}

/// A pattern for matching an escaped metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher<'a> {
    /// Compare verbatim
    Literal(Cow<'a, str>),
    /// Compile as a regular expression
    Regex(Cow<'a, str>),
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(pattern: Cow<'a, str>, is_regex: bool) -> Self {
        if is_regex {
            Self::Regex(pattern)
        } else {
            Self::Literal(pattern)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(p) | Self::Regex(p) => p,
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(_))
    }

    /// Consume the matcher, returning the pattern text
    pub fn into_inner(self) -> Cow<'a, str> {
        match self {
            Self::Literal(p) | Self::Regex(p) => p,
        }
    }

    /// Detach from the input's lifetime
    pub fn into_owned(self) -> Matcher<'static> {
        match self {
            Self::Literal(p) => Matcher::Literal(Cow::Owned(String::from(p))),
            Self::Regex(p) => Matcher::Regex(Cow::Owned(String::from(p))),
        }
    }
}

impl core::fmt::Display for Matcher<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
