use crate::compat::{Cow, String};
use crate::policy;
use crate::types::{EncodingType, RegexMode};

/// One of the four metadata transformations.
///
/// Each variant pairs a length policy with an encoder from the `policy` module
/// and a default [`RegexMode`]. [`Transformer::transform`] drives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformer {
    /// Escapes values to be legal cookie (and therefore header) values
    MetadataEscaper,
    /// Matches fully or partially escaped values in headers
    HeaderMatcher,
    /// Matches escaped values in cookies; always a regex
    CookieMatcher,
    /// Matches fully escaped values in query parameters; never a regex
    QueryMatcher,
}

impl Transformer {
    pub const fn default_mode(self) -> RegexMode {
        match self {
            Self::MetadataEscaper | Self::QueryMatcher => RegexMode::NoEscape,
            Self::HeaderMatcher => RegexMode::DynamicEscape,
            Self::CookieMatcher => RegexMode::AlwaysEscape,
        }
    }

    /// Output size of `b` and how it will be encoded
    fn encoded_len(self, b: u8, mode: RegexMode) -> (usize, EncodingType) {
        match self {
            Self::MetadataEscaper => policy::metadata_escape_len(b, mode),
            Self::HeaderMatcher => policy::header_matcher_len(b, mode),
            Self::CookieMatcher => policy::cookie_matcher_len(b, mode),
            Self::QueryMatcher => policy::query_matcher_len(b, mode),
        }
    }

    /// Append the encoding of `b`. `escape_regex` means regex
    /// metacharacters must be escaped.
    fn encode_into(self, out: &mut String, b: u8, escape_regex: bool) {
        match self {
            Self::MetadataEscaper => policy::metadata_escape(out, b, escape_regex),
            Self::HeaderMatcher => policy::header_matcher_escape(out, b, escape_regex),
            Self::CookieMatcher => policy::cookie_matcher_escape(out, b, escape_regex),
            Self::QueryMatcher => policy::query_matcher_escape(out, b, escape_regex),
        }
    }

    /// Transform `input`, returning the output and whether it is a regular
    /// expression.
    ///
    /// Input that needs no changes is returned borrowed. It is still reported
    /// as a regex when the default mode is [`RegexMode::AlwaysEscape`].
    pub fn transform(self, input: &[u8]) -> (Cow<'_, str>, bool) {
        let mut mode = self.default_mode();

        // Sizing pass. Restarts at most once, when a dynamic transformation
        // first needs regex output: bytes already counted may now need
        // escaping too.
        let (total, changed) = loop {
            match self.measure(input, mode) {
                Measure::Escalate(pos) => {
                    log::trace!(
                        "{self:?}: byte {:#04x} at offset {pos} requires regex output, rescanning {} bytes",
                        input[pos],
                        input.len()
                    );
                    mode = RegexMode::AlwaysEscape;
                }
                Measure::Done { total, changed } => break (total, changed),
            }
        };

        if !changed {
            // Unchanged bytes are all header-safe, hence ASCII.
            if let Ok(s) = core::str::from_utf8(input) {
                return (Cow::Borrowed(s), self.default_mode() == RegexMode::AlwaysEscape);
            }
        }

        // Still DynamicEscape means no regex pattern was required.
        let is_regex = mode == RegexMode::AlwaysEscape;

        let mut out = String::with_capacity(total);
        for &b in input {
            self.encode_into(&mut out, b, is_regex);
        }
        debug_assert_eq!(out.len(), total, "{self:?}: encoded length mismatch");

        (Cow::Owned(out), is_regex)
    }

    /// Convenience wrapper over [`Transformer::transform`] for string input
    pub fn transform_str(self, input: &str) -> (Cow<'_, str>, bool) {
        self.transform(input.as_bytes())
    }

    fn measure(self, input: &[u8], mode: RegexMode) -> Measure {
        let mut total = 0;
        let mut changed = false;

        for (pos, &b) in input.iter().enumerate() {
            let (n, encoding) = self.encoded_len(b, mode);
            if mode == RegexMode::DynamicEscape && encoding == EncodingType::RegexEncoded {
                return Measure::Escalate(pos);
            }

            total += n;
            changed |= encoding != EncodingType::NotEncoded;
        }

        Measure::Done { total, changed }
    }
}

/// Outcome of one sizing pass
enum Measure {
    /// A dynamic pass hit a byte that needs regex output
    Escalate(usize),
    Done { total: usize, changed: bool },
}
