//! Escaping and matching of metadata values.
//!
//! Proxies generally do not escape the headers they generate, and legal
//! cookie values are more restrictive than legal header values (query
//! parameter values more restrictive still). Metadata values are therefore
//! always escaped to be legal cookie and query parameter values.
//!
//! Header matchers match either the fully escaped value or a partially
//! escaped, header-legal one, and are literal whenever no byte has more than
//! one legal encoding. Cookie matchers are always regexes. Query matchers
//! match only the fully escaped value.
//!
//! | Value        | Escaped        | Header match       | Cookie match       | Query match    |
//! |--------------|----------------|--------------------|--------------------|----------------|
//! | `simple`     | `simple`       | `simple`           | `simple`           | `simple`       |
//! | `hdr;safe`   | `hdr%3Bsafe`   | `hdr(%3B\|;)safe`  | `hdr%3Bsafe`       | `hdr%3Bsafe`   |
//! | `un\tsafe`   | `un%09safe`    | `un%09safe`        | `un%09safe`        | `un%09safe`    |
//! | `b=o\th`     | `b=o%09h`      | `b(%3D\|=)o%09h`   | `b(%3D\|=)o%09h`   | `b%3Do%09h`    |

use crate::compat::Cow;
use crate::transformer::Transformer;
use crate::types::Matcher;

/// Escape `value` to be safe as a cookie value (RFC 6265 section 4.1), which
/// implies safety as a header value. `%` is escaped as well, since it
/// introduces hex codes.
///
/// Not idempotent: escaping an escaped value escapes its `%` again.
pub fn escape_metadata(value: &str) -> Cow<'_, str> {
    escape_metadata_bytes(value.as_bytes())
}

/// [`escape_metadata`] for input that may not be UTF-8
pub fn escape_metadata_bytes(value: &[u8]) -> Cow<'_, str> {
    Transformer::MetadataEscaper.transform(value).0
}

/// Produce a matcher for escaped metadata in header values.
///
/// Returns [`Matcher::Regex`] when the value contains a byte that may have
/// been escaped or left alone upstream; otherwise [`Matcher::Literal`].
pub fn header_matcher_for_metadata(value: &str) -> Matcher<'_> {
    header_matcher_for_metadata_bytes(value.as_bytes())
}

/// [`header_matcher_for_metadata`] for input that may not be UTF-8
pub fn header_matcher_for_metadata_bytes(value: &[u8]) -> Matcher<'_> {
    let (pattern, is_regex) = Transformer::HeaderMatcher.transform(value);
    Matcher::new(pattern, is_regex)
}

/// Produce a regular expression matching escaped metadata in a cookie value.
/// Matching the cookie name is up to the caller. Regex metacharacters in
/// the value are backslash-escaped.
pub fn cookie_matcher_for_metadata(value: &str) -> Cow<'_, str> {
    cookie_matcher_for_metadata_bytes(value.as_bytes())
}

/// [`cookie_matcher_for_metadata`] for input that may not be UTF-8
pub fn cookie_matcher_for_metadata_bytes(value: &[u8]) -> Cow<'_, str> {
    Transformer::CookieMatcher.transform(value).0
}

/// Produce a literal matching escaped metadata in a query parameter value
pub fn query_matcher_for_metadata(value: &str) -> Cow<'_, str> {
    query_matcher_for_metadata_bytes(value.as_bytes())
}

/// [`query_matcher_for_metadata`] for input that may not be UTF-8
pub fn query_matcher_for_metadata_bytes(value: &[u8]) -> Cow<'_, str> {
    Transformer::QueryMatcher.transform(value).0
}
