//! Per-context encoding rules.
//!
//! Every context comes as a pair: a `*_len` function that reports how many
//! output bytes a byte expands to (and how it is encoded) under a
//! [`RegexMode`], and an encoder that appends those bytes to a buffer. The
//! two must always agree on length.
//!
//! Percent-encoding uses upper-case hex digits, e.g. `;` becomes `%3B`.

use crate::character_sets::classify;
use crate::compat::String;
use crate::types::{EncodingType, RegexMode};
use percent_encoding::percent_encode_byte;

/// Length of a `%XX` triplet
const PERCENT_LEN: usize = 3;

/// `(%XX|b)`
const ALTERNATION_LEN: usize = 7;

/// `(%XX|\b)`
const ESCAPED_ALTERNATION_LEN: usize = 8;

/// `\b`
const ESCAPED_LEN: usize = 2;

fn push_percent_encoded(out: &mut String, b: u8) {
    out.push_str(percent_encode_byte(b));
}

/// Append `(%XX|b)`, backslash-escaping `b` when `escape_literal` is set.
/// `b` must be printable ASCII.
fn push_alternation(out: &mut String, b: u8, escape_literal: bool) {
    out.push('(');
    push_percent_encoded(out, b);
    out.push('|');
    if escape_literal {
        out.push('\\');
    }
    out.push(char::from(b));
    out.push(')');
}

fn alternation_len(regex_safe: bool) -> (usize, EncodingType) {
    if regex_safe {
        (ALTERNATION_LEN, EncodingType::RegexEncoded)
    } else {
        (ESCAPED_ALTERNATION_LEN, EncodingType::RegexEncoded)
    }
}

// Metadata escaping: cookie-safe output (which implies header-safe).

pub fn metadata_escape_len(b: u8, mode: RegexMode) -> (usize, EncodingType) {
    assert_eq!(
        mode,
        RegexMode::NoEscape,
        "metadata escaping does not support regex escaping"
    );

    if classify(b).is_cookie_safe() {
        (1, EncodingType::NotEncoded)
    } else {
        (PERCENT_LEN, EncodingType::PercentEncoded)
    }
}

pub fn metadata_escape(out: &mut String, b: u8, escape_regex: bool) {
    assert!(
        !escape_regex,
        "metadata escaping does not support regex escaping"
    );

    if classify(b).is_cookie_safe() {
        out.push(char::from(b));
    } else {
        push_percent_encoded(out, b);
    }
}

// Cookie matchers are always regular expressions.

pub fn cookie_matcher_len(b: u8, mode: RegexMode) -> (usize, EncodingType) {
    assert_eq!(
        mode,
        RegexMode::AlwaysEscape,
        "cookie value escaping always performs regex escaping"
    );

    let f = classify(b);

    if !f.is_cookie_safe() {
        return (PERCENT_LEN, EncodingType::PercentEncoded);
    }

    if !f.is_query_safe() {
        return alternation_len(f.is_regex_safe());
    }

    if !f.is_regex_safe() {
        return (ESCAPED_LEN, EncodingType::RegexEncoded);
    }

    (1, EncodingType::NotEncoded)
}

pub fn cookie_matcher_escape(out: &mut String, b: u8, escape_regex: bool) {
    assert!(
        escape_regex,
        "cookie value escaping always performs regex escaping"
    );

    let f = classify(b);

    if !f.is_cookie_safe() {
        push_percent_encoded(out, b);
    } else if !f.is_query_safe() {
        push_alternation(out, b, !f.is_regex_safe());
    } else if !f.is_regex_safe() {
        out.push('\\');
        out.push(char::from(b));
    } else {
        out.push(char::from(b));
    }
}

// Header matchers only become regexes when some byte has more than one
// legal encoding.

pub fn header_matcher_len(b: u8, mode: RegexMode) -> (usize, EncodingType) {
    assert_ne!(
        mode,
        RegexMode::NoEscape,
        "header matchers may require regex escapes"
    );

    let f = classify(b);

    if !f.is_header_safe() {
        return (PERCENT_LEN, EncodingType::PercentEncoded);
    }

    if !f.is_cookie_safe() || !f.is_query_safe() {
        return alternation_len(f.is_regex_safe());
    }

    if !f.is_regex_safe() && mode == RegexMode::AlwaysEscape {
        return (ESCAPED_LEN, EncodingType::RegexEncoded);
    }

    (1, EncodingType::NotEncoded)
}

pub fn header_matcher_escape(out: &mut String, b: u8, escape_regex: bool) {
    let f = classify(b);

    if !f.is_header_safe() {
        push_percent_encoded(out, b);
    } else if !f.is_cookie_safe() || !f.is_query_safe() {
        assert!(
            escape_regex,
            "header matcher regex output disabled, but required"
        );
        push_alternation(out, b, !f.is_regex_safe());
    } else if !f.is_regex_safe() && escape_regex {
        // A lone `.` stays literal unless some other byte made this a regex.
        out.push('\\');
        out.push(char::from(b));
    } else {
        out.push(char::from(b));
    }
}

// Query matchers are literal and match only the fully escaped value.

pub fn query_matcher_len(b: u8, mode: RegexMode) -> (usize, EncodingType) {
    assert_eq!(
        mode,
        RegexMode::NoEscape,
        "query matchers are never regexes"
    );

    let f = classify(b);

    if f.is_query_safe() && f.is_cookie_safe() {
        (1, EncodingType::NotEncoded)
    } else {
        (PERCENT_LEN, EncodingType::PercentEncoded)
    }
}

pub fn query_matcher_escape(out: &mut String, b: u8, escape_regex: bool) {
    assert!(!escape_regex, "query matchers are never regexes");

    let f = classify(b);

    if f.is_query_safe() && f.is_cookie_safe() {
        out.push(char::from(b));
    } else {
        push_percent_encoded(out, b);
    }
}
