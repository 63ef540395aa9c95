/// Safety properties of a single byte value.
///
/// Each bit records whether the byte may appear unescaped in a given
/// context. The four properties are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteFlags(u8);

impl ByteFlags {
    const HEADER_SAFE: u8 = 1 << 0;
    const COOKIE_SAFE: u8 = 1 << 1;
    const QUERY_SAFE: u8 = 1 << 2;
    const REGEX_SAFE: u8 = 1 << 3;

    const SAFE: u8 = Self::HEADER_SAFE | Self::COOKIE_SAFE | Self::QUERY_SAFE | Self::REGEX_SAFE;

    /// Legal in an HTTP header value
    pub const fn is_header_safe(self) -> bool {
        self.0 & Self::HEADER_SAFE != 0
    }

    /// Legal in a cookie value (RFC 6265 section 4.1), and not `%`
    pub const fn is_cookie_safe(self) -> bool {
        self.0 & Self::COOKIE_SAFE != 0
    }

    /// Unreserved per RFC 3986
    pub const fn is_query_safe(self) -> bool {
        self.0 & Self::QUERY_SAFE != 0
    }

    /// Matches itself when used literally inside a regular expression
    pub const fn is_regex_safe(self) -> bool {
        self.0 & Self::REGEX_SAFE != 0
    }
}

/// Bytes that are legal in headers but not in cookie values.
/// `%` is included because it is our escape character.
const COOKIE_UNSAFE: &[u8] = b" \"%,;\\~";

/// Regex metacharacters that must be backslash-escaped to match literally.
const REGEX_UNSAFE: &[u8] = b"\\.+*?()|[]{}^$";

const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}

/// Classification for every byte value, built at compile time.
const BYTE_FLAGS: [ByteFlags; 256] = {
    let mut table = [ByteFlags(ByteFlags::SAFE); 256];

    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        let mut flags = ByteFlags::SAFE;

        // Control characters and 8-bit bytes are not legal in headers,
        // and therefore not in cookies either.
        if b < 0x20 || b >= 0x7F {
            flags &= !(ByteFlags::HEADER_SAFE | ByteFlags::COOKIE_SAFE);
        }

        if !is_unreserved(b) {
            flags &= !ByteFlags::QUERY_SAFE;
        }

        table[i] = ByteFlags(flags);
        i += 1;
    }

    let mut i = 0;
    while i < COOKIE_UNSAFE.len() {
        let idx = COOKIE_UNSAFE[i] as usize;
        table[idx] = ByteFlags(table[idx].0 & !ByteFlags::COOKIE_SAFE);
        i += 1;
    }

    let mut i = 0;
    while i < REGEX_UNSAFE.len() {
        let idx = REGEX_UNSAFE[i] as usize;
        table[idx] = ByteFlags(table[idx].0 & !ByteFlags::REGEX_SAFE);
        i += 1;
    }

    table
};

/// Look up the safety properties of a byte (direct table lookup)
#[inline]
pub fn classify(b: u8) -> ByteFlags {
    BYTE_FLAGS[b as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_and_high_bytes() {
        for b in (0x00..0x20).chain(0x7F..=0xFF) {
            let f = classify(b);
            assert!(!f.is_header_safe(), "{b:#04x} should not be header-safe");
            assert!(!f.is_cookie_safe(), "{b:#04x} should not be cookie-safe");
            assert!(!f.is_query_safe(), "{b:#04x} should not be query-safe");
            assert!(f.is_regex_safe(), "{b:#04x} should be regex-safe");
        }
    }

    #[test]
    fn test_cookie_unsafe_punctuation() {
        for &b in b" \"%,;\\~" {
            let f = classify(b);
            assert!(f.is_header_safe());
            assert!(!f.is_cookie_safe(), "{:?} should not be cookie-safe", b as char);
        }
        assert!(classify(b'=').is_cookie_safe());
        assert!(classify(b'/').is_cookie_safe());
    }

    #[test]
    fn test_query_safe_is_unreserved() {
        let query_safe: usize = (0..=255u8).filter(|&b| classify(b).is_query_safe()).count();
        // 26 + 26 + 10 + 4
        assert_eq!(query_safe, 66);
        assert!(classify(b'~').is_query_safe());
        assert!(!classify(b'~').is_cookie_safe());
        assert!(!classify(b'=').is_query_safe());
        assert!(!classify(b'/').is_query_safe());
    }

    #[test]
    fn test_regex_metacharacters() {
        for &b in b"\\.+*?()|[]{}^$" {
            assert!(!classify(b).is_regex_safe(), "{:?}", b as char);
        }
        for &b in b"aZ9-_~=/:@!&'#<>`" {
            assert!(classify(b).is_regex_safe(), "{:?}", b as char);
        }
    }

    #[test]
    fn test_alphanumerics_fully_safe() {
        for b in (b'a'..=b'z').chain(b'A'..=b'Z').chain(b'0'..=b'9') {
            let f = classify(b);
            assert!(f.is_header_safe() && f.is_cookie_safe() && f.is_query_safe() && f.is_regex_safe());
        }
    }
}
