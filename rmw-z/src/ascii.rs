// Copyright 2025 ZettaScale Technology
//
// Locale independent byte classification for ROS 2 names

/// Separator between the tokens of a fully qualified name.
pub const SEPARATOR: u8 = b'/';

/// Whether `c` is `0-9`, `A-Z` or `a-z`.
///
/// Evaluated with plain range comparisons so the answer never depends on the
/// process locale.
#[inline]
pub const fn is_alnum_no_locale(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

#[inline]
pub const fn is_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9')
}

/// Characters allowed inside a single name token.
#[inline]
pub const fn is_name_char(c: u8) -> bool {
    is_alnum_no_locale(c) || c == b'_'
}

#[inline]
pub const fn is_separator(c: u8) -> bool {
    c == SEPARATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alnum_matches_ascii_ranges() {
        for c in 0..=u8::MAX {
            assert_eq!(
                is_alnum_no_locale(c),
                c.is_ascii_alphanumeric(),
                "byte {c:#04x} misclassified"
            );
        }
    }

    #[test]
    fn test_high_bytes_are_rejected() {
        // Latin-1 letters are alphabetic in some locales.
        for c in [0xC0u8, 0xE9, 0xFF, 0xB5] {
            assert!(!is_alnum_no_locale(c));
            assert!(!is_name_char(c));
        }
    }

    #[test]
    fn test_name_char() {
        assert!(is_name_char(b'_'));
        assert!(is_name_char(b'z'));
        assert!(!is_name_char(b'/'));
        assert!(!is_name_char(b'-'));
        assert!(!is_name_char(b' '));
        assert!(!is_name_char(0));
    }

    #[test]
    fn test_digit_and_separator() {
        assert!(is_digit(b'0') && is_digit(b'9'));
        assert!(!is_digit(b'a'));
        assert!(is_separator(b'/'));
        assert!(!is_separator(b'\\'));
    }
}
