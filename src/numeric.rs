//! Permissive integer parsing for free-text numeric fields.
//!
//! Pure functions, no I/O.
//!
//! The form accepts whatever the user typed and reads the longest leading
//! integer out of it: "12abc" is 12, "12.9" is 12, "abc" is nothing.
//! A strict whole-string parse would reject inputs the form has always
//! accepted, so the two are not interchangeable.

/// Parse the leading base-10 integer of `text`.
///
/// Leading whitespace is skipped, then an optional single `+`/`-` sign,
/// then one or more ASCII digits. Parsing stops at the first non-digit.
/// Returns `None` when no digit follows the optional sign.
///
/// Magnitudes beyond `i64` saturate to `i64::MAX` / `i64::MIN`, so a
/// very long digit string still reads as "very large" rather than
/// "not a number".
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();

    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digit_len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return None;
    }

    let value = digits[..digit_len].bytes().fold(0i64, |acc, b| {
        let d = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });

    Some(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("22"), Some(22));
        assert_eq!(parse_leading_int("120"), Some(120));
    }

    #[test]
    fn signs() {
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-0"), Some(0));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("1e5"), Some(1));
        assert_eq!(parse_leading_int("0x1A"), Some(0));
        assert_eq!(parse_leading_int("25 years"), Some(25));
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(parse_leading_int("   42"), Some(42));
        assert_eq!(parse_leading_int("\t-3"), Some(-3));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("+x"), None);
        assert_eq!(parse_leading_int(".5"), None);
        assert_eq!(parse_leading_int("a12"), None);
    }

    #[test]
    fn sign_must_touch_digits() {
        assert_eq!(parse_leading_int("- 5"), None);
        assert_eq!(parse_leading_int("--5"), None);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999999"), Some(i64::MIN));
    }

    proptest! {
        #[test]
        fn any_i64_reads_back(n in any::<i64>()) {
            prop_assert_eq!(parse_leading_int(&n.to_string()), Some(n));
        }

        #[test]
        fn suffix_after_non_digit_never_matters(n in 0i64..100_000, tail in "[a-zA-Z.][ -~]{0,8}") {
            let text = format!("{n}{tail}");
            prop_assert_eq!(parse_leading_int(&text), Some(n));
        }

        #[test]
        fn text_without_digits_is_none(s in "[a-zA-Z .,!?]{0,12}") {
            prop_assert_eq!(parse_leading_int(&s), None);
        }
    }
}
