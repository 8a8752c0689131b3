//! Mobile phone utilities (Uruguayan `09X XXX XXX` numbers)

use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::{digits_only, strip_separators};

/// Number of digits in a mobile phone number
pub const MOBILE_PHONE_LENGTH: usize = 9;

/// Required prefix of every mobile phone number
pub const MOBILE_PHONE_PREFIX: &str = "09";

// Uruguayan mobile number: 09 followed by 7 digits
static MOBILE_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^09[0-9]{7}$").unwrap()
});

/// Check if a phone number is a valid mobile number
///
/// Whitespace and dashes are ignored, so both `098765432` and
/// `098 765 432` are accepted.
pub fn is_valid_mobile_phone(phone: &str) -> bool {
    MOBILE_PHONE_REGEX.is_match(&strip_separators(phone))
}

/// Format a phone number for display as `XXX XXX XXX`
///
/// Input that does not have exactly 9 characters once separators are removed
/// is returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let clean = strip_separators(phone);
    let chars: Vec<char> = clean.chars().collect();
    if chars.len() != MOBILE_PHONE_LENGTH {
        return phone.to_string();
    }

    let group = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    format!("{} {} {}", group(0..3), group(3..6), group(6..9))
}

/// Mask a formatted phone number (e.g., `098 123 456` -> `098 *** 456`)
///
/// Anything that is not exactly three space-separated groups is returned unchanged.
pub fn mask_phone(formatted: &str) -> String {
    let parts: Vec<&str> = formatted.split(' ').collect();
    if parts.len() != 3 {
        return formatted.to_string();
    }
    format!("{} *** {}", parts[0], parts[2])
}

/// Normalize raw phone input the way the phone field does while typing
///
/// Keeps digits only, forces the `09` prefix, truncates to 9 digits and
/// returns the display form.
pub fn sanitize_phone_input(raw: &str) -> String {
    let mut value = digits_only(raw);

    if !value.is_empty() && !value.starts_with(MOBILE_PHONE_PREFIX) {
        let rest = value.strip_prefix('0').unwrap_or(&value);
        value = format!("{}{}", MOBILE_PHONE_PREFIX, rest);
    }

    value.truncate(MOBILE_PHONE_LENGTH);
    format_phone(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_mobile_phone() {
        assert!(is_valid_mobile_phone("098765432"));
        assert!(is_valid_mobile_phone("098 765 432"));
        assert!(is_valid_mobile_phone("098-765-432"));
        assert!(!is_valid_mobile_phone("012345678")); // Wrong prefix
        assert!(!is_valid_mobile_phone("09876543"));  // Too short
        assert!(!is_valid_mobile_phone("0987654321")); // Too long
        assert!(!is_valid_mobile_phone("09876543a"));
        assert!(!is_valid_mobile_phone("09876543\u{0661}")); // Non-ASCII digit
        assert!(!is_valid_mobile_phone(""));
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("098765432"), "098 765 432");
        assert_eq!(format_phone("098 765 432"), "098 765 432");
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_format_phone_multibyte_input_is_unchanged_or_grouped_by_char() {
        assert_eq!(format_phone("ñññ"), "ñññ");
        assert_eq!(format_phone("ñññññññññ"), "ñññ ñññ ñññ");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("098 765 432"), "098 *** 432");
        assert_eq!(mask_phone("098765432"), "098765432");
        assert_eq!(mask_phone("098 765"), "098 765");
        assert_eq!(mask_phone("098  765 432"), "098  765 432");
    }

    #[test]
    fn test_mask_phone_is_idempotent_on_three_groups() {
        let once = mask_phone("098 765 432");
        assert_eq!(mask_phone(&once), once);
    }

    #[test]
    fn test_sanitize_phone_input() {
        assert_eq!(sanitize_phone_input("098765432"), "098 765 432");
        assert_eq!(sanitize_phone_input("8765432"), "098 765 432");
        assert_eq!(sanitize_phone_input("98765432"), "099 876 543");
        assert_eq!(sanitize_phone_input("0 98-765-432"), "098 765 432");
        assert_eq!(sanitize_phone_input("0987654321111"), "098 765 432");
        assert_eq!(sanitize_phone_input("5"), "095");
        assert_eq!(sanitize_phone_input("0"), "09");
        assert_eq!(sanitize_phone_input("abc"), "");
    }
}
