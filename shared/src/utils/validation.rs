//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Number of digits in a national ID (Cédula de Identidad)
pub const NATIONAL_ID_LENGTH: usize = 8;

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

static NATIONAL_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{8}$").unwrap()
});

static CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{6}$").unwrap()
});

/// Remove whitespace and dashes
pub fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Keep ASCII digits only
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check if a national ID is valid (8 digits, whitespace and dashes ignored)
pub fn is_valid_national_id(id: &str) -> bool {
    NATIONAL_ID_REGEX.is_match(&strip_separators(id))
}

/// Normalize raw national ID input: digits only, at most 8
pub fn sanitize_id_input(raw: &str) -> String {
    let mut value = digits_only(raw);
    value.truncate(NATIONAL_ID_LENGTH);
    value
}

/// Check if a verification code has the expected shape (exactly 6 digits)
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Normalize raw code input: digits only, at most 6
pub fn sanitize_code_input(raw: &str) -> String {
    let mut value = digits_only(raw);
    value.truncate(CODE_LENGTH);
    value
}

/// Validation error with field-level details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) {
        self.add(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// Trait for types that can be validated
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_national_id() {
        assert!(is_valid_national_id("12345678"));
        assert!(is_valid_national_id("1234 5678"));
        assert!(is_valid_national_id(" 1234-5678 "));
        assert!(!is_valid_national_id("1234567"));
        assert!(!is_valid_national_id("123456789"));
        assert!(!is_valid_national_id("1234567a"));
        assert!(!is_valid_national_id(""));
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("123456"));
        assert!(is_valid_code("000000"));
        assert!(!is_valid_code("12345"));
        assert!(!is_valid_code("1234567"));
        assert!(!is_valid_code("abcdef"));
        assert!(!is_valid_code("123 456"));
    }

    #[test]
    fn test_sanitizers() {
        assert_eq!(sanitize_id_input("1.234.567-8"), "12345678");
        assert_eq!(sanitize_id_input("123456789"), "12345678");
        assert_eq!(sanitize_code_input("12a34b56c7"), "123456");
        assert_eq!(digits_only("ab"), "");
        assert_eq!(strip_separators(" 09-87 "), "0987");
    }

    #[test]
    fn test_validation_errors_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add_error("username", "required", "REQUIRED");
        errors.add_error("username", "too long", "TOO_LONG");
        errors.add_error("password", "required", "REQUIRED");

        assert!(errors.has_errors());
        assert!(errors.has_field("password"));
        assert!(!errors.has_field("email"));

        assert_eq!(errors.errors().len(), 3);
        assert_eq!(errors.to_string(), "username, username, password");
    }

    #[test]
    fn test_length_between_counts_chars() {
        assert!(validators::length_between("ñandú", 1, 5));
        assert!(!validators::length_between("", 1, 5));
        assert!(!validators::not_empty("   "));
    }
}
