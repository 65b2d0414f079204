//! Input validation rules for contractor registration fields.
//!
//! These mirror the request-schema rules of the public API: a CNPJ is exactly
//! 14 digits, a password is 8-16 characters from a restricted charset. The
//! regexes are compiled once and used directly by the DTO validators.

use once_cell::sync::Lazy;
use regex::Regex;

/// CNPJ: exactly 14 digits, no punctuation
pub static CNPJ_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{14}$").unwrap());

/// Password: 8-16 characters, alphanumerics plus `!@#$%&*`
pub static PASSWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9!@#$%&*]{8,16}$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cnpj() {
        assert!(CNPJ_RE.is_match("12345678901234"));
    }

    #[test]
    fn test_cnpj_rejects_wrong_length() {
        assert!(!CNPJ_RE.is_match("1234567890123"));
        assert!(!CNPJ_RE.is_match("123456789012345"));
    }

    #[test]
    fn test_cnpj_rejects_non_digits() {
        assert!(!CNPJ_RE.is_match("12.345.678/0001-34"));
        assert!(!CNPJ_RE.is_match("1234567890123a"));
    }

    #[test]
    fn test_valid_password() {
        assert!(PASSWORD_RE.is_match("Abc12345"));
        assert!(PASSWORD_RE.is_match("Str0ng!Pass#16c"));
    }

    #[test]
    fn test_password_rejects_bad_length() {
        assert!(!PASSWORD_RE.is_match("Abc1234"));
        assert!(!PASSWORD_RE.is_match("Abc12345Abc123456"));
    }

    #[test]
    fn test_password_rejects_forbidden_chars() {
        assert!(!PASSWORD_RE.is_match("Abc 12345"));
        assert!(!PASSWORD_RE.is_match("Abc12345é"));
    }
}
