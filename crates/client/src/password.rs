//! Client-side password format validation.
//!
//! Mirrors the signup form's rules so failures surface before a network
//! round-trip; the backend enforces the same set on its side.

use serde::Serialize;

const MIN_LENGTH: usize = 8;

/// Accepted special characters.
const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Outcome of checking one candidate password.
///
/// `errors` lists every failed rule — checking does not stop at the first
/// failure — and `message` is the joined human-readable summary.
#[derive(Clone, Debug, Serialize)]
pub struct PasswordValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub message: String,
}

/// Check a password against the signup rules: minimum length, an uppercase
/// letter, a lowercase letter, a digit and a special character, all
/// required.
pub fn validate_password(password: &str) -> PasswordValidation {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_LENGTH {
        errors.push("at least 8 characters".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("an uppercase letter".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("a lowercase letter".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("a digit".to_owned());
    }
    if !password.chars().any(|c| SYMBOLS.contains(c)) {
        errors.push("a special character".to_owned());
    }

    let valid = errors.is_empty();
    let message = if valid {
        "Password meets all requirements.".to_owned()
    } else {
        format!("Password must contain: {}", errors.join(", "))
    };

    PasswordValidation {
        valid,
        errors,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_password_meeting_every_rule() {
        let result = validate_password("Abcdef1!");
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.message, "Password meets all requirements.");
    }

    #[test]
    fn rejects_short_passwords() {
        let result = validate_password("Ab1!xyz");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["at least 8 characters"]);
    }

    #[test]
    fn rejects_missing_uppercase() {
        let result = validate_password("abcdef1!");
        assert_eq!(result.errors, vec!["an uppercase letter"]);
    }

    #[test]
    fn rejects_missing_lowercase() {
        let result = validate_password("ABCDEF1!");
        assert_eq!(result.errors, vec!["a lowercase letter"]);
    }

    #[test]
    fn rejects_missing_digit() {
        let result = validate_password("Abcdefg!");
        assert_eq!(result.errors, vec!["a digit"]);
    }

    #[test]
    fn rejects_missing_symbol() {
        let result = validate_password("Abcdefg1");
        assert_eq!(result.errors, vec!["a special character"]);
    }

    #[test]
    fn accumulates_every_failing_rule() {
        let result = validate_password("abc");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "at least 8 characters",
                "an uppercase letter",
                "a digit",
                "a special character",
            ]
        );
        assert_eq!(
            result.message,
            "Password must contain: at least 8 characters, an uppercase letter, a digit, a special character"
        );
    }

    #[test]
    fn empty_password_fails_all_rules() {
        let result = validate_password("");
        assert_eq!(result.errors.len(), 5);
    }

    #[test]
    fn every_listed_symbol_satisfies_the_symbol_rule() {
        for symbol in SYMBOLS.chars() {
            let candidate = format!("Abcdef1{symbol}");
            assert!(
                validate_password(&candidate).valid,
                "symbol {symbol:?} was rejected"
            );
        }
    }

    #[test]
    fn unlisted_symbols_do_not_count() {
        // Underscore and dash are not in the accepted set.
        let result = validate_password("Abcdef1_-");
        assert_eq!(result.errors, vec!["a special character"]);
    }
}
