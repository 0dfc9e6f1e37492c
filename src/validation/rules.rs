//! Per-field validation rules
//!
//! Each `check_*` function returns every violated rule in priority order.
//! Live editing only ever shows the first one; see [`validate_field`].

use super::error::{ValidationError, ValidationErrorKind};
use crate::state::FieldName;
use regex::Regex;
use std::sync::LazyLock;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 8;

pub const MSG_USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const MSG_USERNAME_TOO_LONG: &str = "Username must not exceed 20 characters";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MSG_EMAIL_DOMAIN_TYPO: &str = "Did you mean to use a different email domain?";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const MSG_PASSWORD_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const MSG_PASSWORD_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const MSG_PASSWORD_DIGIT: &str = "Password must contain at least one number";

/// Misspelled domain and the domain it was probably meant to be
const DOMAIN_TYPOS: &[(&str, &str)] = &[
    ("gmail.co", "gmail.com"),
    ("gmail.cm", "gmail.com"),
    ("gamil.com", "gmail.com"),
    ("gmal.com", "gmail.com"),
    ("yahoo.co", "yahoo.com"),
    ("yaho.com", "yahoo.com"),
    ("hotmial.com", "hotmail.com"),
    ("hotmail.co", "hotmail.com"),
    ("outloo.com", "outlook.com"),
    ("outlook.co", "outlook.com"),
];

/// General email shape: a restricted local part not ending in `.`, then
/// dotted labels starting with an alphanumeric and an alphabetic TLD.
/// A leading `.` and `..` are rejected separately in [`is_email_shaped`].
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email shape pattern is valid")
});

/// Quoted or dot-atom local part, then an IPv4 literal or a dotted host with
/// an alphabetic TLD of at least two letters.
static RFC5322_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

/// Live validation for one field.
///
/// An empty value is never an error here; emptiness is enforced only by the
/// whole-record check at submit time.
pub fn validate_field(field: FieldName, value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    check_field(field, value).into_iter().next()
}

/// All rule violations for one field value, empty values included
pub fn check_field(field: FieldName, value: &str) -> Vec<ValidationError> {
    match field {
        FieldName::Username => check_username(value),
        FieldName::Email => check_email(value),
        FieldName::Password => check_password(value),
    }
}

pub fn check_username(value: &str) -> Vec<ValidationError> {
    let len = value.chars().count();
    let mut errors = Vec::new();
    if len < USERNAME_MIN_LEN {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooShort,
            MSG_USERNAME_TOO_SHORT,
        ));
    }
    if len > USERNAME_MAX_LEN {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooLong,
            MSG_USERNAME_TOO_LONG,
        ));
    }
    errors
}

pub fn check_email(value: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if value.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::Required,
            MSG_EMAIL_REQUIRED,
        ));
    }
    if !is_email_shaped(value) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidEmail,
            MSG_EMAIL_INVALID,
        ));
    }
    if !RFC5322_EMAIL.is_match(value) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidEmail,
            MSG_EMAIL_INVALID,
        ));
    }
    if let Some(suggestion) = suggested_domain(value) {
        tracing::debug!(suggestion, "email domain looks like a typo");
        errors.push(ValidationError::new(
            ValidationErrorKind::EmailDomainTypo,
            MSG_EMAIL_DOMAIN_TYPO,
        ));
    }
    errors
}

pub fn check_password(value: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if value.chars().count() < PASSWORD_MIN_LEN {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooShort,
            MSG_PASSWORD_TOO_SHORT,
        ));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingUppercase,
            MSG_PASSWORD_UPPERCASE,
        ));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingLowercase,
            MSG_PASSWORD_LOWERCASE,
        ));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingDigit,
            MSG_PASSWORD_DIGIT,
        ));
    }
    errors
}

fn is_email_shaped(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_SHAPE.is_match(value)
}

/// Look up the domain segment (text after the first `@`, up to the next `@`)
/// in the typo table.
pub fn suggested_domain(email: &str) -> Option<&'static str> {
    let domain = email.split('@').nth(1)?;
    DOMAIN_TYPOS
        .iter()
        .find(|(typo, _)| *typo == domain)
        .map(|(_, fixed)| *fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_message(field: FieldName, value: &str) -> Option<String> {
        validate_field(field, value).map(|e| e.message)
    }

    mod username {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_values_are_rejected() {
            for value in ["a", "ab", "é"] {
                assert_eq!(
                    first_message(FieldName::Username, value).as_deref(),
                    Some(MSG_USERNAME_TOO_SHORT),
                    "value {value:?}"
                );
            }
        }

        #[test]
        fn test_long_values_are_rejected() {
            let value = "a".repeat(21);
            assert_eq!(
                first_message(FieldName::Username, &value).as_deref(),
                Some(MSG_USERNAME_TOO_LONG)
            );
        }

        #[test]
        fn test_lengths_three_through_twenty_pass() {
            for len in USERNAME_MIN_LEN..=USERNAME_MAX_LEN {
                let value = "x".repeat(len);
                assert!(validate_field(FieldName::Username, &value).is_none());
            }
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // 3 characters, 6 bytes
            assert!(validate_field(FieldName::Username, "äöü").is_none());
        }

        #[test]
        fn test_empty_is_not_a_live_error() {
            assert!(validate_field(FieldName::Username, "").is_none());
        }

        #[test]
        fn test_empty_fails_full_check() {
            let errors = check_username("");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::TooShort);
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_address_passes() {
            assert!(validate_field(FieldName::Email, "a@gmail.com").is_none());
            assert!(validate_field(FieldName::Email, "first.last@example.org").is_none());
        }

        #[test]
        fn test_domain_typo_is_flagged() {
            let error = validate_field(FieldName::Email, "a@gmail.co").unwrap();
            assert_eq!(error.kind, ValidationErrorKind::EmailDomainTypo);
            assert_eq!(error.message, MSG_EMAIL_DOMAIN_TYPO);
        }

        #[test]
        fn test_every_typo_in_table_is_flagged() {
            for (typo, _) in DOMAIN_TYPOS {
                let email = format!("someone@{typo}");
                let kinds: Vec<_> = check_email(&email).into_iter().map(|e| e.kind).collect();
                assert!(
                    kinds.contains(&ValidationErrorKind::EmailDomainTypo),
                    "{email} not flagged"
                );
            }
        }

        #[test]
        fn test_typo_lookup_is_exact() {
            assert_eq!(suggested_domain("a@gmail.co"), Some("gmail.com"));
            assert_eq!(suggested_domain("a@mail.gmail.co"), None);
            assert_eq!(suggested_domain("a@GMAIL.CO"), None);
            assert_eq!(suggested_domain("no-at-sign"), None);
        }

        #[test]
        fn test_missing_at_sign_is_invalid() {
            assert_eq!(
                first_message(FieldName::Email, "not-an-email").as_deref(),
                Some(MSG_EMAIL_INVALID)
            );
        }

        #[test]
        fn test_disallowed_local_parts_are_invalid() {
            for value in [
                "#@example.com",
                "\"a b\"@example.com",
                "é@example.com",
                "a!b@example.com",
                ".a@example.com",
                "a..b@example.com",
                "a.@example.com",
            ] {
                assert_eq!(
                    first_message(FieldName::Email, value).as_deref(),
                    Some(MSG_EMAIL_INVALID),
                    "value {value:?}"
                );
            }
        }

        #[test]
        fn test_allowed_local_part_characters_pass() {
            for value in ["o'brien@example.com", "a+tag@example.com", "a_b-c@sub.example.io"] {
                assert!(check_email(value).is_empty(), "value {value:?}");
            }
        }

        #[test]
        fn test_domain_label_must_start_alphanumeric() {
            assert_eq!(
                first_message(FieldName::Email, "a@-example.com").as_deref(),
                Some(MSG_EMAIL_INVALID)
            );
        }

        #[test]
        fn test_missing_tld_is_invalid() {
            assert_eq!(
                first_message(FieldName::Email, "user@localhost").as_deref(),
                Some(MSG_EMAIL_INVALID)
            );
        }

        #[test]
        fn test_empty_fails_full_check_with_required_first() {
            let errors = check_email("");
            assert!(!errors.is_empty());
            assert_eq!(errors[0].kind, ValidationErrorKind::Required);
            assert_eq!(errors[0].message, MSG_EMAIL_REQUIRED);
        }

        #[test]
        fn test_empty_is_not_a_live_error() {
            assert!(validate_field(FieldName::Email, "").is_none());
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_uppercase() {
            assert_eq!(
                first_message(FieldName::Password, "abcdefg1").as_deref(),
                Some(MSG_PASSWORD_UPPERCASE)
            );
        }

        #[test]
        fn test_missing_lowercase() {
            assert_eq!(
                first_message(FieldName::Password, "ABCDEFG1").as_deref(),
                Some(MSG_PASSWORD_LOWERCASE)
            );
        }

        #[test]
        fn test_missing_digit() {
            assert_eq!(
                first_message(FieldName::Password, "Abcdefgh").as_deref(),
                Some(MSG_PASSWORD_DIGIT)
            );
        }

        #[test]
        fn test_length_is_reported_before_missing_digit() {
            let errors = check_password("Abcdefg");
            let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
            assert_eq!(
                kinds,
                vec![ValidationErrorKind::TooShort, ValidationErrorKind::MissingDigit]
            );
            assert_eq!(
                first_message(FieldName::Password, "Abcdefg").as_deref(),
                Some(MSG_PASSWORD_TOO_SHORT)
            );
        }

        #[test]
        fn test_valid_password_passes() {
            assert!(validate_field(FieldName::Password, "Abcdefg1").is_none());
        }

        #[test]
        fn test_non_ascii_letters_do_not_count_as_cases() {
            let kinds: Vec<_> = check_password("ÄÖÜßäöü1")
                .into_iter()
                .map(|e| e.kind)
                .collect();
            assert!(kinds.contains(&ValidationErrorKind::MissingUppercase));
            assert!(kinds.contains(&ValidationErrorKind::MissingLowercase));
        }

        #[test]
        fn test_empty_reports_every_rule() {
            assert_eq!(check_password("").len(), 4);
        }
    }
}
