//! Validation error value

use thiserror::Error;

/// Which rule a value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    TooShort,
    TooLong,
    Required,
    InvalidEmail,
    EmailDomainTypo,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
}

/// A single violated rule and the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
