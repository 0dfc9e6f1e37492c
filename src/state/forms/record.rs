//! Account record and field naming

use serde::{Deserialize, Serialize};

/// The three fields of the account form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Email,
    Password,
}

impl FieldName {
    /// All fields in display and validation order
    pub const ALL: [FieldName; 3] = [FieldName::Username, FieldName::Email, FieldName::Password];

    /// Stable lowercase key, used as the error path in notifications
    pub fn key(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "Enter your username",
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
        }
    }

    /// Static help text shown under the input
    pub fn description(&self) -> &'static str {
        match self {
            Self::Username => "Your unique username for the platform",
            Self::Email => "We will never share your email with anyone",
            Self::Password => "Must be at least 8 characters with mixed case and numbers",
        }
    }

    /// Whether the input should be masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }

    /// Position of this field in [`FieldName::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Username => 0,
            Self::Email => 1,
            Self::Password => 2,
        }
    }
}

/// Snapshot of the form values handed to validation and submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl FormRecord {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    /// Two-space indented JSON echo of the record
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
