//! Field adapter: binds one field's value and events to its validation rules

use super::record::FieldName;
use crate::validation::{validate_field, ValidationError};

/// Observable lifecycle of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Never edited or left
    Pristine,
    /// Left at least once, currently empty and without errors
    Touched,
    Valid,
    Invalid,
}

/// Live state of one form field
#[derive(Debug, Clone)]
pub struct FieldState {
    pub name: FieldName,
    pub value: String,
    /// Zero or one entry during live editing
    pub errors: Vec<ValidationError>,
    pub touched: bool,
    pub validating: bool,
}

impl FieldState {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
            errors: Vec::new(),
            touched: false,
            validating: false,
        }
    }

    /// Replace the value and re-run the field's rules
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.revalidate();
    }

    /// Mark the field as touched and re-run the field's rules
    pub fn on_blur(&mut self) {
        self.touched = true;
        self.revalidate();
    }

    /// Append a character to the value
    pub fn push_char(&mut self, c: char) {
        let mut value = std::mem::take(&mut self.value);
        value.push(c);
        self.on_change(value);
    }

    /// Remove the last character from the value
    pub fn pop_char(&mut self) {
        let mut value = std::mem::take(&mut self.value);
        value.pop();
        self.on_change(value);
    }

    /// Clear the value
    pub fn clear(&mut self) {
        self.on_change(String::new());
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn status(&self) -> FieldStatus {
        if self.has_error() {
            FieldStatus::Invalid
        } else if !self.value.is_empty() {
            FieldStatus::Valid
        } else if self.touched {
            FieldStatus::Touched
        } else {
            FieldStatus::Pristine
        }
    }

    fn revalidate(&mut self) {
        self.validating = true;
        self.errors = validate_field(self.name, &self.value).into_iter().collect();
        self.validating = false;
    }
}
