//! Stable identifiers linking a field's label, input, description and message

use uuid::Uuid;

/// Identifiers for one form item, generated once at form mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    id: String,
}

/// Attributes recomputed for the input whenever error presence changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlAttributes {
    pub id: String,
    pub described_by: Vec<String>,
    pub invalid: bool,
}

impl FieldIds {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
        }
    }

    pub fn form_item_id(&self) -> String {
        format!("{}-form-item", self.id)
    }

    pub fn description_id(&self) -> String {
        format!("{}-form-item-description", self.id)
    }

    pub fn message_id(&self) -> String {
        format!("{}-form-item-message", self.id)
    }

    /// Attributes for the input control given the current error presence
    pub fn control(&self, has_error: bool) -> ControlAttributes {
        let mut described_by = vec![self.description_id()];
        if has_error {
            described_by.push(self.message_id());
        }
        ControlAttributes {
            id: self.form_item_id(),
            described_by,
            invalid: has_error,
        }
    }
}

impl Default for FieldIds {
    fn default() -> Self {
        Self::new()
    }
}
