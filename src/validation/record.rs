//! Whole-record validation, run once at submit time

use super::error::ValidationError;
use super::rules::check_field;
use crate::state::{FieldName, FormRecord};
use std::fmt;

/// One rule violation, tagged with the field it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: FieldName,
    pub error: ValidationError,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.key(), self.error.message)
    }
}

/// Validate every field of the snapshot, empty values included.
///
/// Returns every violation of every field, in field order and then rule
/// priority order.
pub fn validate_record(record: &FormRecord) -> Result<(), Vec<FieldIssue>> {
    let issues: Vec<FieldIssue> = FieldName::ALL
        .iter()
        .flat_map(|&field| {
            check_field(field, record.get(field))
                .into_iter()
                .map(move |error| FieldIssue { field, error })
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
