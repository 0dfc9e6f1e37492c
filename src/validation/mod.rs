//! Validation rules for the account form
//!
//! - `rules`: per-field rules and live validation
//! - `record`: whole-record validation used at submit time
//! - `error`: the tagged error value both produce

mod error;
mod record;
mod rules;

pub use error::{ValidationError, ValidationErrorKind};
pub use record::{validate_record, FieldIssue};
pub use rules::*;
