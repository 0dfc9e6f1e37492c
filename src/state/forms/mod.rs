//! Form domain layer
//!
//! This module provides the account form's state: field adapters, the
//! identifiers linking each field's parts, and the session that owns them.

mod field;
mod ids;
mod record;
mod session;

pub use field::{FieldState, FieldStatus};
pub use ids::FieldIds;
pub use record::{FieldName, FormRecord};
pub use session::{
    Form, FormSession, SubmitTicket, ToastDurations, DEFAULT_ERROR_TOAST, DEFAULT_SUCCESS_TOAST,
    UNEXPECTED_ERROR_MESSAGE,
};
