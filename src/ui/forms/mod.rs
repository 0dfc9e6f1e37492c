//! Form rendering module
//!
//! - `field_renderer`: one field's label, input, description and message
//! - `signup_form`: the account creation card

mod field_renderer;
mod signup_form;

pub use signup_form::{draw_signup_form, SIGNUP_FORM_HEIGHT};
