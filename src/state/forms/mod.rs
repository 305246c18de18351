//! Form domain layer
//!
//! Field values and focus handling for the contact form.

mod field;
mod form_state;

pub use field::{FieldId, FormField};
pub use form_state::{ContactForm, Form, FormButton};
