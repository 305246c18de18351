//! Form rendering module
//!
//! - `field_renderer`: text field, slider and help line widgets
//! - `contact_form`: the contact form and its action panel

mod contact_form;
mod field_renderer;

pub use contact_form::{draw_action_panel, draw_form};
