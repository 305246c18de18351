//! Field validation domain
//!
//! Pure functions with no UI dependency:
//! - `validators`: per-field predicates and the `check_field` entry point
//! - `phone`: live masking for the strict phone policy
//! - `rating`: rating average and severity band classification

mod error;
mod phone;
mod rating;
mod validators;

pub use error::FieldError;
pub use phone::{erase_digit, format_phone};
pub use rating::{Average, BandThresholds, RatingRange, RatingTriple, SeverityBand};
pub use validators::{check_field, NamePolicy, PhonePolicy, ValidationRules};
