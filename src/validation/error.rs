//! Field-level validation errors

use thiserror::Error;

/// Why a field failed validation.
///
/// These are user-input outcomes shown next to the field, never faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The trimmed value is empty. Carries the field label.
    #[error("{0} is required.")]
    Required(&'static str),

    /// The value is present but does not match the field's pattern.
    #[error("{0}")]
    FormatInvalid(&'static str),
}

impl FieldError {
    pub fn is_required(&self) -> bool {
        matches!(self, FieldError::Required(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_uses_label() {
        let err = FieldError::Required("Email");
        assert_eq!(err.to_string(), "Email is required.");
        assert!(err.is_required());
    }

    #[test]
    fn test_format_invalid_message_is_verbatim() {
        let err = FieldError::FormatInvalid("Please enter a valid email.");
        assert_eq!(err.to_string(), "Please enter a valid email.");
        assert!(!err.is_required());
    }
}
