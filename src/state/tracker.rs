//! Validation state tracking
//!
//! `ValidationState` is a value, not a shared map: every change produces a
//! fresh state from `recompute`, and submit enablement is derived from it.

use super::forms::{ContactForm, FieldId};
use crate::validation::{check_field, FieldError, ValidationRules};
use std::collections::BTreeMap;

/// Pass/fail status of one tracked field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub valid: bool,
    pub error: Option<FieldError>,
}

/// Field identifier to validity mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationState {
    entries: BTreeMap<FieldId, FieldStatus>,
}

impl ValidationState {
    /// Every text field starts out required and invalid
    pub fn new() -> Self {
        let entries = FieldId::TEXT
            .iter()
            .map(|id| {
                (
                    *id,
                    FieldStatus {
                        valid: false,
                        error: Some(FieldError::Required(id.label())),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Mark `field` invalid with `error`
    pub fn set_error(mut self, field: FieldId, error: FieldError) -> Self {
        self.entries.insert(
            field,
            FieldStatus {
                valid: false,
                error: Some(error),
            },
        );
        self
    }

    /// Mark `field` valid and drop its message
    pub fn clear_error(mut self, field: FieldId) -> Self {
        self.entries.insert(
            field,
            FieldStatus {
                valid: true,
                error: None,
            },
        );
        self
    }

    pub fn is_valid(&self, field: FieldId) -> bool {
        self.entries.get(&field).is_some_and(|s| s.valid)
    }

    pub fn error(&self, field: FieldId) -> Option<&FieldError> {
        self.entries.get(&field).and_then(|s| s.error.as_ref())
    }

    /// Fields currently failing, in display order
    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.entries
            .iter()
            .filter(|(_, s)| !s.valid)
            .map(|(id, _)| *id)
    }

    /// Submit is enabled iff every tracked field is valid
    pub fn can_submit(&self) -> bool {
        self.entries.values().all(|s| s.valid)
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate every text field of `form` and return the resulting state
pub fn recompute(form: &ContactForm, rules: &ValidationRules) -> ValidationState {
    FieldId::TEXT
        .iter()
        .fold(ValidationState::new(), |state, id| {
            match check_field(*id, form.text(*id), rules) {
                Ok(()) => state.clear_error(*id),
                Err(err) => state.set_error(*id, err),
            }
        })
}
