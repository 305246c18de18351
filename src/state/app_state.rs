//! Application state definitions

use super::forms::{ContactForm, FieldId, Form};
use super::notifier::Notifier;
use super::submission::SubmissionResult;
use super::tracker::{recompute, ValidationState};
use crate::config::FormSettings;
use crate::validation::{erase_digit, format_phone, FieldError};
use std::collections::VecDeque;
use std::time::Instant;

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// At least one field is invalid
    Editing,
    /// Every field is valid; submit is enabled
    Submittable,
    /// Results are shown for the values currently in the form
    Submitted,
}

/// All mutable state of the running form
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: FormSettings,
    pub form: ContactForm,
    pub validation: ValidationState,
    /// Latest successful submission; kept until the next one overwrites it
    pub last_result: Option<SubmissionResult>,
    pub notifier: Notifier,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
    /// Hides `status_message` after the notice duration
    status_timer: Notifier,
    errors: VecDeque<String>,
    submitted: bool,
}

impl AppState {
    pub fn new(settings: FormSettings) -> Self {
        let form = ContactForm::new(settings.default_rating);
        let validation = recompute(&form, &settings.rules);
        Self {
            notifier: Notifier::new(settings.notice_duration),
            status_timer: Notifier::new(settings.notice_duration),
            settings,
            form,
            validation,
            last_result: None,
            status_message: None,
            errors: VecDeque::new(),
            submitted: false,
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else if self.validation.can_submit() {
            FormPhase::Submittable
        } else {
            FormPhase::Editing
        }
    }

    pub fn can_submit(&self) -> bool {
        self.validation.can_submit()
    }

    /// Error to show under `field`, if the user has interacted with it
    pub fn visible_error(&self, field: FieldId) -> Option<&FieldError> {
        if self.form.field(field).touched {
            self.validation.error(field)
        } else {
            None
        }
    }

    /// True once the user has interacted with `field` and it passes
    pub fn is_confirmed(&self, field: FieldId) -> bool {
        self.form.field(field).touched && self.validation.is_valid(field)
    }

    /// Failing fields split into (empty, wrong format)
    pub fn pending_counts(&self) -> (usize, usize) {
        self.validation
            .invalid_fields()
            .filter_map(|id| self.validation.error(id))
            .fold((0, 0), |(missing, malformed), err| {
                if err.is_required() {
                    (missing + 1, malformed)
                } else {
                    (missing, malformed + 1)
                }
            })
    }

    /// Input event: a printable character typed into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(id) = self.form.active_field_id() else {
            return;
        };
        if id.is_rating() {
            match c {
                '+' | '=' | 'l' => self.adjust_rating(1),
                '-' | 'h' => self.adjust_rating(-1),
                _ => {}
            }
            return;
        }

        let masks_phone = id == FieldId::Phone && self.settings.rules.phone.masks_input();
        let field = self.form.field_mut(id);
        if masks_phone {
            let mut raw = field.as_text().to_string();
            raw.push(c);
            field.set_text(format_phone(&raw));
        } else {
            field.push_char(c);
        }
        field.touched = true;
        self.on_change();
    }

    /// Input event: delete backwards in the focused field
    pub fn backspace(&mut self) {
        let Some(id) = self.form.active_field_id().filter(|id| !id.is_rating()) else {
            return;
        };
        let masks_phone = id == FieldId::Phone && self.settings.rules.phone.masks_input();
        let field = self.form.field_mut(id);
        if masks_phone {
            let erased = erase_digit(field.as_text());
            field.set_text(erased);
        } else {
            field.pop_char();
        }
        field.touched = true;
        self.on_change();
    }

    /// Move the focused slider by `delta` steps
    pub fn adjust_rating(&mut self, delta: i16) {
        let Some(id) = self.form.active_field_id().filter(FieldId::is_rating) else {
            return;
        };
        let range = self.settings.range;
        self.form.field_mut(id).adjust_rating(delta, range);
        self.on_change();
    }

    /// Blur event: focus leaves the current field
    pub fn blur(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.touched = true;
        }
        self.revalidate();
    }

    pub fn next_field(&mut self) {
        self.blur();
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.blur();
        self.form.prev_field();
    }

    /// Re-validate everything and, if the form passes, snapshot it.
    ///
    /// On failure every field is marked touched so all messages show, and
    /// no result is produced.
    pub fn try_submit(&mut self, now: Instant) -> Option<&SubmissionResult> {
        self.form.touch_all();
        self.revalidate();

        if !self.validation.can_submit() {
            let invalid: Vec<_> = self
                .validation
                .invalid_fields()
                .map(|id| id.as_str())
                .collect();
            tracing::debug!(?invalid, "submit rejected");
            return None;
        }

        let result = SubmissionResult::from_form(&self.form, &self.settings.thresholds);
        tracing::info!(id = %result.id, average = %result.average, "form submitted");
        self.submitted = true;
        self.notifier.arm(now);
        self.last_result = Some(result);
        self.last_result.as_ref()
    }

    /// Reset every field; the latest results stay visible
    pub fn clear_form(&mut self) {
        self.form = ContactForm::new(self.settings.default_rating);
        self.submitted = false;
        self.revalidate();
    }

    /// Show `message` in the status bar for the notice duration. A new
    /// flash replaces the current one and restarts the delay.
    pub fn flash(&mut self, message: impl Into<String>, now: Instant) {
        self.status_message = Some(message.into());
        self.status_timer.arm(now);
    }

    /// Advance timers
    pub fn tick(&mut self, now: Instant) {
        if self.notifier.tick(now) {
            tracing::trace!("confirmation hidden");
        }
        if self.status_timer.tick(now) {
            self.status_message = None;
        }
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "error shown");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    fn on_change(&mut self) {
        self.submitted = false;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = recompute(&self.form, &self.settings.rules);
    }
}
