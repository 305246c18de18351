//! Application state and core logic

use crate::config::{FormConfig, FormSettings};
use crate::sink::{copy_to_clipboard, ClipboardSink, LogSink, SubmissionSink};
use crate::state::{AppState, FormButton};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; results shown and delivered
    Submitted,
    /// At least one field invalid; nothing was produced
    Rejected,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where successful submissions are delivered
    sinks: Vec<Box<dyn SubmissionSink>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &FormConfig) -> Self {
        let settings = config.settings();
        let mut sinks: Vec<Box<dyn SubmissionSink>> = vec![Box::new(LogSink)];
        if settings.copy_on_submit {
            sinks.push(Box::new(ClipboardSink));
        }
        Self::with_sinks(settings, sinks)
    }

    pub fn with_sinks(settings: FormSettings, sinks: Vec<Box<dyn SubmissionSink>>) -> Self {
        Self {
            state: AppState::new(settings),
            sinks,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance timers; called once per event-loop iteration
    pub fn tick(&mut self, now: Instant) {
        self.state.tick(now);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Keyboard shortcuts (work from anywhere)
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(now);
                return Ok(());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_result(now);
                return Ok(());
            }
            KeyCode::Esc => {
                if self.state.notifier.is_visible() {
                    self.state.notifier.cancel();
                } else {
                    self.quit = true;
                }
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.next_field();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.prev_field();
                return Ok(());
            }
            _ => {}
        }

        if self.state.form.is_actions_row_active() {
            self.handle_actions_key(key, now);
        } else if self
            .state
            .form
            .active_field_id()
            .is_some_and(|id| id.is_rating())
        {
            self.handle_slider_key(key);
        } else {
            self.handle_text_key(key);
        }
        Ok(())
    }

    /// Keys while a text field has focus
    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c)
            }
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Enter | KeyCode::Down => self.state.next_field(),
            KeyCode::Up => self.state.prev_field(),
            _ => {}
        }
    }

    /// Keys while a rating slider has focus
    fn handle_slider_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.adjust_rating(-1),
            KeyCode::Right => self.state.adjust_rating(1),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c)
            }
            KeyCode::Enter | KeyCode::Down => self.state.next_field(),
            KeyCode::Up => self.state.prev_field(),
            _ => {}
        }
    }

    /// Keys while the action row has focus
    fn handle_actions_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => self.state.form.prev_button(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => {
                self.state.form.next_button()
            }
            KeyCode::Enter => match self.state.form.selected() {
                FormButton::Submit if self.state.can_submit() => {
                    self.submit(now);
                }
                FormButton::Submit => {
                    self.state.flash("Fill in every field before submitting.", now);
                }
                FormButton::Clear => {
                    self.state.clear_form();
                    self.state.flash("Form cleared.", now);
                }
            },
            _ => {}
        }
    }

    /// Validate, snapshot and deliver the form
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let Some(result) = self.state.try_submit(now).cloned() else {
            self.state.flash("Please fix the highlighted fields.", now);
            return SubmitOutcome::Rejected;
        };

        for sink in &mut self.sinks {
            if let Err(err) = sink.deliver(&result) {
                tracing::error!(sink = sink.name(), %err, "submission delivery failed");
                self.state
                    .push_error(format!("Could not deliver to {}: {err}", sink.name()));
            }
        }
        SubmitOutcome::Submitted
    }

    /// Copy the latest submission to the clipboard as JSON
    fn copy_last_result(&mut self, now: Instant) {
        let Some(result) = &self.state.last_result else {
            self.state.flash("Nothing submitted yet.", now);
            return;
        };

        let copied = result
            .to_json()
            .map_err(Into::into)
            .and_then(|json| copy_to_clipboard(&json));
        match copied {
            Ok(()) => self.state.flash("Result copied as JSON.", now),
            Err(err) => self.state.push_error(format!("Copy failed: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MockSubmissionSink, SinkError};
    use crate::state::{FieldId, FormPhase};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(sink: MockSubmissionSink) -> App {
        App::with_sinks(FormSettings::default(), vec![Box::new(sink)])
    }

    fn type_str(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), now).unwrap();
        }
    }

    /// Fill all text fields and leave focus on the action row
    fn fill(app: &mut App, now: Instant) {
        for value in [
            "Jonas",
            "Jonaitis",
            "jonas@example.lt",
            "61234567",
            "Gedimino pr. 1",
        ] {
            type_str(app, value, now);
            app.handle_key(key(KeyCode::Tab), now).unwrap();
        }
        // Sliders: 5 -> 7, 5 -> 9, 5 stays
        app.handle_key(key(KeyCode::Right), now).unwrap();
        app.handle_key(key(KeyCode::Right), now).unwrap();
        app.handle_key(key(KeyCode::Tab), now).unwrap();
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Right), now).unwrap();
        }
        app.handle_key(key(KeyCode::Tab), now).unwrap();
        app.handle_key(key(KeyCode::Tab), now).unwrap();
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_esc_quits_when_nothing_to_dismiss() {
            let mut app = app_with(MockSubmissionSink::new());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc), Instant::now()).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_tab_blurs_and_moves() {
            let mut app = app_with(MockSubmissionSink::new());
            app.handle_key(key(KeyCode::Tab), Instant::now()).unwrap();
            assert_eq!(app.state.form.active_field_index, 1);
            assert!(app.state.visible_error(FieldId::Name).is_some());
        }

        #[test]
        fn test_backtab_reaches_actions_row() {
            let mut app = app_with(MockSubmissionSink::new());
            app.handle_key(key(KeyCode::BackTab), Instant::now()).unwrap();
            assert!(app.state.form.is_actions_row_active());
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app_with(MockSubmissionSink::new());
            app.handle_key(ctrl('a'), Instant::now()).unwrap();
            assert_eq!(app.state.form.text(FieldId::Name), "");
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_flow_delivers_once_and_shows_results() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().times(1).returning(|_| Ok(()));
            let mut app = app_with(sink);
            let now = Instant::now();

            fill(&mut app, now);
            assert_eq!(app.state.phase(), FormPhase::Submittable);
            assert!(app.state.form.is_actions_row_active());

            app.handle_key(key(KeyCode::Enter), now).unwrap();
            assert_eq!(app.state.phase(), FormPhase::Submitted);

            let result = app.state.last_result.as_ref().unwrap();
            assert_eq!(
                result.text_values().map(|(_, v)| v.to_string()),
                [
                    "Jonas".to_string(),
                    "Jonaitis".to_string(),
                    "jonas@example.lt".to_string(),
                    "+370 6 12 345 67".to_string(),
                    "Gedimino pr. 1".to_string(),
                ]
            );
            assert_eq!(result.ratings.0, [7, 9, 5]);
            assert_eq!(result.average.to_string(), "7.0");

            assert!(app.state.notifier.is_visible());
            app.tick(now + Duration::from_millis(3000));
            assert!(!app.state.notifier.is_visible());
        }

        #[test]
        fn test_disabled_submit_button_does_nothing() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().never();
            let mut app = app_with(sink);
            let now = Instant::now();
            app.handle_key(key(KeyCode::BackTab), now).unwrap();
            app.handle_key(key(KeyCode::Enter), now).unwrap();
            assert!(app.state.last_result.is_none());
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_shortcut_on_invalid_form_is_rejected() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().never();
            let mut app = app_with(sink);
            assert_eq!(app.submit(Instant::now()), SubmitOutcome::Rejected);

            app.handle_key(ctrl('s'), Instant::now()).unwrap();
            assert!(app.state.last_result.is_none());
            for id in FieldId::TEXT {
                assert!(app.state.visible_error(id).is_some());
            }
        }

        #[test]
        fn test_resubmit_resets_notifier_delay() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().times(2).returning(|_| Ok(()));
            let mut app = app_with(sink);
            let now = Instant::now();
            fill(&mut app, now);

            assert_eq!(app.submit(now), SubmitOutcome::Submitted);
            let later = now + Duration::from_millis(2000);
            assert_eq!(app.submit(later), SubmitOutcome::Submitted);

            app.tick(now + Duration::from_millis(3500));
            assert!(app.state.notifier.is_visible());
            app.tick(later + Duration::from_millis(3000));
            assert!(!app.state.notifier.is_visible());
        }

        #[test]
        fn test_sink_failure_opens_error_dialog() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().times(1).returning(|_| {
                Err(SinkError::Encode(
                    serde_json::from_str::<u8>("x").unwrap_err(),
                ))
            });
            sink.expect_name().return_const("mock");
            let mut app = app_with(sink);
            let now = Instant::now();
            fill(&mut app, now);

            assert_eq!(app.submit(now), SubmitOutcome::Submitted);
            assert!(app.state.has_errors());
            assert!(app
                .state
                .current_error()
                .is_some_and(|e| e.starts_with("Could not deliver to mock")));

            // Error dialog swallows keys until dismissed
            app.handle_key(key(KeyCode::Char('x')), now).unwrap();
            assert!(app.state.has_errors());
            app.handle_key(key(KeyCode::Enter), now).unwrap();
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_esc_hides_confirmation_before_quitting() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().returning(|_| Ok(()));
            let mut app = app_with(sink);
            let now = Instant::now();
            fill(&mut app, now);
            app.submit(now);

            app.handle_key(key(KeyCode::Esc), now).unwrap();
            assert!(!app.state.notifier.is_visible());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_clear_button_keeps_results() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().returning(|_| Ok(()));
            let mut app = app_with(sink);
            let now = Instant::now();
            fill(&mut app, now);
            app.submit(now);

            app.handle_key(key(KeyCode::Down), now).unwrap();
            app.handle_key(key(KeyCode::Enter), now).unwrap();
            assert_eq!(app.state.form.text(FieldId::Name), "");
            assert!(app.state.last_result.is_some());
            assert_eq!(app.state.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_copy_without_result_sets_status() {
            let mut app = app_with(MockSubmissionSink::new());
            app.copy_last_result(Instant::now());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Nothing submitted yet.")
            );
        }

        #[test]
        fn test_action_feedback_flashes_then_hides() {
            let mut app = app_with(MockSubmissionSink::new());
            let now = Instant::now();
            app.handle_key(key(KeyCode::BackTab), now).unwrap();
            app.handle_key(key(KeyCode::Right), now).unwrap();
            app.handle_key(key(KeyCode::Enter), now).unwrap();
            assert_eq!(app.state.status_message.as_deref(), Some("Form cleared."));

            // Unrelated keys leave the message to its timer
            app.handle_key(key(KeyCode::Left), now).unwrap();
            assert!(app.state.status_message.is_some());

            app.tick(now + Duration::from_millis(3000));
            assert!(app.state.status_message.is_none());
        }
    }
}
