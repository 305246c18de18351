//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod results;

use crate::app::App;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;
use std::time::Instant;

/// Rows the confirmation travels while sliding in
const SLIDE_DISTANCE: u16 = 6;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let screen = layout::create_layout(frame.area());

    forms::draw_form(frame, screen.form, app);
    forms::draw_action_panel(frame, screen.actions, app);
    results::draw(frame, screen.results, app);
    layout::draw_status_bar(frame, screen.status, app);

    // Overlays
    if app.state.notifier.is_visible() {
        if let Some(result) = &app.state.last_result {
            let offset = app.state.notifier.slide_offset(now, SLIDE_DISTANCE);
            render_success_dialog(frame, result, offset);
        }
    }

    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
