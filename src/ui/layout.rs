//! Layout components (panels and status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen
pub struct ScreenLayout {
    pub form: Rect,
    pub actions: Rect,
    pub results: Rect,
    pub status: Rect,
}

/// Split the screen into form, side column and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(44),    // Form
            Constraint::Length(40), // Actions + results
        ])
        .split(rows[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT + 2), // Action panel
            Constraint::Min(0),                    // Results
        ])
        .split(columns[1]);

    ScreenLayout {
        form: columns[0],
        actions: side[0],
        results: side[1],
        status: rows[1],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let (symbol, text, color) = match app.state.phase() {
        FormPhase::Editing => ("○", "editing", Color::Yellow),
        FormPhase::Submittable => ("●", "ready to submit", Color::Green),
        FormPhase::Submitted => ("✔", "submitted", Color::Cyan),
    };
    spans.push(Span::styled(
        format!(" {symbol} {text} "),
        Style::default().fg(color),
    ));

    let (missing, malformed) = app.state.pending_counts();
    if missing + malformed > 0 {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("{missing} missing, {malformed} invalid"),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
