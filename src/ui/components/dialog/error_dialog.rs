//! Error dialog component

use super::base::{render_dialog, wrap_text, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let body = wrap_text(error_message, (MAX_WIDTH - 6) as usize)
        .into_iter()
        .map(Line::from)
        .collect();

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: Color::Red,
            border_color: Color::Red,
            body,
            hint: Some(hint),
            max_width: MAX_WIDTH,
            offset_y: 0,
        },
    );
}
