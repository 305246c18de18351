//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render an action button with border.
///
/// `accent` colours the label of an enabled, unselected button.
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Option<Color>,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        accent.map_or_else(Style::default, |c| Style::default().fg(c))
    };

    let paragraph = Paragraph::new(format!(" {label} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
