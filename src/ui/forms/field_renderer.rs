//! Field rendering utilities for forms

use crate::state::FormField;
use crate::validation::{FieldError, RatingRange};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a text field: bordered input plus its error slot
pub const TEXT_FIELD_HEIGHT: u16 = 4;

/// Width of the slider track in cells
const TRACK_WIDTH: usize = 20;

/// Draw a text field with its error slot underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_confirmed: bool,
    error: Option<&FieldError>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };
    let content = if value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::styled(value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(if is_confirmed {
            Line::from(vec![
                Span::raw(format!(" {} ", field.label())),
                Span::styled("✓ ", Style::default().fg(Color::Green)),
            ])
        } else {
            Line::from(format!(" {} ", field.label()))
        })
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(err) = error {
        let message = Paragraph::new(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw a rating slider on a single row with its live readout
pub fn draw_slider(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    range: RatingRange,
    is_active: bool,
) {
    let value = field.as_rating();
    let label_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let track_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<10}", field.label()), label_style),
        Span::styled(format!("{:>3} ", range.min), Style::default().fg(Color::DarkGray)),
        Span::styled(slider_track(range, value), track_style),
        Span::styled(format!(" {:<3}", range.max), Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {value:>3}"), label_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// `━━━━●─────` with the knob at `value`'s position
fn slider_track(range: RatingRange, value: u8) -> String {
    let knob = (range.fraction(value) * (TRACK_WIDTH - 1) as f32).round() as usize;
    (0..TRACK_WIDTH)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

/// Draw the key hints line under the form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled("←/→", key_style),
        Span::raw(": slider  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": submit  "),
        Span::styled(crate::platform::COPY_SHORTCUT, key_style),
        Span::raw(": copy result  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
