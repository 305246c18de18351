//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, draw_slider, TEXT_FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldId, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form fields
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let form = &state.form;

    let border_color = if form.is_actions_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Contact Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldId::TEXT
        .iter()
        .map(|_| Constraint::Length(TEXT_FIELD_HEIGHT))
        .collect();
    constraints.extend(FieldId::RATINGS.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let active = form.active_field_id();
    for (i, id) in FieldId::TEXT.iter().enumerate() {
        draw_field(
            frame,
            chunks[i],
            form.field(*id),
            active == Some(*id),
            state.is_confirmed(*id),
            state.visible_error(*id),
        );
    }

    let offset = FieldId::TEXT.len();
    for (i, id) in FieldId::RATINGS.iter().enumerate() {
        draw_slider(
            frame,
            chunks[offset + i],
            form.field(*id),
            state.settings.range,
            active == Some(*id),
        );
    }

    draw_help_text(frame, chunks[chunks.len() - 1]);
}

/// Draw the action panel
pub fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_actions_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner_area);

    for (i, button) in FormButton::ALL.iter().enumerate() {
        let (enabled, accent) = match button {
            FormButton::Submit => (app.state.can_submit(), Some(Color::Green)),
            FormButton::Clear => (true, Some(Color::Gray)),
        };
        let area = Rect {
            height: BUTTON_HEIGHT.min(button_chunks[i].height),
            ..button_chunks[i]
        };
        render_action_button(
            frame,
            area,
            button.label(),
            is_focused && form.selected() == *button,
            enabled,
            accent,
        );
    }
}
