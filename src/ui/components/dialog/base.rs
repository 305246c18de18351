//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Body lines, already styled
    pub body: Vec<Line<'a>>,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
    /// Rows below the centred position; used for the entrance animation
    pub offset_y: u16,
}

impl<'a> Default for DialogConfig<'a> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            body: Vec::new(),
            hint: None,
            max_width: 60,
            offset_y: 0,
        }
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side

    let content_width = config
        .body
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count());
    let dialog_width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(padding + 2)
        .min(config.max_width)
        .min(area.width);

    // Height: title + blank + body + blank/hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = u16::try_from(config.body.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2 + hint_lines + 2)
        .max(5)
        .min(area.height);

    // Center the dialog, shifted down while animating
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let centered_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;
    let lowest_y = area.y + area.height.saturating_sub(dialog_height);
    let dialog_y = centered_y.saturating_add(config.offset_y).min(lowest_y);

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.body);

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_wrap_splits_on_words() {
        let lines = wrap_text("Could not deliver to clipboard: no display", 20);
        assert_eq!(lines, vec!["Could not deliver to", "clipboard: no", "display"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let lines = wrap_text("Žemaitė Šatrijos", 16);
        assert_eq!(lines, vec!["Žemaitė Šatrijos"]);
    }

    #[test]
    fn test_wrap_empty_yields_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_oversized_body_is_clamped_to_screen() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let long_line = "x".repeat(70_000);
        terminal
            .draw(|frame| {
                render_dialog(
                    frame,
                    DialogConfig {
                        title: "Submitted",
                        title_color: Color::Green,
                        border_color: Color::Green,
                        body: vec![Line::from(long_line.clone())],
                        hint: None,
                        max_width: u16::MAX,
                        offset_y: u16::MAX,
                    },
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top_left = buffer.content().iter().position(|c| c.symbol() == "┌");
        // Full width, pushed to the bottom edge
        assert_eq!(top_left, Some(5 * 40));
    }
}
