//! Results region

use crate::app::App;
use crate::validation::SeverityBand;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Colour of the average for each band
pub fn band_color(band: SeverityBand) -> Color {
    match band {
        SeverityBand::Low => Color::Red,
        SeverityBand::Medium => Color::Rgb(255, 165, 0),
        SeverityBand::High => Color::Green,
    }
}

/// Draw the latest submission, or a placeholder before the first one
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(result) = &app.state.last_result else {
        let placeholder = Paragraph::new("No submissions yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = result
        .text_values()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value),
            ])
        })
        .collect();

    let [r1, r2, r3] = result.ratings.0;
    lines.push(Line::from(vec![
        Span::styled("Ratings: ", label_style),
        Span::raw(format!("{r1} · {r2} · {r3}")),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        result.headline(),
        Style::default()
            .fg(band_color(result.band))
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "{} band · {}",
            result.band.label(),
            result.submitted_at.format("%H:%M:%S")
        ),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
