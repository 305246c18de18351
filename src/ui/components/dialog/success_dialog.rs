//! Submission confirmation overlay

use super::base::{render_dialog, DialogConfig};
use crate::state::SubmissionResult;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Render the transient "submitted" confirmation
pub fn render_success_dialog(frame: &mut Frame, result: &SubmissionResult, offset_y: u16) {
    let body = vec![
        Line::from(format!("Thank you, {}!", result.name)),
        Line::from(Span::styled(
            "Your answers were received.",
            Style::default().fg(Color::Gray),
        )),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            body,
            hint: None,
            max_width: 44,
            offset_y,
        },
    );
}
