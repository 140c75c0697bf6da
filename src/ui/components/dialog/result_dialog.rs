//! Submission result dialog

use super::base::{render_dialog, DialogConfig};
use crate::backend::SubmitResult;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Heading shown when the endpoint rejected the submission
pub const FAILURE_HEADING: &str = "Failed to submit!";
/// Heading shown on the success path
pub const SUCCESS_HEADING: &str = "Form submitted successfully";

/// Render the submission outcome as a centered modal overlay
pub fn render_result_dialog(frame: &mut Frame, result: &SubmitResult) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to close"),
    ];

    let config = match result {
        SubmitResult::Success => DialogConfig {
            title: SUCCESS_HEADING,
            title_color: Color::Green,
            border_color: Color::Green,
            lines: Vec::new(),
            hint: Some(hint),
            max_width: 60,
        },
        SubmitResult::Failure(messages) => DialogConfig {
            title: FAILURE_HEADING,
            title_color: Color::Red,
            border_color: Color::Red,
            lines: messages.clone(),
            hint: Some(hint),
            max_width: 60,
        },
    };

    render_dialog(frame, config);
}
