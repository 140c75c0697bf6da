//! Signup form rendering

use crate::app::App;
use crate::state::{status_icon, FieldStatus, FormField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the signup form: one bordered block per field with a status line
/// underneath, then the submit button and a key hint
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    // One Length(3) field block + Length(1) status line per field,
    // then the submit button and the hint
    let mut constraints: Vec<Constraint> = Vec::new();
    for _ in app.state.form.fields() {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (i, field) in app.state.form.fields().iter().enumerate() {
        let is_active = app.state.form.active_index() == i;
        draw_field(frame, chunks[2 * i], field, is_active);
        draw_status_line(frame, chunks[2 * i + 1], field);
    }

    let button_row = chunks[2 * app.state.form.field_count()];
    draw_submit_button(frame, button_row, app);

    draw_hint(frame, chunks[chunks.len() - 1]);
}

/// Draw a single form field block
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw the status line under a field: icon plus message on error, icon
/// only (message cleared) on success, nothing before first validation
fn draw_status_line(frame: &mut Frame, area: Rect, field: &FormField) {
    let Some(status) = &field.status else {
        return;
    };

    let mut spans = vec![Span::raw(" "), status_icon(status), Span::raw(" ")];
    if let FieldStatus::Error(message) = status {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the submit button, centered, dimmed while a request is outstanding
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        row[1],
        &app.state.submit_label,
        app.state.form.is_submit_active(),
        !app.state.sending,
    );
}

fn draw_hint(frame: &mut Frame, area: Rect) {
    let hint = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
