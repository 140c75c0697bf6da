//! Form field value objects

use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Validation rule set a field is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    PasswordConfirmation,
}

impl FieldKind {
    /// Whether the field's value should be masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::PasswordConfirmation)
    }
}

/// Per-field validation outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Success,
    Error(String),
}

impl FieldStatus {
    pub fn error(message: impl Into<String>) -> Self {
        FieldStatus::Error(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FieldStatus::Success)
    }
}

/// Represents a single form field with its configuration, value and
/// last computed validation status
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub status: Option<FieldStatus>,
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            status: None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Reset the value to empty; the rendered status is kept as-is
    pub fn clear_value(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering (masked for secret fields)
    pub fn display_value(&self) -> String {
        if self.kind.is_secret() {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Icon glyph shown next to a validated field
pub const ICON_SUCCESS: &str = "✔";
/// Icon glyph shown next to a field that failed validation
pub const ICON_ERROR: &str = "✘";

/// Build the styled status icon for a validation outcome.
///
/// Pure factory: no state, no side effects beyond span creation.
pub fn status_icon(status: &FieldStatus) -> Span<'static> {
    match status {
        FieldStatus::Success => Span::styled(ICON_SUCCESS, Style::default().fg(Color::Green)),
        FieldStatus::Error(_) => Span::styled(ICON_ERROR, Style::default().fg(Color::Red)),
    }
}
