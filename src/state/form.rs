//! Form registry and focus management
//!
//! The registry is built once at startup and validated eagerly: duplicate
//! field names or a confirmation field without a password field to match
//! against are configuration errors, not runtime faults.

use super::field::{FieldKind, FieldStatus, FormField};
use super::validate;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while building or querying the field registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("duplicate field name: {0}")]
    DuplicateField(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("confirmation field '{0}' has no password field to match against")]
    MissingPasswordField(String),
}

/// Ordered set of form fields plus the active focus slot.
///
/// Focus slots are `0..field_count()` for the fields themselves and
/// `field_count()` for the submit button (last row, like a buttons row).
#[derive(Debug, Clone)]
pub struct SignupForm {
    fields: Vec<FormField>,
    active: usize,
}

impl SignupForm {
    /// Build a registry from an ordered field list, failing fast on
    /// duplicate names and on a confirmation field with no password peer.
    pub fn new(fields: Vec<FormField>) -> Result<Self, FormError> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }
        let has_password = fields.iter().any(|f| f.kind == FieldKind::Password);
        if let Some(confirmation) = fields
            .iter()
            .find(|f| f.kind == FieldKind::PasswordConfirmation)
        {
            if !has_password {
                return Err(FormError::MissingPasswordField(confirmation.name.clone()));
            }
        }
        Ok(Self { fields, active: 0 })
    }

    /// The standard signup form: name, email, password, confirmation
    pub fn signup() -> Result<Self, FormError> {
        Self::new(vec![
            FormField::new("name", "Name", FieldKind::Text),
            FormField::new("email", "Email", FieldKind::Email),
            FormField::new("password", "Password", FieldKind::Password),
            FormField::new(
                "password_confirmation",
                "Password confirmation",
                FieldKind::PasswordConfirmation,
            ),
        ])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Focus slot of the submit button (one past the last field)
    pub fn submit_index(&self) -> usize {
        self.fields.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_submit_active(&self) -> bool {
        self.active == self.submit_index()
    }

    /// Move focus to the next slot (wraps from the submit button to the
    /// first field). Returns the slot that was left.
    pub fn next_field(&mut self) -> usize {
        let left = self.active;
        self.active = (self.active + 1) % (self.submit_index() + 1);
        left
    }

    /// Move focus to the previous slot (wraps). Returns the slot left.
    pub fn prev_field(&mut self) -> usize {
        let left = self.active;
        if self.active == 0 {
            self.active = self.submit_index();
        } else {
            self.active -= 1;
        }
        left
    }

    /// The focused field, if focus is on a field and not the submit button
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active;
        self.fields.get_mut(index)
    }

    /// Current value of a field by name
    pub fn value_of(&self, name: &str) -> Result<&str, FormError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn password_value(&self) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::Password)
            .map(|f| f.value.clone())
    }

    /// Validate one field slot, storing its status for rendering.
    /// Returns true iff the field passed; out-of-range slots (the submit
    /// button) are vacuously true.
    pub fn validate_at(&mut self, index: usize) -> bool {
        let password = self.password_value();
        let Some(field) = self.fields.get_mut(index) else {
            return true;
        };
        let status = validate::check(field, password.as_deref());
        let ok = status.is_success();
        field.status = Some(status);
        ok
    }

    /// Validate every field; all fields get a rendered status even when an
    /// earlier one fails. Returns the aggregate AND.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for index in 0..self.fields.len() {
            ok &= self.validate_at(index);
        }
        ok
    }

    /// Serialize the form to a flat JSON map of field name to value
    pub fn to_payload(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.value.clone())))
            .collect()
    }

    /// Reset every field's value to empty. Rendered statuses are kept.
    pub fn cleanup(&mut self) {
        for field in &mut self.fields {
            field.clear_value();
        }
    }
}
