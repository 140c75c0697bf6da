//! Application state definitions

use super::form::{FormError, SignupForm};
use crate::backend::SubmitResult;

/// Label shown on the submit button when idle
pub const SUBMIT_LABEL: &str = "Sign Up";
/// Label shown on the submit button while a request is outstanding
pub const SENDING_LABEL: &str = "Sending...";

/// State consumed by the ui and app layers
#[derive(Debug)]
pub struct AppState {
    /// The signup form field registry
    pub form: SignupForm,
    /// True while a submission request is outstanding; the submit button
    /// is disabled for the whole window
    pub sending: bool,
    /// Current submit button label
    pub submit_label: String,
    /// Label saved across the busy window, restored on completion
    saved_label: Option<String>,
    /// Result modal contents; `Some` means the modal is open
    pub modal: Option<SubmitResult>,
}

impl AppState {
    pub fn new() -> Result<Self, FormError> {
        Ok(Self {
            form: SignupForm::signup()?,
            sending: false,
            submit_label: SUBMIT_LABEL.to_string(),
            saved_label: None,
            modal: None,
        })
    }

    /// Enter the busy window: disable the submit button and swap its
    /// label, saving the current one for restore
    pub fn begin_sending(&mut self) {
        self.saved_label = Some(std::mem::replace(
            &mut self.submit_label,
            SENDING_LABEL.to_string(),
        ));
        self.sending = true;
    }

    /// Exit the busy window: restore the saved label and re-enable
    pub fn end_sending(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.submit_label = label;
        }
        self.sending = false;
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Close the modal, discarding its contents
    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_state_is_idle_with_closed_modal() {
        let state = AppState::new().unwrap();
        assert!(!state.sending);
        assert_eq!(state.submit_label, SUBMIT_LABEL);
        assert!(!state.modal_open());
    }

    #[test]
    fn test_begin_sending_swaps_label_and_disables() {
        let mut state = AppState::new().unwrap();
        state.begin_sending();
        assert!(state.sending);
        assert_eq!(state.submit_label, SENDING_LABEL);
    }

    #[test]
    fn test_end_sending_restores_saved_label() {
        let mut state = AppState::new().unwrap();
        state.begin_sending();
        state.end_sending();
        assert!(!state.sending);
        assert_eq!(state.submit_label, SUBMIT_LABEL);
    }

    #[test]
    fn test_end_sending_without_begin_is_noop_on_label() {
        let mut state = AppState::new().unwrap();
        state.end_sending();
        assert_eq!(state.submit_label, SUBMIT_LABEL);
    }

    #[test]
    fn test_close_modal() {
        let mut state = AppState::new().unwrap();
        state.modal = Some(SubmitResult::Success);
        assert!(state.modal_open());
        state.close_modal();
        assert!(!state.modal_open());
    }
}
