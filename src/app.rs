//! Application core: key handling and submit orchestration

use crate::backend::{HttpSubmitClient, SubmitClient, SubmitResult};
use crate::config::TuiConfig;
use crate::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submit client for the signup endpoint
    client: Arc<dyn SubmitClient>,
    /// Receiver for the in-flight submission, polled by the event loop
    pending: Option<oneshot::Receiver<SubmitResult>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = Arc::new(HttpSubmitClient::new(config)?);
        Self::with_client(client)
    }

    /// Create an App with an explicit submit client
    pub fn with_client(client: Arc<dyn SubmitClient>) -> Result<Self> {
        Ok(Self {
            state: AppState::new()?,
            client,
            pending: None,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Modal captures all input while open
        if self.state.modal_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.close_modal();
            }
            return Ok(());
        }

        match key.code {
            // Submit shortcut, works from any field
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            // Leaving a field validates it (the blur event of the form)
            KeyCode::Tab => {
                let left = self.state.form.next_field();
                self.state.form.validate_at(left);
            }
            KeyCode::BackTab => {
                let left = self.state.form.prev_field();
                self.state.form.validate_at(left);
            }
            // Enter submits the form from anywhere, like a native form
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Esc => {
                self.quit = true;
            }
            // Field editing with live validation (the input event)
            KeyCode::Char(c) => {
                let index = self.state.form.active_index();
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                    self.state.form.validate_at(index);
                }
            }
            KeyCode::Backspace => {
                let index = self.state.form.active_index();
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                    self.state.form.validate_at(index);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate every field and, if all pass, send the form.
    ///
    /// Ignored while a request is outstanding: the disabled submit button
    /// is the one piece of mutual exclusion this app maintains.
    pub fn submit(&mut self) {
        if self.state.sending {
            tracing::debug!("submit ignored while request outstanding");
            return;
        }

        // Every field gets a rendered status before the aggregate decision
        if !self.state.form.validate_all() {
            // Silently abort: the inline messages are the only surface
            return;
        }

        self.send_form_data();
    }

    /// Serialize the form and issue the request on a background task.
    /// The result arrives through the channel polled by the event loop.
    fn send_form_data(&mut self) {
        let payload = self.state.form.to_payload();
        self.state.begin_sending();

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let result = match client.submit(payload).await {
                Ok(response) => SubmitResult::from_response(response),
                Err(err) => {
                    tracing::warn!("submission failed: {err}");
                    SubmitResult::from_error(&err)
                }
            };
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
    }

    /// Poll the in-flight submission without blocking; called once per
    /// event-loop iteration
    pub fn poll_submission(&mut self) {
        let Some(rx) = &mut self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.show_result(result);
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                self.show_result(SubmitResult::Failure(vec![
                    "Submission task dropped".to_string(),
                ]));
            }
        }
    }

    /// Open the result modal and exit the busy window. Success also
    /// resets the form values (statuses stay rendered).
    fn show_result(&mut self, result: SubmitResult) {
        if result == SubmitResult::Success {
            tracing::info!("form submitted successfully");
            self.state.form.cleanup();
        }
        self.state.modal = Some(result);
        self.state.end_sending();
    }
}
