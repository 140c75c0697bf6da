//! UI module for rendering the TUI

mod components;
mod form;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    form::draw(frame, area, app);

    // Result modal overlays the form when open
    if let Some(result) = &app.state.modal {
        components::render_result_dialog(frame, result);
    }
}
