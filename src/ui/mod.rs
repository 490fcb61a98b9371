//! UI module for rendering the TUI

mod components;
mod forms;
mod items;
mod layout;
mod widgets;

use widgets::render_scrollable_list;

use crate::app::App;
use components::{render_error_dialog, render_submitted_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (sidebar_area, main_area) = layout::create_layout(frame.area());

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.active_form() {
        Some(form) => forms::draw_signup_form(frame, main_area, form, app.config.mask_passwords()),
        None => items::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Modal dialogs on top; errors take priority
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    } else if let Some(submission) = &app.state.last_submission {
        render_submitted_dialog(frame, submission);
    }
}
