//! Dialog components for TUI

mod base;
mod error_dialog;
mod submitted_dialog;

pub use error_dialog::render_error_dialog;
pub use submitted_dialog::render_submitted_dialog;
