//! Sign-up form rendering (both validation modes)

use super::field_renderer::{draw_field, draw_help_text};
use crate::shortcuts::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, SignupForm, ValidationMode};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows of the two-column field grid
const GRID_ROWS: usize = FieldName::ALL.len().div_ceil(2);
const FIELD_HEIGHT: u16 = 3;

/// Grid cell (row, column) of a field, filled row by row in tab order
pub fn grid_cell(index: usize) -> (usize, usize) {
    (index / 2, index % 2)
}

/// Draw a sign-up form with its fields, submit button and help line
pub fn draw(frame: &mut Frame, area: Rect, form: &SignupForm, mask_passwords: bool) {
    let border_color = match form.mode {
        ValidationMode::OnSubmit => Color::Cyan,
        ValidationMode::OnChange => Color::Magenta,
    };
    let block = Block::default()
        .title(format!(" {} ", form.mode.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT * GRID_ROWS as u16), // Fields
            Constraint::Length(BUTTON_HEIGHT),                  // Submit
            Constraint::Length(1),                              // Help text
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(FIELD_HEIGHT); GRID_ROWS])
        .split(chunks[0]);

    for (index, field) in FieldName::ALL.into_iter().enumerate() {
        let (row, column) = grid_cell(index);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        draw_field(
            frame,
            columns[column],
            form,
            field,
            form.active_field_index == index,
            mask_passwords,
        );
    }

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[1])[0];
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_active(),
        Some(Color::Green),
    );

    draw_help_text(
        frame,
        chunks[2],
        &[
            ("Tab", "next"),
            ("←/→", "select"),
            ("Space", "check"),
            (SUBMIT_SHORTCUT, "submit"),
            (RESET_SHORTCUT, "clear"),
            ("Esc", "back"),
        ],
    );
}
