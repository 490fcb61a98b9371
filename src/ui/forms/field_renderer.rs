//! Field rendering utilities for forms

use crate::state::{gender_label, FieldKind, FieldName, FieldStatus, SignupForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder shown in an empty date field
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Text shown inside a field box
pub fn display_value(form: &SignupForm, field: FieldName, mask_passwords: bool) -> String {
    let record = &form.record;
    match field.kind() {
        FieldKind::Password if mask_passwords => "•".repeat(record.text(field).chars().count()),
        FieldKind::Select => format!("‹ {} ›", gender_label(&record.gender)),
        FieldKind::Checkbox => {
            let mark = if record.agree_to_terms { "x" } else { " " };
            format!("[{mark}] {}", field.label())
        }
        _ => record.text(field).to_string(),
    }
}

/// Border color for a field: focus wins, then validation state
pub fn border_color(is_active: bool, status: FieldStatus) -> Color {
    match (is_active, status) {
        (true, _) => Color::Cyan,
        (false, FieldStatus::Invalid) => Color::Red,
        (false, FieldStatus::Valid) => Color::Green,
        (false, FieldStatus::Untouched) => Color::DarkGray,
    }
}

/// Draw one sign-up field; an error message is written on the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    field: FieldName,
    is_active: bool,
    mask_passwords: bool,
) {
    let value = display_value(form, field, mask_passwords);
    let status = form.status(field);

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if value.is_empty() && field.kind() == FieldKind::Date {
        spans.push(Span::styled(
            DATE_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value, value_style));
    }
    if is_active && field.is_typed() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let title = match field.kind() {
        FieldKind::Checkbox => " Terms ".to_string(),
        _ => format!(" {} ", field.label()),
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, status)));

    if let Some(message) = form.errors.get(field) {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a one-line help text with highlighted keys
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in entries {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ValidationMode;

    fn blank_form() -> SignupForm {
        SignupForm::new(ValidationMode::OnSubmit)
    }

    #[test]
    fn test_password_masked_by_char_count() {
        let mut form = blank_form();
        form.record.password = "Abc1!".to_string();
        assert_eq!(display_value(&form, FieldName::Password, true), "•••••");
        assert_eq!(display_value(&form, FieldName::Password, false), "Abc1!");
    }

    #[test]
    fn test_select_shows_label() {
        let mut form = blank_form();
        assert_eq!(
            display_value(&form, FieldName::Gender, true),
            "‹ Select Gender ›"
        );
        form.record.gender = "other".to_string();
        assert_eq!(display_value(&form, FieldName::Gender, true), "‹ Other ›");
    }

    #[test]
    fn test_checkbox_mark() {
        let mut form = blank_form();
        form.record.agree_to_terms = true;
        assert_eq!(
            display_value(&form, FieldName::AgreeToTerms, true),
            "[x] I agree to the terms and conditions"
        );
    }

    #[test]
    fn test_text_passes_through() {
        let mut form = blank_form();
        form.record.email = "a@b.com".to_string();
        assert_eq!(display_value(&form, FieldName::Email, true), "a@b.com");
    }

    #[test]
    fn test_border_colors() {
        assert_eq!(border_color(true, FieldStatus::Invalid), Color::Cyan);
        assert_eq!(border_color(false, FieldStatus::Invalid), Color::Red);
        assert_eq!(border_color(false, FieldStatus::Valid), Color::Green);
        assert_eq!(border_color(false, FieldStatus::Untouched), Color::DarkGray);
    }
}
