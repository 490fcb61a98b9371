//! Boxed buttons: the form's submit control and the view sidebar

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a boxed button
pub const BUTTON_HEIGHT: u16 = 3;

/// (border, label) styles. Focus wins over the accent color.
fn button_styles(focused: bool, accent: Option<Color>) -> (Style, Style) {
    if focused {
        let focus = Style::default().fg(Color::Cyan);
        return (focus, focus.add_modifier(Modifier::BOLD));
    }
    let label = accent.map_or_else(Style::default, |color| Style::default().fg(color));
    (Style::default().fg(Color::DarkGray), label)
}

/// Render a boxed button with a centered label
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    focused: bool,
    accent: Option<Color>,
) {
    let (border, text) = button_styles(focused, accent);
    let button = Paragraph::new(Span::styled(label, text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}

/// Sidebar entry: function key highlighted, then the view name
fn sidebar_line<'a>(key: &'a str, label: &'a str, is_current: bool) -> Line<'a> {
    let marker = if is_current { "▸" } else { " " };
    let label_style = if is_current {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(label, label_style),
    ])
}

/// Render a sidebar button for switching views
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    is_current: bool,
) {
    let (border, _) = button_styles(is_current, None);
    let button = Paragraph::new(sidebar_line(key, label, is_current))
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}
