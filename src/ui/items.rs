//! Static item list view

use super::render_scrollable_list;
use crate::app::App;
use crate::state::{DataItem, DATA};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the item list with a detail line for the selection
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = DATA
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(item.name, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Data List ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    render_scrollable_list(frame, chunks[0], list, app.state.selected_index);

    if let Some(item) = DATA.get(app.state.selected_index) {
        let detail = Paragraph::new(detail_line(item)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(detail, chunks[1]);
    }
}

fn detail_line(item: &DataItem) -> Line<'static> {
    Line::from(vec![
        Span::styled(item.name, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  id {} · value {}", item.id, item.value),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
