//! Form list view

use super::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw all forms in creation order
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let forms = app.store.forms();
    let block = Block::default()
        .title(format!(" Forms ({}) ", forms.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if forms.is_empty() {
        let content = Paragraph::new("No forms yet.\nPress 'n' to create a new form.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = forms
        .iter()
        .enumerate()
        .map(|(i, form)| {
            let selected = i == app.state.selected_index;
            let title_style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let title = if form.title.is_empty() {
                "(untitled)"
            } else {
                form.title.as_str()
            };
            let counts = format!(
                "  {} fields · {} responses",
                form.fields.len(),
                app.store.response_count(&form.id)
            );

            let mut lines = vec![Line::from(vec![
                Span::styled(if selected { "▸ " } else { "  " }, title_style),
                Span::styled(title.to_string(), title_style),
                Span::styled(counts, Style::default().fg(Color::DarkGray)),
            ])];
            if !form.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", form.description),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
