//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a boxed single-line input with its label in the border.
///
/// Inactive empty inputs show `placeholder`, or `(empty)` when there is none.
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: Option<&str>,
    is_active: bool,
) {
    let color = if is_active { Color::Cyan } else { Color::DarkGray };

    let (display_value, value_style) = match (value.is_empty(), is_active) {
        (true, false) => (
            placeholder.unwrap_or("(empty)"),
            Style::default().fg(Color::DarkGray),
        ),
        _ => (value, Style::default().fg(if is_active { Color::White } else { Color::Gray })),
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.block(block), area);
}
