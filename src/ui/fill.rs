//! Fill-in view

use super::forms::draw_field_with_value;
use super::widgets::window_start;
use crate::app::App;
use crate::model::FieldType;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw a form for filling in
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(fill) = &app.state.fill else {
        return;
    };
    let form = &fill.form;

    let outer = Block::default()
        .title(format!(" {} ", form.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let description_height = if form.description.is_empty() { 0 } else { 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(description_height), Constraint::Min(0)])
        .split(inner);

    if !form.description.is_empty() {
        frame.render_widget(
            Paragraph::new(form.description.as_str())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            chunks[0],
        );
    }

    if form.fields.is_empty() {
        frame.render_widget(
            Paragraph::new("This form has no fields.").style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
        return;
    }

    let visible = (chunks[1].height / FIELD_HEIGHT).max(1) as usize;
    let start = window_start(fill.active_field_index, visible);
    let shown: Vec<usize> = (start..form.fields.len()).take(visible).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(FIELD_HEIGHT); shown.len()])
        .split(chunks[1]);

    for (row, index) in rows.iter().zip(shown) {
        let field = &form.fields[index];
        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };
        let placeholder = match field.field_type {
            FieldType::Date => Some("YYYY-MM-DD"),
            FieldType::Checkbox | FieldType::Select | FieldType::Radio => None,
            FieldType::Text | FieldType::Number => field.placeholder.as_deref(),
        };
        draw_field_with_value(
            frame,
            *row,
            &label,
            &fill.display_value(index),
            placeholder,
            index == fill.active_field_index,
        );
    }
}
