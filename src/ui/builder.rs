//! Form builder view

use super::forms::draw_field_with_value;
use super::widgets::window_start;
use crate::app::App;
use crate::model::FieldType;
use crate::state::{BuilderFocus, BuilderForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the builder for a new or existing form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(builder) = &app.state.builder else {
        return;
    };

    let heading = if builder.form.is_draft() {
        " Create New Form "
    } else {
        " Edit Form "
    };
    let outer = Block::default()
        .title(heading)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Description
            Constraint::Length(1), // Field palette
            Constraint::Min(0),    // Fields
        ])
        .split(inner);

    let focus = builder.focus();
    draw_field_with_value(
        frame,
        chunks[0],
        "Form Title",
        &builder.form.title,
        Some("Untitled form"),
        focus == BuilderFocus::Title,
    );
    draw_field_with_value(
        frame,
        chunks[1],
        "Description",
        &builder.form.description,
        None,
        focus == BuilderFocus::Description,
    );
    draw_palette(frame, chunks[2]);
    draw_fields(frame, chunks[3], builder);
}

/// One "Fn Type" entry per field type
fn draw_palette(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(" Add: ", Style::default().fg(Color::DarkGray))];
    for (i, field_type) in FieldType::ALL.iter().enumerate() {
        spans.push(Span::styled(
            format!("F{}", i + 1),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}  ", field_type.button_label()),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_fields(frame: &mut Frame, area: Rect, builder: &BuilderForm) {
    let block = Block::default()
        .title(format!(" Fields ({}) ", builder.form.fields.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if builder.form.fields.is_empty() {
        let empty = Paragraph::new("No fields yet. Add one with F1-F6.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let focus = builder.focus();
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    let mut focus_line = 0;

    for (index, field) in builder.form.fields.iter().enumerate() {
        let label_focused = focus == BuilderFocus::Label(index);
        if label_focused {
            focus_line = lines.len();
        }
        let mut spans = vec![
            Span::styled(
                format!("{:>2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("[{}] ", field.field_type.button_label()),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                field.label.clone(),
                if label_focused {
                    active
                } else {
                    Style::default().fg(Color::White)
                },
            ),
        ];
        if label_focused {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        if field.required {
            spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        lines.push(Line::from(spans));

        let bullet = if field.field_type == FieldType::Radio {
            "○"
        } else {
            "•"
        };
        for (option_index, option) in field.options().iter().enumerate() {
            let option_focused = focus
                == BuilderFocus::Option {
                    field: index,
                    option: option_index,
                };
            if option_focused {
                focus_line = lines.len();
            }
            let text = if option.is_empty() && !option_focused {
                format!("Option {}", option_index + 1)
            } else {
                option.clone()
            };
            let mut spans = vec![
                Span::styled(format!("      {bullet} "), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    text,
                    if option_focused {
                        active
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
            ];
            if option_focused {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            lines.push(Line::from(spans));
        }
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = window_start(focus_line, visible) as u16;
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}
