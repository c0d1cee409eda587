//! Responses table view

use crate::app::App;
use crate::export::{render_value, CheckboxStyle};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

/// Draw the submitted responses of the current form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.current_form() else {
        return;
    };
    let responses = app.store.get_form_responses(&form.id);

    let block = Block::default()
        .title(format!(" Responses - {} ({}) ", form.title, responses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if responses.is_empty() {
        let content = Paragraph::new("No responses yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let header = Row::new(
        std::iter::once("Submitted At".to_string()).chain(form.fields.iter().map(|f| f.label.clone())),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = responses.iter().skip(app.state.scroll_offset).map(|response| {
        let cells = std::iter::once(app.exporter.format_timestamp(&response.submitted_at)).chain(
            form.fields
                .iter()
                .map(|f| render_value(f, response.value(&f.id), CheckboxStyle::Glyph)),
        );
        Row::new(cells)
    });

    let widths = std::iter::once(Constraint::Length(24))
        .chain(form.fields.iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);
    frame.render_widget(table, area);
}
