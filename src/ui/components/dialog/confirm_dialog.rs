//! Confirmation dialog for deleting a form

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::state::PendingDeleteAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the delete confirmation, naming how many responses go with the form
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDeleteAction) {
    let message = delete_message(action);

    let options = [(false, "Cancel", Color::White), (true, "Delete", Color::Red)]
        .into_iter()
        .map(|(is_delete, label, color)| {
            let is_selected = action.selected_option == is_delete;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{prefix}{label}"), style))
        })
        .collect();

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            accent: Color::Red,
            message: &message,
            options,
            hint: key_hint(&[("↑↓", "select"), ("Enter", "confirm"), ("Esc", "cancel")]),
            max_width: 56,
        },
    );
}

fn delete_message(action: &PendingDeleteAction) -> String {
    let title = if action.title.is_empty() {
        "this untitled form"
    } else {
        action.title.as_str()
    };
    match action.response_count {
        0 => format!("Delete \"{title}\"?"),
        1 => format!("Delete \"{title}\" and its 1 response?"),
        n => format!("Delete \"{title}\" and all {n} responses?"),
    }
}
