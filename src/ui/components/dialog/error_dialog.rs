//! Error dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the oldest queued error
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message: error_message,
            options: Vec::new(),
            hint: key_hint(&[("Enter/Esc", "dismiss")]),
            max_width: 60,
        },
    );
}
