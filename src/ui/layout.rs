//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::routes::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and main content, reserving the bottom
/// line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with the current route path
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Line::from(vec![
        Span::styled(
            " Form Builder ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.state.current_route.path(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // Route-specific hints
    let hints = get_view_hints(&app.state.current_route);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current route
fn get_view_hints(route: &Route) -> String {
    match route {
        Route::List => {
            "j/k:nav  Enter:fill  n:new  e:edit  r:responses  d:delete  y:share  q:quit"
                .to_string()
        }
        Route::NewForm | Route::Edit(_) => format!(
            "Tab:next  F1-F6:add field  ^R:required  ^O:option  ^X:remove  {SAVE_SHORTCUT}:save  Esc:cancel"
        ),
        Route::Fill(_) => format!(
            "Tab:next  Space:toggle  ←/→:choose  {SAVE_SHORTCUT}:submit  Esc:cancel"
        ),
        Route::Responses(_) => "j/k:scroll  x:export CSV  Esc:back".to_string(),
    }
}
