//! UI module for rendering the TUI

mod builder;
mod components;
mod fill;
mod form_list;
mod forms;
mod layout;
mod responses;
mod widgets;

pub use widgets::render_scrollable_list;

use crate::app::App;
use crate::routes::Route;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current route
    match &app.state.current_route {
        Route::List => form_list::draw(frame, main_area, app),
        Route::NewForm | Route::Edit(_) => builder::draw(frame, main_area, app),
        Route::Fill(_) => fill::draw(frame, main_area, app),
        Route::Responses(_) => responses::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Modals last so they sit on top
    if let Some(action) = &app.state.pending_delete {
        render_confirm_dialog(frame, action);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
