//! Application state definitions

use super::forms::{BuilderForm, FillForm};
use crate::routes::Route;
use std::collections::VecDeque;

/// Pending delete action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteAction {
    pub form_id: String,
    pub title: String,
    /// Responses removed along with the form
    pub response_count: usize,
    /// false = Cancel, true = Delete
    pub selected_option: bool,
}

impl PendingDeleteAction {
    pub fn new(form_id: String, title: String, response_count: usize) -> Self {
        Self {
            form_id,
            title,
            response_count,
            selected_option: false,
        }
    }

    pub fn toggle(&mut self) {
        self.selected_option = !self.selected_option;
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_route: Route,
    pub route_history: Vec<Route>,

    // Selection
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Editing state of the builder and fill-in views
    pub builder: Option<BuilderForm>,
    pub fill: Option<FillForm>,

    // Dialogs
    pub pending_delete: Option<PendingDeleteAction>,
    errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Drop builder and fill-in state
    pub fn clear_forms(&mut self) {
        self.builder = None;
        self.fill = None;
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error shown in the dialog, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
