//! Application state and core logic

use crate::config::TuiConfig;
use crate::export::CsvExporter;
use crate::model::{FieldType, Form};
use crate::platform::{ACTION_MODIFIER, PASTE_SHORTCUT};
use crate::routes::{share_link, Route};
use crate::state::{AppState, BuilderForm, FillForm, FocusCycle, PendingDeleteAction};
use crate::store::FormStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// In-memory forms and responses
    pub store: FormStore,
    pub config: TuiConfig,
    pub exporter: CsvExporter,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self::with_store(FormStore::new(), config)
    }

    pub fn with_store(store: FormStore, config: TuiConfig) -> Self {
        let exporter = CsvExporter::new(config.checkbox_style());
        Self {
            state: AppState::default(),
            store,
            config,
            exporter,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Form addressed by the current route
    pub fn current_form(&self) -> Option<&Form> {
        self.state
            .current_route
            .form_id()
            .and_then(|id| self.store.form(id))
    }

    /// Form under the cursor in the list view
    pub fn selected_form(&self) -> Option<&Form> {
        self.store.forms().get(self.state.selected_index)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_delete_dialog_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_route {
            Route::List => self.handle_list_key(key),
            Route::NewForm | Route::Edit(_) => self.handle_builder_key(key),
            Route::Fill(_) => self.handle_fill_key(key),
            Route::Responses(_) => self.handle_responses_key(key),
        }
        Ok(())
    }

    /// Navigate to a new route, preparing any editing state it needs
    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.state.current_route.path(), to = %route.path(), "Navigate");
        self.state.clear_forms();
        match &route {
            Route::NewForm => self.state.builder = Some(BuilderForm::new(Form::draft())),
            Route::Edit(id) => {
                let Some(form) = self.store.form(id).cloned() else {
                    self.push_error(format!("Form {id} no longer exists"));
                    return;
                };
                self.state.builder = Some(BuilderForm::new(form));
            }
            Route::Fill(id) => {
                let Some(form) = self.store.form(id).cloned() else {
                    self.push_error(format!("Form {id} no longer exists"));
                    return;
                };
                self.state.fill = Some(FillForm::new(form));
            }
            Route::Responses(id) => {
                if self.store.form(id).is_none() {
                    self.push_error(format!("Form {id} no longer exists"));
                    return;
                }
            }
            Route::List => {}
        }
        let previous = std::mem::replace(&mut self.state.current_route, route);
        self.state.route_history.push(previous);
        self.state.scroll_offset = 0;
    }

    /// Open a route given as a path such as `/new`
    pub fn open_path(&mut self, path: &str) {
        match Route::parse(path) {
            Some(Route::List) => {}
            Some(route) => self.navigate(route),
            None => self.push_error(format!("Unknown path: {path}")),
        }
    }

    /// Go back to the previous view, skipping editing views
    pub fn go_back(&mut self) {
        self.state.clear_forms();
        self.state.scroll_offset = 0;
        while let Some(route) = self.state.route_history.pop() {
            let gone = route.form_id().is_some_and(|id| self.store.form(id).is_none());
            if route.is_form_view() || gone {
                continue;
            }
            self.state.current_route = route;
            return;
        }
        self.state.current_route = Route::List;
    }

    /// Handle keys in the form list
    fn handle_list_key(&mut self, key: KeyEvent) {
        let count = self.store.forms().len();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(count),
            KeyCode::Char('n') => self.navigate(Route::NewForm),
            _ => {
                let Some(id) = self.selected_form().map(|f| f.id.clone()) else {
                    return;
                };
                match key.code {
                    KeyCode::Enter => self.navigate(Route::Fill(id)),
                    KeyCode::Char('e') => self.navigate(Route::Edit(id)),
                    KeyCode::Char('r') => self.navigate(Route::Responses(id)),
                    KeyCode::Char('d') => self.start_delete(&id),
                    KeyCode::Char('y') => self.copy_share_link(&id),
                    _ => {}
                }
            }
        }
    }

    fn start_delete(&mut self, form_id: &str) {
        let Some(form) = self.store.form(form_id) else {
            return;
        };
        self.state.pending_delete = Some(PendingDeleteAction::new(
            form.id.clone(),
            form.title.clone(),
            self.store.response_count(form_id),
        ));
    }

    /// Handle keys in the delete confirmation dialog
    fn handle_delete_dialog_key(&mut self, key: KeyEvent) {
        let Some(action) = self.state.pending_delete.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                action.toggle();
            }
            KeyCode::Esc => self.state.pending_delete = None,
            KeyCode::Enter => {
                let confirmed = action.selected_option;
                let form_id = action.form_id.clone();
                self.state.pending_delete = None;
                if confirmed {
                    self.delete_form(&form_id);
                }
            }
            _ => {}
        }
    }

    fn delete_form(&mut self, form_id: &str) {
        match self.store.delete_form(form_id) {
            Ok(removed) => {
                self.state.clamp_selection(self.store.forms().len());
                self.status_message = Some(format!("Deleted form and {removed} response(s)"));
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    /// Share link of a form under the configured base URL
    pub fn share_link(&self, form_id: &str) -> String {
        share_link(self.config.share_base_url(), form_id)
    }

    fn copy_share_link(&mut self, form_id: &str) {
        let link = self.share_link(form_id);
        match self.copy_to_clipboard(&link) {
            Ok(()) => {
                self.status_message = Some(format!("Copied {link} ({PASTE_SHORTCUT} to paste)"));
            }
            Err(e) => {
                warn!(error = %e, "Clipboard unavailable");
                self.push_error(format!("Failed to copy share link: {e}\n{link}"));
            }
        }
    }

    /// Handle keys in the builder
    fn handle_builder_key(&mut self, key: KeyEvent) {
        let action = key.modifiers.contains(ACTION_MODIFIER);
        match key.code {
            KeyCode::Esc => {
                self.go_back();
                return;
            }
            KeyCode::Char('s') if action => {
                self.save_builder();
                return;
            }
            _ => {}
        }

        let Some(builder) = self.state.builder.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => builder.next_field(),
            KeyCode::BackTab | KeyCode::Up => builder.prev_field(),
            KeyCode::F(n @ 1..=6) => builder.add_field(FieldType::ALL[usize::from(n) - 1]),
            KeyCode::Char('r') if action => {
                builder.toggle_required();
            }
            KeyCode::Char('o') if action => {
                if !builder.add_option() {
                    self.status_message = Some("Only dropdown and radio fields have options".into());
                }
            }
            KeyCode::Char('x') if action => {
                builder.remove_focused_field();
            }
            KeyCode::Backspace => builder.pop_char(),
            KeyCode::Char(c) if !action => builder.push_char(c),
            _ => {}
        }
    }

    /// Save the builder: a draft becomes a new form, anything else replaces
    /// the stored form.
    fn save_builder(&mut self) {
        let Some(builder) = self.state.builder.as_ref() else {
            return;
        };
        let form = builder.form.clone();
        if form.is_draft() {
            let created = self.store.create_form_from_draft(form);
            info!(form_id = %created.id, "Saved new form");
        } else if let Err(e) = self.store.update_form(form) {
            self.push_error(e.to_string());
            return;
        }
        self.status_message = Some("Form saved".into());
        self.go_back();
    }

    /// Handle keys in the fill-in view
    fn handle_fill_key(&mut self, key: KeyEvent) {
        let action = key.modifiers.contains(ACTION_MODIFIER);
        match key.code {
            KeyCode::Esc => {
                self.go_back();
                return;
            }
            KeyCode::Char('s') if action => {
                self.submit_fill();
                return;
            }
            _ => {}
        }

        let Some(fill) = self.state.fill.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => fill.next_field(),
            KeyCode::BackTab | KeyCode::Up => fill.prev_field(),
            KeyCode::Left => fill.cycle_option(false),
            KeyCode::Right => fill.cycle_option(true),
            KeyCode::Backspace => fill.pop_char(),
            KeyCode::Char(c) if !action => fill.push_char(c),
            _ => {}
        }
    }

    fn submit_fill(&mut self) {
        let Some(fill) = self.state.fill.as_ref() else {
            return;
        };
        let invalid: Vec<String> = fill
            .invalid_inputs()
            .iter()
            .map(|f| f.label.clone())
            .collect();
        if !invalid.is_empty() {
            self.push_error(format!("Please correct: {}", invalid.join(", ")));
            return;
        }
        let missing: Vec<String> = fill
            .missing_required()
            .iter()
            .map(|f| f.label.clone())
            .collect();
        if !missing.is_empty() {
            self.push_error(format!("Please fill in: {}", missing.join(", ")));
            return;
        }

        let form_id = fill.form.id.clone();
        let values = fill.values.clone();
        match self.store.submit_response(&form_id, values) {
            Ok(response) => {
                info!(form_id = %form_id, response_id = %response.id, "Response submitted");
                self.status_message = Some("Form submitted successfully!".into());
                self.state.clear_forms();
                self.state.route_history.clear();
                self.state.current_route = Route::List;
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    /// Handle keys in the responses view
    fn handle_responses_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.go_back(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self
                    .state
                    .current_route
                    .form_id()
                    .map_or(0, |id| self.store.response_count(id));
                if self.state.scroll_offset + 1 < count {
                    self.state.scroll_down();
                }
            }
            KeyCode::Char('x') => match self.export_csv() {
                Ok(Some(path)) => {
                    self.status_message = Some(format!("Exported {}", path.display()));
                }
                Ok(None) => {}
                Err(e) => self.push_error(format!("Export failed: {e}")),
            },
            _ => {}
        }
    }

    /// Write the current form's responses into the export directory
    pub fn export_csv(&self) -> Result<Option<PathBuf>> {
        let Some(form) = self.current_form() else {
            return Ok(None);
        };
        let responses = self.store.get_form_responses(&form.id);
        let export = self.exporter.export_file(form, &responses);
        let path = export.write_into(&self.config.export_dir())?;
        info!(form_id = %form.id, rows = responses.len(), path = %path.display(), "Exported responses");
        Ok(Some(path))
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;
    use crate::state::BuilderFocus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), ACTION_MODIFIER)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    /// App with one form holding a single required text field.
    /// Returns the app, the form id and the field id.
    fn app_with_form() -> (App, String, String) {
        let mut app = app();
        let mut draft = Form::draft();
        draft.title = "Poll".into();
        let field_id = draft.add_field(FieldType::Text).id.clone();
        draft.fields[0].required = true;
        let form = app.store.create_form_from_draft(draft);
        (app, form.id, field_id)
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!app().should_quit());
        }

        #[test]
        fn test_q_and_ctrl_c_quit() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());

            let mut app = App::new(TuiConfig::default());
            app.navigate(Route::NewForm);
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_navigate_saves_history() {
            let mut app = app();
            app.navigate(Route::NewForm);
            assert_eq!(app.state.current_route, Route::NewForm);
            assert_eq!(app.state.route_history, vec![Route::List]);
            assert!(app.state.builder.is_some());
        }

        #[test]
        fn test_go_back_skips_form_views() {
            let (mut app, form_id, _) = app_with_form();
            app.navigate(Route::Responses(form_id.clone()));
            app.navigate(Route::Fill(form_id.clone()));
            app.navigate(Route::Edit(form_id.clone()));

            app.go_back();
            assert_eq!(app.state.current_route, Route::Responses(form_id));
            assert!(app.state.builder.is_none());
        }

        #[test]
        fn test_go_back_empty_history_lands_on_list() {
            let mut app = app();
            app.go_back();
            assert_eq!(app.state.current_route, Route::List);
        }

        #[test]
        fn test_open_path() {
            let mut app = app();
            app.open_path("/new");
            assert_eq!(app.state.current_route, Route::NewForm);

            let mut app = App::new(TuiConfig::default());
            app.open_path("/settings");
            assert_eq!(app.state.current_route, Route::List);
            assert_eq!(app.state.current_error(), Some("Unknown path: /settings"));
        }

        #[test]
        fn test_navigate_to_missing_form_reports_error() {
            let mut app = app();
            app.navigate(Route::Edit("gone".into()));
            assert_eq!(app.state.current_route, Route::List);
            assert!(app.state.has_errors());

            app.handle_key(key(KeyCode::Char('n'))).unwrap();
            assert_eq!(app.state.current_route, Route::List);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_open_responses_of_missing_form_reports_error() {
            let mut app = app();
            app.open_path("/form/x/responses");
            assert_eq!(app.state.current_route, Route::List);
            assert_eq!(app.state.current_error(), Some("Form x no longer exists"));
        }

        #[test]
        fn test_list_keys_open_views() {
            let (mut app, form_id, _) = app_with_form();

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_route, Route::Fill(form_id.clone()));
            app.handle_key(key(KeyCode::Esc)).unwrap();

            app.handle_key(key(KeyCode::Char('e'))).unwrap();
            assert_eq!(app.state.current_route, Route::Edit(form_id.clone()));
            app.handle_key(key(KeyCode::Esc)).unwrap();

            app.handle_key(key(KeyCode::Char('r'))).unwrap();
            assert_eq!(app.state.current_route, Route::Responses(form_id));
        }

        #[test]
        fn test_share_link_uses_configured_base() {
            let config = TuiConfig {
                share_base_url: Some("https://forms.example.com/".into()),
                ..Default::default()
            };
            let app = App::new(config);
            assert_eq!(app.share_link("abc"), "https://forms.example.com/form/abc");
        }
    }

    mod builder {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_saved_through_builder() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('n'))).unwrap();
            type_str(&mut app, "Feedback");
            app.handle_key(key(KeyCode::F(5))).unwrap();
            app.handle_key(ctrl('r')).unwrap();
            app.handle_key(ctrl('o')).unwrap();
            type_str(&mut app, "Blue");
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.state.current_route, Route::List);
            assert_eq!(app.status_message.as_deref(), Some("Form saved"));
            let form = &app.store.forms()[0];
            assert!(!form.is_draft());
            assert_eq!(form.title, "Feedback");
            assert_eq!(form.fields.len(), 1);
            assert_eq!(form.fields[0].field_type, FieldType::Select);
            assert!(form.fields[0].required);
            assert_eq!(form.fields[0].options(), ["Option 1".to_string(), "Blue".to_string()]);
        }

        #[test]
        fn test_escape_discards_new_form() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('n'))).unwrap();
            type_str(&mut app, "Scratch");
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.store.forms().is_empty());
        }

        #[test]
        fn test_edit_updates_in_place() {
            let (mut app, form_id, _) = app_with_form();
            let created_at = app.store.forms()[0].created_at;

            app.handle_key(key(KeyCode::Char('e'))).unwrap();
            type_str(&mut app, "!");
            app.handle_key(key(KeyCode::F(4))).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.store.forms().len(), 1);
            let form = app.store.form(&form_id).unwrap();
            assert_eq!(form.title, "Poll!");
            assert_eq!(form.fields.len(), 2);
            assert_eq!(form.created_at, created_at);
        }

        #[test]
        fn test_save_after_form_deleted_reports_error() {
            let (mut app, form_id, _) = app_with_form();
            app.handle_key(key(KeyCode::Char('e'))).unwrap();
            app.store.delete_form(&form_id).unwrap();

            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.has_errors());
            assert!(app.store.forms().is_empty());
        }

        #[test]
        fn test_remove_field_key() {
            let mut app = app();
            app.navigate(Route::NewForm);
            app.handle_key(key(KeyCode::F(1))).unwrap();
            app.handle_key(key(KeyCode::F(2))).unwrap();
            let builder = app.state.builder.as_ref().unwrap();
            assert_eq!(builder.focus(), BuilderFocus::Label(1));

            app.handle_key(ctrl('x')).unwrap();
            let builder = app.state.builder.as_ref().unwrap();
            assert_eq!(builder.form.fields.len(), 1);
            assert_eq!(builder.form.fields[0].field_type, FieldType::Text);
        }

        #[test]
        fn test_option_on_text_field_shows_status() {
            let mut app = app();
            app.navigate(Route::NewForm);
            app.handle_key(key(KeyCode::F(1))).unwrap();
            app.handle_key(ctrl('o')).unwrap();
            assert!(app.status_message.is_some());
        }
    }

    mod fill {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_field_blocks_submit() {
            let (mut app, _, _) = app_with_form();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            assert!(app.state.has_errors());
            assert!(app.state.current_error().unwrap().contains("Please fill in"));
            assert!(app.store.responses().is_empty());
        }

        #[test]
        fn test_submit_records_response_and_returns_to_list() {
            let (mut app, form_id, field_id) = app_with_form();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_str(&mut app, "Alice");
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.state.current_route, Route::List);
            let responses = app.store.get_form_responses(&form_id);
            assert_eq!(responses.len(), 1);
            assert_eq!(
                responses[0].value(&field_id),
                Some(&FieldValue::Text("Alice".into()))
            );
            assert_eq!(
                app.status_message.as_deref(),
                Some("Form submitted successfully!")
            );
        }

        fn app_with_field(field_type: FieldType) -> (App, String) {
            let mut app = app();
            let mut draft = Form::draft();
            draft.add_field(field_type);
            draft.fields[0].label = "Answer".into();
            let form = app.store.create_form_from_draft(draft);
            app.navigate(Route::Fill(form.id.clone()));
            (app, form.id)
        }

        #[test]
        fn test_unparsable_number_blocks_submit() {
            let (mut app, form_id) = app_with_field(FieldType::Number);
            type_str(&mut app, "1.2.3");
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.state.current_error(), Some("Please correct: Answer"));
            assert!(app.store.get_form_responses(&form_id).is_empty());
            assert_eq!(app.state.current_route, Route::Fill(form_id));
        }

        #[test]
        fn test_malformed_date_blocks_submit() {
            let (mut app, form_id) = app_with_field(FieldType::Date);
            type_str(&mut app, "2024-13-01");
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.state.current_error(), Some("Please correct: Answer"));
            assert!(app.store.get_form_responses(&form_id).is_empty());
        }

        #[test]
        fn test_valid_date_is_submitted() {
            let (mut app, form_id) = app_with_field(FieldType::Date);
            type_str(&mut app, "2024-02-29");
            app.handle_key(ctrl('s')).unwrap();

            let responses = app.store.get_form_responses(&form_id);
            assert_eq!(responses.len(), 1);
            let field_id = &app.store.form(&form_id).unwrap().fields[0].id;
            assert_eq!(
                responses[0].value(field_id),
                Some(&FieldValue::Date("2024-02-29".into()))
            );
        }
    }

    mod delete {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_delete_cascades_after_confirmation() {
            let (mut app, form_id, field_id) = app_with_form();
            let values = [(field_id, FieldValue::Text("x".into()))].into_iter().collect();
            app.store.submit_response(&form_id, values).unwrap();
            let other = app.store.create_form("Other", "");

            app.handle_key(key(KeyCode::Char('d'))).unwrap();
            assert_eq!(app.state.pending_delete.as_ref().unwrap().response_count, 1);

            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert!(app.state.pending_delete.is_none());
            assert!(app.store.form(&form_id).is_none());
            assert!(app.store.get_form_responses(&form_id).is_empty());
            assert_eq!(app.store.forms().len(), 1);
            assert_eq!(app.store.forms()[0].id, other.id);
        }

        #[test]
        fn test_delete_cancelled_by_default() {
            let (mut app, _, _) = app_with_form();
            app.handle_key(key(KeyCode::Char('d'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.store.forms().len(), 1);
        }

        #[test]
        fn test_delete_last_form_clamps_selection() {
            let (mut app, _, _) = app_with_form();
            app.store.create_form("Second", "");
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Char('d'))).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.selected_index, 0);
        }
    }

    mod responses {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_export_writes_csv_file() {
            let dir = std::env::temp_dir().join(format!("form-app-{}", uuid::Uuid::new_v4()));
            let config = TuiConfig {
                export_dir: Some(dir.clone()),
                ..Default::default()
            };
            let mut app = App::new(config);
            let mut draft = Form::draft();
            draft.title = "Poll".into();
            draft.add_field(FieldType::Checkbox);
            draft.fields[0].label = "Agree".into();
            let form = app.store.create_form_from_draft(draft);

            app.navigate(Route::Responses(form.id));
            app.handle_key(key(KeyCode::Char('x'))).unwrap();

            let path = dir.join("Poll-responses.csv");
            assert_eq!(
                std::fs::read_to_string(&path).unwrap(),
                "\"Submitted At\",\"Agree\""
            );
            assert!(app.status_message.unwrap().contains("Poll-responses.csv"));
            std::fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_export_without_form_is_noop() {
            let app = app();
            assert!(app.export_csv().unwrap().is_none());
        }
    }
}
