//! Editing state for the builder and fill-in views

use crate::model::{
    is_iso_date, FieldType, FieldUpdate, FieldValue, Form, FormField, ResponseValues,
};

/// Trait for common focus-cycling operations
pub trait FocusCycle {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What the builder cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderFocus {
    Title,
    Description,
    /// Label of the field at this index
    Label(usize),
    /// One option of a select/radio field
    Option { field: usize, option: usize },
}

/// Builder state: a working copy of the form being edited
#[derive(Debug, Clone)]
pub struct BuilderForm {
    pub form: Form,
    pub active_field_index: usize,
}

impl BuilderForm {
    /// Start editing a copy of `form` (a draft for new forms)
    pub fn new(form: Form) -> Self {
        Self {
            form,
            active_field_index: 0,
        }
    }

    /// Focusable inputs in display order
    pub fn targets(&self) -> Vec<BuilderFocus> {
        let mut targets = vec![BuilderFocus::Title, BuilderFocus::Description];
        for (field, f) in self.form.fields.iter().enumerate() {
            targets.push(BuilderFocus::Label(field));
            targets.extend((0..f.options().len()).map(|option| BuilderFocus::Option { field, option }));
        }
        targets
    }

    pub fn focus(&self) -> BuilderFocus {
        self.targets()
            .get(self.active_field_index)
            .copied()
            .unwrap_or(BuilderFocus::Title)
    }

    fn focus_on(&mut self, target: BuilderFocus) {
        if let Some(index) = self.targets().iter().position(|t| *t == target) {
            self.active_field_index = index;
        }
    }

    /// Index of the field the cursor is inside, if any
    pub fn focused_field(&self) -> Option<usize> {
        match self.focus() {
            BuilderFocus::Label(field) | BuilderFocus::Option { field, .. } => Some(field),
            BuilderFocus::Title | BuilderFocus::Description => None,
        }
    }

    fn focused_field_id(&self) -> Option<String> {
        self.focused_field()
            .and_then(|i| self.form.fields.get(i))
            .map(|f| f.id.clone())
    }

    /// Text currently under the cursor
    pub fn focused_text(&self) -> String {
        match self.focus() {
            BuilderFocus::Title => self.form.title.clone(),
            BuilderFocus::Description => self.form.description.clone(),
            BuilderFocus::Label(field) => self
                .form
                .fields
                .get(field)
                .map(|f| f.label.clone())
                .unwrap_or_default(),
            BuilderFocus::Option { field, option } => self
                .form
                .fields
                .get(field)
                .and_then(|f| f.options().get(option).cloned())
                .unwrap_or_default(),
        }
    }

    fn set_focused_text(&mut self, text: String) {
        match self.focus() {
            BuilderFocus::Title => self.form.title = text,
            BuilderFocus::Description => self.form.description = text,
            BuilderFocus::Label(field) => {
                if let Some(id) = self.form.fields.get(field).map(|f| f.id.clone()) {
                    self.form.update_field(&id, FieldUpdate::label(text));
                }
            }
            BuilderFocus::Option { field, option } => {
                if let Some(id) = self.form.fields.get(field).map(|f| f.id.clone()) {
                    self.form.set_option(&id, option, text);
                }
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        let mut text = self.focused_text();
        text.push(c);
        self.set_focused_text(text);
    }

    pub fn pop_char(&mut self) {
        let mut text = self.focused_text();
        text.pop();
        self.set_focused_text(text);
    }

    /// Append a field and move the cursor to its label
    pub fn add_field(&mut self, field_type: FieldType) {
        self.form.add_field(field_type);
        self.focus_on(BuilderFocus::Label(self.form.fields.len() - 1));
    }

    /// Toggle "required" on the focused field
    pub fn toggle_required(&mut self) -> bool {
        let Some(index) = self.focused_field() else {
            return false;
        };
        let Some(field) = self.form.fields.get(index) else {
            return false;
        };
        let (id, required) = (field.id.clone(), field.required);
        self.form.update_field(&id, FieldUpdate::required(!required))
    }

    /// Add an empty option to the focused select/radio field and focus it
    pub fn add_option(&mut self) -> bool {
        let (Some(index), Some(id)) = (self.focused_field(), self.focused_field_id()) else {
            return false;
        };
        if !self.form.add_option(&id) {
            return false;
        }
        let option = self.form.fields[index].options().len() - 1;
        self.focus_on(BuilderFocus::Option {
            field: index,
            option,
        });
        true
    }

    /// Remove the focused field and keep the cursor in range
    pub fn remove_focused_field(&mut self) -> bool {
        let Some(id) = self.focused_field_id() else {
            return false;
        };
        let removed = self.form.remove_field(&id);
        let count = self.field_count();
        self.active_field_index = self.active_field_index.min(count.saturating_sub(1));
        removed
    }
}

impl FocusCycle for BuilderForm {
    fn field_count(&self) -> usize {
        self.targets().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}

/// Fill-in state: raw input per field plus the typed values collected so far
#[derive(Debug, Clone)]
pub struct FillForm {
    pub form: Form,
    /// Raw text typed into each field, by field index
    pub inputs: Vec<String>,
    /// Only fields the user touched have an entry
    pub values: ResponseValues,
    pub active_field_index: usize,
}

impl FillForm {
    pub fn new(form: Form) -> Self {
        let inputs = vec![String::new(); form.fields.len()];
        Self {
            form,
            inputs,
            values: ResponseValues::new(),
            active_field_index: 0,
        }
    }

    pub fn active(&self) -> Option<&FormField> {
        self.form.fields.get(self.active_field_index)
    }

    fn set_value(&mut self, field_id: String, value: Option<FieldValue>) {
        match value {
            Some(value) => {
                self.values.insert(field_id, value);
            }
            None => {
                self.values.remove(&field_id);
            }
        }
    }

    /// Type a character into the active text/number/date field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.active().cloned() else {
            return;
        };
        let input = &mut self.inputs[self.active_field_index];
        match field.field_type {
            FieldType::Text => input.push(c),
            FieldType::Number if c.is_ascii_digit() || c == '.' || c == '-' => input.push(c),
            FieldType::Date if c.is_ascii_digit() || c == '-' => input.push(c),
            FieldType::Checkbox if c == ' ' => {
                self.toggle_checkbox();
                return;
            }
            _ => return,
        }
        self.sync_input(&field);
    }

    pub fn pop_char(&mut self) {
        let Some(field) = self.active().cloned() else {
            return;
        };
        if field.field_type.has_options() || field.field_type == FieldType::Checkbox {
            return;
        }
        self.inputs[self.active_field_index].pop();
        self.sync_input(&field);
    }

    fn sync_input(&mut self, field: &FormField) {
        let input = self.inputs[self.active_field_index].clone();
        let value = match field.field_type {
            FieldType::Text => Some(FieldValue::Text(input)),
            // Partial input such as "-" or "2024-0" has no value yet
            FieldType::Date => is_iso_date(&input).then(|| FieldValue::Date(input)),
            FieldType::Number => input.parse().ok().map(FieldValue::Number),
            FieldType::Checkbox | FieldType::Select | FieldType::Radio => return,
        };
        self.set_value(field.id.clone(), value);
    }

    pub fn toggle_checkbox(&mut self) {
        let Some(field) = self.active() else {
            return;
        };
        if field.field_type != FieldType::Checkbox {
            return;
        }
        let id = field.id.clone();
        let checked = matches!(self.values.get(&id), Some(FieldValue::Checked(true)));
        self.set_value(id, Some(FieldValue::Checked(!checked)));
    }

    /// Index of the chosen option of a select/radio field
    pub fn selected_option(&self, field: &FormField) -> Option<usize> {
        match self.values.get(&field.id) {
            Some(FieldValue::Text(chosen)) => field.options().iter().position(|o| o == chosen),
            _ => None,
        }
    }

    /// Move the active select/radio field to the next (or previous) option
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active().cloned() else {
            return;
        };
        let options = field.options();
        if !field.field_type.has_options() || options.is_empty() {
            return;
        }
        let next = match (self.selected_option(&field), forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.set_value(field.id.clone(), Some(FieldValue::Text(options[next].clone())));
    }

    /// Display text for the field at `index`
    pub fn display_value(&self, index: usize) -> String {
        let Some(field) = self.form.fields.get(index) else {
            return String::new();
        };
        match field.field_type {
            FieldType::Checkbox => {
                let checked = matches!(self.values.get(&field.id), Some(FieldValue::Checked(true)));
                format!("[{}] {}", if checked { "x" } else { " " }, field.label)
            }
            FieldType::Select | FieldType::Radio => match self.values.get(&field.id) {
                Some(FieldValue::Text(chosen)) => format!("◂ {chosen} ▸"),
                _ => "Select an option".to_string(),
            },
            _ => self.inputs.get(index).cloned().unwrap_or_default(),
        }
    }

    /// Required fields still missing a value
    pub fn missing_required(&self) -> Vec<&FormField> {
        self.form.missing_required(&self.values)
    }

    /// Number and date fields whose typed text does not parse
    pub fn invalid_inputs(&self) -> Vec<&FormField> {
        self.form
            .fields
            .iter()
            .zip(&self.inputs)
            .filter(|(field, input)| {
                !input.is_empty()
                    && match field.field_type {
                        FieldType::Number => input.parse::<f64>().is_err(),
                        FieldType::Date => !is_iso_date(input),
                        _ => false,
                    }
            })
            .map(|(field, _)| field)
            .collect()
    }
}

impl FocusCycle for FillForm {
    fn field_count(&self) -> usize {
        self.form.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(types: &[FieldType]) -> Form {
        let mut form = Form::draft();
        for t in types {
            form.add_field(*t);
        }
        form
    }

    mod builder_form {
        use super::*;

        #[test]
        fn test_new_starts_on_title() {
            let builder = BuilderForm::new(Form::draft());
            assert_eq!(builder.focus(), BuilderFocus::Title);
            assert_eq!(builder.field_count(), 2);
        }

        #[test]
        fn test_typing_edits_title_and_description() {
            let mut builder = BuilderForm::new(Form::draft());
            for c in "Poll".chars() {
                builder.push_char(c);
            }
            builder.next_field();
            builder.push_char('x');
            builder.push_char('y');
            builder.pop_char();

            assert_eq!(builder.form.title, "Poll");
            assert_eq!(builder.form.description, "x");
        }

        #[test]
        fn test_add_field_focuses_label() {
            let mut builder = BuilderForm::new(Form::draft());
            builder.add_field(FieldType::Number);
            assert_eq!(builder.focus(), BuilderFocus::Label(0));

            builder.pop_char();
            builder.push_char('!');
            assert_eq!(builder.form.fields[0].label, "New number fiel!");
        }

        #[test]
        fn test_targets_include_options() {
            let mut builder = BuilderForm::new(Form::draft());
            builder.add_field(FieldType::Radio);
            assert_eq!(
                builder.targets(),
                vec![
                    BuilderFocus::Title,
                    BuilderFocus::Description,
                    BuilderFocus::Label(0),
                    BuilderFocus::Option { field: 0, option: 0 },
                ]
            );
        }

        #[test]
        fn test_add_option_and_edit_it() {
            let mut builder = BuilderForm::new(Form::draft());
            builder.add_field(FieldType::Select);
            assert!(builder.add_option());
            assert_eq!(builder.focus(), BuilderFocus::Option { field: 0, option: 1 });
            for c in "Blue".chars() {
                builder.push_char(c);
            }
            assert_eq!(builder.form.fields[0].options(), ["Option 1".to_string(), "Blue".to_string()]);
        }

        #[test]
        fn test_add_option_on_text_field_is_rejected() {
            let mut builder = BuilderForm::new(Form::draft());
            builder.add_field(FieldType::Text);
            assert!(!builder.add_option());
        }

        #[test]
        fn test_toggle_required_needs_a_field() {
            let mut builder = BuilderForm::new(Form::draft());
            assert!(!builder.toggle_required());
            builder.add_field(FieldType::Checkbox);
            assert!(builder.toggle_required());
            assert!(builder.form.fields[0].required);
            assert!(builder.toggle_required());
            assert!(!builder.form.fields[0].required);
        }

        #[test]
        fn test_remove_focused_field_clamps_cursor() {
            let mut builder = BuilderForm::new(Form::draft());
            builder.add_field(FieldType::Text);
            builder.add_field(FieldType::Select);
            builder.next_field(); // option of the select
            assert!(builder.remove_focused_field());
            assert_eq!(builder.form.fields.len(), 1);
            assert!(builder.active_field_index < builder.field_count());
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut builder = BuilderForm::new(Form::draft());
            builder.prev_field();
            assert_eq!(builder.focus(), BuilderFocus::Description);
        }
    }

    mod fill_form {
        use super::*;

        #[test]
        fn test_untouched_fields_have_no_value() {
            let fill = FillForm::new(form_with(&[FieldType::Text, FieldType::Checkbox]));
            assert!(fill.values.is_empty());
        }

        #[test]
        fn test_text_input() {
            let mut fill = FillForm::new(form_with(&[FieldType::Text]));
            for c in "Alice".chars() {
                fill.push_char(c);
            }
            let id = fill.form.fields[0].id.clone();
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Text("Alice".into())));
        }

        #[test]
        fn test_number_input_filters_and_parses() {
            let mut fill = FillForm::new(form_with(&[FieldType::Number]));
            let id = fill.form.fields[0].id.clone();

            fill.push_char('-');
            assert!(fill.values.get(&id).is_none());

            for c in "4a2".chars() {
                fill.push_char(c);
            }
            assert_eq!(fill.inputs[0], "-42");
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Number(-42.0)));

            fill.pop_char();
            fill.pop_char();
            fill.pop_char();
            assert!(fill.values.get(&id).is_none());
        }

        #[test]
        fn test_date_input() {
            let mut fill = FillForm::new(form_with(&[FieldType::Date]));
            let id = fill.form.fields[0].id.clone();
            for c in "2024-02".chars() {
                fill.push_char(c);
            }
            assert!(fill.values.get(&id).is_none());

            for c in "-2x9".chars() {
                fill.push_char(c);
            }
            assert_eq!(fill.inputs[0], "2024-02-29");
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Date("2024-02-29".into())));
        }

        #[test]
        fn test_invalid_inputs() {
            let mut fill = FillForm::new(form_with(&[
                FieldType::Number,
                FieldType::Date,
                FieldType::Text,
            ]));
            assert!(fill.invalid_inputs().is_empty());

            for c in "1.2.3".chars() {
                fill.push_char(c);
            }
            fill.next_field();
            for c in "2023-02-29".chars() {
                fill.push_char(c);
            }
            fill.next_field();
            fill.push_char('x');

            let invalid: Vec<_> = fill.invalid_inputs().iter().map(|f| f.field_type).collect();
            assert_eq!(invalid, vec![FieldType::Number, FieldType::Date]);
            assert_eq!(fill.values.len(), 1);
        }

        #[test]
        fn test_checkbox_toggles_with_space() {
            let mut fill = FillForm::new(form_with(&[FieldType::Checkbox]));
            let id = fill.form.fields[0].id.clone();
            fill.push_char(' ');
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Checked(true)));
            fill.push_char(' ');
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Checked(false)));
            fill.push_char('x');
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Checked(false)));
        }

        #[test]
        fn test_cycle_option_wraps() {
            let mut form = form_with(&[FieldType::Radio]);
            let id = form.fields[0].id.clone();
            form.add_option(&id);
            form.set_option(&id, 1, "Option 2".to_string());
            let mut fill = FillForm::new(form);

            fill.cycle_option(true);
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Text("Option 1".into())));
            fill.cycle_option(true);
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Text("Option 2".into())));
            fill.cycle_option(true);
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Text("Option 1".into())));
            fill.cycle_option(false);
            assert_eq!(fill.values.get(&id), Some(&FieldValue::Text("Option 2".into())));
        }

        #[test]
        fn test_display_values() {
            let mut fill = FillForm::new(form_with(&[FieldType::Checkbox, FieldType::Select]));
            assert_eq!(fill.display_value(0), "[ ] New checkbox field");
            assert_eq!(fill.display_value(1), "Select an option");
            fill.toggle_checkbox();
            fill.next_field();
            fill.cycle_option(true);
            assert_eq!(fill.display_value(0), "[x] New checkbox field");
            assert_eq!(fill.display_value(1), "◂ Option 1 ▸");
        }

        #[test]
        fn test_missing_required() {
            let mut form = form_with(&[FieldType::Text]);
            form.fields[0].required = true;
            let mut fill = FillForm::new(form);
            assert_eq!(fill.missing_required().len(), 1);
            fill.push_char('a');
            assert!(fill.missing_required().is_empty());
        }

        #[test]
        fn test_next_field_on_empty_form_is_noop() {
            let mut fill = FillForm::new(Form::draft());
            fill.next_field();
            fill.prev_field();
            assert_eq!(fill.active_field_index, 0);
            fill.push_char('a');
            assert!(fill.values.is_empty());
        }
    }
}
