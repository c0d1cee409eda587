//! Form field definitions and typed response values

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Calendar format of date answers
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `input` is a real calendar date in `YYYY-MM-DD` form
pub fn is_iso_date(input: &str) -> bool {
    input.len() == 10 && NaiveDate::parse_from_str(input, DATE_FORMAT).is_ok()
}

/// Kind of input a field collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Checkbox,
    Select,
    Radio,
}

impl FieldType {
    /// All field types in builder order
    pub const ALL: [FieldType; 6] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Date,
        FieldType::Checkbox,
        FieldType::Select,
        FieldType::Radio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Radio => "radio",
        }
    }

    /// Label used on builder buttons
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Checkbox => "Checkbox",
            Self::Select => "Dropdown",
            Self::Radio => "Radio",
        }
    }

    /// Select and radio fields carry a list of options
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    /// Only free-form inputs show a placeholder
    pub fn has_placeholder(&self) -> bool {
        matches!(self, Self::Text | Self::Number | Self::Date)
    }

    /// Whether a submitted value has the variant this field type expects.
    /// Dates must be blank or `YYYY-MM-DD`.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::Text | Self::Select | Self::Radio, FieldValue::Text(_))
            | (Self::Number, FieldValue::Number(_))
            | (Self::Checkbox, FieldValue::Checked(_)) => true,
            (Self::Date, FieldValue::Date(date)) => date.is_empty() || is_iso_date(date),
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe submitted values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    /// Text, select and radio answers
    Text(String),
    Number(f64),
    /// Calendar date as entered (`YYYY-MM-DD`)
    Date(String),
    Checked(bool),
}

impl FieldValue {
    /// True when the value counts as "not answered" for required checks
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Date(s) => s.trim().is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::Checked(checked) => !checked,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) | FieldValue::Date(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Checked(checked) => checked.to_string(),
        }
    }
}

/// One input slot of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FormField {
    /// Create a new field of the given type with builder defaults
    pub fn new(field_type: FieldType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            field_type,
            label: format!("New {} field", field_type),
            required: false,
            options: field_type
                .has_options()
                .then(|| vec!["Option 1".to_string()]),
            placeholder: None,
        }
    }

    /// Options of a select/radio field (empty for other types)
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// Partial update applied to a field by the builder
#[derive(Debug, Clone, Default)]
pub struct FieldUpdate {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub placeholder: Option<String>,
}

impl FieldUpdate {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Default::default()
        }
    }

    pub fn options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Default::default()
        }
    }

    /// Apply the update, ignoring parts that don't fit the field's type
    pub fn apply(self, field: &mut FormField) {
        if let Some(label) = self.label {
            field.label = label;
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(options) = self.options {
            if field.field_type.has_options() {
                field.options = Some(options);
            }
        }
        if let Some(placeholder) = self.placeholder {
            if field.field_type.has_placeholder() {
                field.placeholder = Some(placeholder);
            }
        }
    }
}
