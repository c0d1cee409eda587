//! Form definitions and builder operations

use super::field::{FieldType, FieldUpdate, FieldValue, FormField};
use super::response::ResponseValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, ordered collection of field definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// Unsaved form edited by the "new form" builder. The store assigns
    /// the id and timestamps when it is saved.
    pub fn draft() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            fields: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A draft has never been through the store
    pub fn is_draft(&self) -> bool {
        self.id.is_empty()
    }

    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    fn field_mut(&mut self, field_id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == field_id)
    }

    /// Append a new field with builder defaults
    pub fn add_field(&mut self, field_type: FieldType) -> &FormField {
        self.fields.push(FormField::new(field_type));
        &self.fields[self.fields.len() - 1]
    }

    /// Apply a partial update to a field. Returns false if the field is unknown.
    pub fn update_field(&mut self, field_id: &str, update: FieldUpdate) -> bool {
        match self.field_mut(field_id) {
            Some(field) => {
                update.apply(field);
                true
            }
            None => false,
        }
    }

    pub fn remove_field(&mut self, field_id: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f.id != field_id);
        self.fields.len() != before
    }

    /// Append an empty option to a select/radio field
    pub fn add_option(&mut self, field_id: &str) -> bool {
        match self.field_mut(field_id) {
            Some(field) if field.field_type.has_options() => {
                field.options.get_or_insert_with(Vec::new).push(String::new());
                true
            }
            _ => false,
        }
    }

    pub fn set_option(&mut self, field_id: &str, index: usize, value: String) -> bool {
        let Some(field) = self.field_mut(field_id) else {
            return false;
        };
        match field.options.as_mut().and_then(|opts| opts.get_mut(index)) {
            Some(option) => {
                *option = value;
                true
            }
            None => false,
        }
    }

    /// Required fields that have no usable value in `values`
    pub fn missing_required(&self, values: &ResponseValues) -> Vec<&FormField> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| values.get(&f.id).map_or(true, FieldValue::is_empty))
            .collect()
    }
}
