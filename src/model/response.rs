//! Submitted responses

use super::field::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Submitted values keyed by field id. Fields the user never touched have no entry.
pub type ResponseValues = BTreeMap<String, FieldValue>;

/// One submission against a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,
    pub responses: ResponseValues,
    pub submitted_at: DateTime<Utc>,
}

impl FormResponse {
    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.responses.get(field_id)
    }
}
