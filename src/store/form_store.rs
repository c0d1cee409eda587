//! In-memory store for form definitions and their responses
//!
//! `FormStore` is the single owner of both collections. It keeps every
//! response attached to an existing form: deleting a form removes its
//! responses in the same call, and submissions against unknown forms are
//! rejected.

use super::clock::{Clock, SystemClock};
use super::error::StoreError;
use crate::model::{Form, FormResponse, ResponseValues};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Form and response collections, in creation and submission order
pub struct FormStore {
    forms: Vec<Form>,
    responses: Vec<FormResponse>,
    clock: Box<dyn Clock>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    /// Create an empty store using the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty store with a custom time source
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            forms: Vec::new(),
            responses: Vec::new(),
            clock,
        }
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn responses(&self) -> &[FormResponse] {
        &self.responses
    }

    /// Look up a form by id
    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == id)
    }

    fn new_form(&self, title: String, description: String) -> Form {
        let now = self.clock.now();
        Form {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            fields: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an empty form and append it to the store
    pub fn create_form(&mut self, title: impl Into<String>, description: impl Into<String>) -> Form {
        let form = self.new_form(title.into(), description.into());
        debug!(form_id = %form.id, title = %form.title, "Created form");
        self.forms.push(form.clone());
        form
    }

    /// Save a builder draft as a new form. The draft's id and timestamps
    /// are replaced; its title, description and fields are kept.
    pub fn create_form_from_draft(&mut self, draft: Form) -> Form {
        let form = Form {
            fields: draft.fields,
            ..self.new_form(draft.title, draft.description)
        };
        debug!(
            form_id = %form.id,
            fields = form.fields.len(),
            "Created form from draft"
        );
        self.forms.push(form.clone());
        form
    }

    /// Replace a form in place, keeping its position and creation time.
    ///
    /// `updated_at` is set to now, clamped so it never moves backwards.
    pub fn update_form(&mut self, form: Form) -> Result<(), StoreError> {
        let now = self.clock.now();
        let Some(slot) = self.forms.iter_mut().find(|f| f.id == form.id) else {
            warn!(form_id = %form.id, "Update of unknown form rejected");
            return Err(StoreError::FormNotFound(form.id));
        };

        let created_at = slot.created_at;
        let updated_at = now.max(slot.updated_at);
        *slot = Form {
            created_at,
            updated_at,
            ..form
        };
        debug!(form_id = %slot.id, fields = slot.fields.len(), "Updated form");
        Ok(())
    }

    /// Delete a form together with all of its responses.
    ///
    /// Returns the number of responses removed by the cascade.
    pub fn delete_form(&mut self, id: &str) -> Result<usize, StoreError> {
        let Some(position) = self.forms.iter().position(|f| f.id == id) else {
            warn!(form_id = id, "Delete of unknown form rejected");
            return Err(StoreError::FormNotFound(id.to_string()));
        };

        self.forms.remove(position);
        let before = self.responses.len();
        self.responses.retain(|r| r.form_id != id);
        let removed = before - self.responses.len();

        info!(form_id = id, responses = removed, "Deleted form");
        Ok(removed)
    }

    /// Record a submission against an existing form.
    ///
    /// Every key must name a field of the form and every value must match
    /// that field's type.
    pub fn submit_response(
        &mut self,
        form_id: &str,
        responses: ResponseValues,
    ) -> Result<FormResponse, StoreError> {
        let Some(form) = self.form(form_id) else {
            warn!(form_id, "Submission for unknown form rejected");
            return Err(StoreError::FormNotFound(form_id.to_string()));
        };

        for (field_id, value) in &responses {
            let Some(field) = form.field(field_id) else {
                return Err(StoreError::UnknownField {
                    form_id: form_id.to_string(),
                    field_id: field_id.clone(),
                });
            };
            if !field.field_type.accepts(value) {
                return Err(StoreError::ValueTypeMismatch {
                    field_id: field_id.clone(),
                    expected: field.field_type,
                });
            }
        }

        let response = FormResponse {
            id: Uuid::new_v4().to_string(),
            form_id: form_id.to_string(),
            responses,
            submitted_at: self.clock.now(),
        };
        debug!(form_id, response_id = %response.id, "Submitted response");
        self.responses.push(response.clone());
        Ok(response)
    }

    /// All responses for a form, in submission order
    pub fn get_form_responses(&self, form_id: &str) -> Vec<&FormResponse> {
        self.responses
            .iter()
            .filter(|r| r.form_id == form_id)
            .collect()
    }

    pub fn response_count(&self, form_id: &str) -> usize {
        self.responses
            .iter()
            .filter(|r| r.form_id == form_id)
            .count()
    }
}
