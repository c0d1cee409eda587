//! Thread-safe handle to a [`FormStore`]

use super::error::StoreError;
use super::form_store::FormStore;
use crate::model::{Form, FormResponse, ResponseValues};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle that serializes access to one store.
///
/// Each operation holds the lock for its whole duration, so readers never
/// see a form deleted while its responses are still present.
#[derive(Clone, Default)]
pub struct SharedFormStore {
    inner: Arc<RwLock<FormStore>>,
}

impl SharedFormStore {
    pub fn new(store: FormStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // Poisoning is ignored: no store mutation can panic part-way through.
    fn read(&self) -> RwLockReadGuard<'_, FormStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_form(&self, title: impl Into<String>, description: impl Into<String>) -> Form {
        self.write().create_form(title, description)
    }

    pub fn create_form_from_draft(&self, draft: Form) -> Form {
        self.write().create_form_from_draft(draft)
    }

    pub fn update_form(&self, form: Form) -> Result<(), StoreError> {
        self.write().update_form(form)
    }

    pub fn delete_form(&self, id: &str) -> Result<usize, StoreError> {
        self.write().delete_form(id)
    }

    pub fn submit_response(
        &self,
        form_id: &str,
        responses: ResponseValues,
    ) -> Result<FormResponse, StoreError> {
        self.write().submit_response(form_id, responses)
    }

    pub fn get_form_responses(&self, form_id: &str) -> Vec<FormResponse> {
        self.read()
            .get_form_responses(form_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn form(&self, id: &str) -> Option<Form> {
        self.read().form(id).cloned()
    }

    /// Consistent copy of both collections taken under one lock
    pub fn snapshot(&self) -> (Vec<Form>, Vec<FormResponse>) {
        let store = self.read();
        (store.forms().to_vec(), store.responses().to_vec())
    }

    /// Run a read-only closure against the store while holding the lock
    pub fn with_store<R>(&self, f: impl FnOnce(&FormStore) -> R) -> R {
        f(&self.read())
    }
}
