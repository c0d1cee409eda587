use crate::model::FieldType;

/// Errors raised by store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No form with this id exists
    #[error("form not found: {0}")]
    FormNotFound(String),
    /// A response names a field the form doesn't have
    #[error("form {form_id} has no field {field_id}")]
    UnknownField { form_id: String, field_id: String },
    /// A response value has the wrong variant for its field
    #[error("field {field_id} expects a {expected} value")]
    ValueTypeMismatch {
        field_id: String,
        expected: FieldType,
    },
}
