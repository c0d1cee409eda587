//! Form, field and response data model

mod field;
mod form;
mod response;

pub use field::{is_iso_date, FieldType, FieldUpdate, FieldValue, FormField};
pub use form::Form;
pub use response::{FormResponse, ResponseValues};
