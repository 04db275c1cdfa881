pub mod field_rules;
pub mod form_state;
pub mod request;

pub use field_rules::{validate, validate_field, FieldId};
pub use form_state::{ContactFormState, SubmissionState, SubmitDecision};
pub use request::{ContactRequest, SubmitError};
