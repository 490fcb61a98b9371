//! Form domain layer
//!
//! Type-safe sign-up form handling: the record, the shared rule table, and a
//! single form type parameterized by when it validates.

mod field;
mod form_state;
mod record;
mod rules;

pub use field::{gender_label, FieldKind, FieldName};
pub use form_state::{
    FieldStatus, Form, SignupForm, SubmitOutcome, ValidationMode, ValidationOptions,
};
pub use record::SignupRecord;
