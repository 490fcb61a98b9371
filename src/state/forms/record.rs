//! The flat sign-up record edited by both forms

use super::field::{FieldError, FieldName, FieldValue};
use serde::Serialize;

/// Sign-up record. Every field is a string except `agree_to_terms`.
///
/// Passwords are never serialized so the record can be traced safely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub gender: String,
    pub agree_to_terms: bool,
}

impl SignupRecord {
    /// Current value of a field
    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::AgreeToTerms => FieldValue::Flag(self.agree_to_terms),
            text => FieldValue::Text(self.text(text).to_string()),
        }
    }

    /// Text of a string field (empty for the checkbox)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Address => &self.address,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::Gender => &self.gender,
            FieldName::AgreeToTerms => "",
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Name => Some(&mut self.name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::Address => Some(&mut self.address),
            FieldName::DateOfBirth => Some(&mut self.date_of_birth),
            FieldName::Password => Some(&mut self.password),
            FieldName::ConfirmPassword => Some(&mut self.confirm_password),
            FieldName::Gender => Some(&mut self.gender),
            FieldName::AgreeToTerms => None,
        }
    }

    /// Write a value into a field; the checkbox only takes flags and
    /// every other field only takes text.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (FieldName::AgreeToTerms, FieldValue::Flag(checked)) => {
                self.agree_to_terms = checked;
                Ok(())
            }
            (FieldName::AgreeToTerms, FieldValue::Text(_)) => Err(FieldError::KindMismatch {
                field,
                expected: "boolean",
            }),
            (_, FieldValue::Flag(_)) => Err(FieldError::KindMismatch {
                field,
                expected: "text",
            }),
            (_, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
                Ok(())
            }
        }
    }
}
