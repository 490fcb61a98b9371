//! Sign-up form state: record, error map, focus and validation timing

use super::field::{cycle_gender, FieldError, FieldName, FieldValue};
use super::record::SignupRecord;
use super::rules::{validate_all, validate_field, FieldErrors, ValidationContext};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Maximum digits kept by the phone input in change-validated forms
pub const PHONE_MAX_DIGITS: usize = 10;

/// When a form runs its field rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Only on submit, rebuilding the whole error map
    OnSubmit,
    /// After every change, for the changed field only
    OnChange,
}

impl ValidationMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::OnSubmit => "Sign Up",
            Self::OnChange => "Form Validation onChange",
        }
    }
}

/// Per-field validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

/// Options applied to every validation pass
#[derive(Debug, Clone, Copy)]
pub struct ValidationOptions {
    pub now: DateTime<Utc>,
    pub enforce_password_length: bool,
}

impl ValidationOptions {
    fn context<'a>(&self, record: &'a SignupRecord) -> ValidationContext<'a> {
        ValidationContext {
            record,
            now: self.now,
            enforce_password_length: self.enforce_password_length,
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No field is invalid; carries the record snapshot to hand downstream
    Accepted(SignupRecord),
    /// Submission blocked by this many invalid fields
    Rejected(usize),
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// A sign-up form. Both page forms are this type with a different mode.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub mode: ValidationMode,
    pub record: SignupRecord,
    pub errors: FieldErrors,
    /// Fields that have been validated at least once
    validated: BTreeSet<FieldName>,
    /// 0..=8 are the fields, 9 is the submit button
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            record: SignupRecord::default(),
            errors: FieldErrors::default(),
            validated: BTreeSet::new(),
            active_field_index: 0,
        }
    }

    /// Index of the submit button row
    pub fn submit_index(&self) -> usize {
        FieldName::ALL.len()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.submit_index()
    }

    /// Field under the cursor, `None` on the submit button
    pub fn active(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn status(&self, field: FieldName) -> FieldStatus {
        if self.errors.contains(field) {
            FieldStatus::Invalid
        } else if self.validated.contains(&field) {
            FieldStatus::Valid
        } else {
            FieldStatus::Untouched
        }
    }

    /// Write a new value into the record. Change-validated forms strip
    /// non-digits from the phone and then revalidate the changed field
    /// against the updated record.
    pub fn change(
        &mut self,
        field: FieldName,
        value: FieldValue,
        options: &ValidationOptions,
    ) -> Result<(), FieldError> {
        let value = match (self.mode, field, value) {
            (ValidationMode::OnChange, FieldName::Phone, FieldValue::Text(raw)) => {
                FieldValue::Text(normalize_phone(&raw))
            }
            (_, _, value) => value,
        };
        self.record.set(field, value)?;

        if self.mode == ValidationMode::OnChange {
            let result = validate_field(field, &options.context(&self.record));
            self.errors.merge(field, result);
            self.validated.insert(field);
        }
        Ok(())
    }

    /// Validate every field against the current record and decide whether
    /// the submission may proceed. The error map is replaced wholesale.
    pub fn submit(&mut self, options: &ValidationOptions) -> SubmitOutcome {
        self.errors = validate_all(&options.context(&self.record));
        self.validated.extend(FieldName::ALL);

        if self.errors.is_empty() {
            tracing::debug!(mode = ?self.mode, "form passed validation");
            SubmitOutcome::Accepted(self.record.clone())
        } else {
            let invalid: Vec<&str> = self.errors.fields().map(FieldName::key).collect();
            tracing::debug!(mode = ?self.mode, ?invalid, "form blocked by validation");
            SubmitOutcome::Rejected(self.errors.len())
        }
    }

    /// Back to an empty record with no errors
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Append a typed character to the active text field
    pub fn input_char(&mut self, c: char, options: &ValidationOptions) -> Result<(), FieldError> {
        let Some(field) = self.active().filter(|f| f.is_typed()) else {
            return Ok(());
        };
        let mut text = self.record.text(field).to_string();
        text.push(c);
        self.change(field, FieldValue::Text(text), options)
    }

    /// Remove the last character of the active text field
    pub fn backspace(&mut self, options: &ValidationOptions) -> Result<(), FieldError> {
        let Some(field) = self.active().filter(|f| f.is_typed()) else {
            return Ok(());
        };
        let mut text = self.record.text(field).to_string();
        if text.pop().is_none() {
            return Ok(());
        }
        self.change(field, FieldValue::Text(text), options)
    }

    /// Flip the terms checkbox when it is active
    pub fn toggle_active(&mut self, options: &ValidationOptions) -> Result<(), FieldError> {
        if self.active() != Some(FieldName::AgreeToTerms) {
            return Ok(());
        }
        let checked = !self.record.agree_to_terms;
        self.change(FieldName::AgreeToTerms, FieldValue::Flag(checked), options)
    }

    /// Step the gender select when it is active
    pub fn cycle_active(
        &mut self,
        forward: bool,
        options: &ValidationOptions,
    ) -> Result<(), FieldError> {
        if self.active() != Some(FieldName::Gender) {
            return Ok(());
        }
        let next = cycle_gender(&self.record.gender, forward);
        self.change(FieldName::Gender, FieldValue::text(next), options)
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        FieldName::ALL.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.submit_index());
    }
}

/// Keep only ASCII digits, capped at [`PHONE_MAX_DIGITS`]
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect()
}
