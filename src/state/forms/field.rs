//! Form field names and value objects

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised when a field is written with the wrong kind of value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field `{field}` expects a {expected} value")]
    KindMismatch {
        field: FieldName,
        expected: &'static str,
    },
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
    Password,
    Select,
    Checkbox,
}

/// Every field of the sign-up record, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Address,
    DateOfBirth,
    Password,
    ConfirmPassword,
    Gender,
    AgreeToTerms,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Address,
        FieldName::DateOfBirth,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Gender,
        FieldName::AgreeToTerms,
    ];

    /// Record key used in serialized output and error maps
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::DateOfBirth => "dateOfBirth",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Gender => "gender",
            Self::AgreeToTerms => "agreeToTerms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
            Self::DateOfBirth => "Date of Birth",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Gender => "Gender",
            Self::AgreeToTerms => "I agree to the terms and conditions",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::DateOfBirth => FieldKind::Date,
            Self::Password | Self::ConfirmPassword => FieldKind::Password,
            Self::Gender => FieldKind::Select,
            Self::AgreeToTerms => FieldKind::Checkbox,
            Self::Name | Self::Phone | Self::Address => FieldKind::Text,
        }
    }

    /// Whether the field accepts typed characters
    pub fn is_typed(self) -> bool {
        !matches!(self.kind(), FieldKind::Select | FieldKind::Checkbox)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// An empty string or an unchecked flag
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(b) => !b,
        }
    }
}

/// Gender select options as (value, label); the empty value is the placeholder
pub const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("", "Select Gender"),
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
];

/// Label for a gender value, falling back to the raw value
pub fn gender_label(value: &str) -> &str {
    GENDER_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Step through the gender options, wrapping at both ends
pub fn cycle_gender(current: &str, forward: bool) -> &'static str {
    let len = GENDER_OPTIONS.len();
    let index = GENDER_OPTIONS
        .iter()
        .position(|(v, _)| *v == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    };
    GENDER_OPTIONS[next].0
}
