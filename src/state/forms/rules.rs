//! Declarative validation rules shared by every sign-up form
//!
//! Each field has one [`FieldRule`]: a message for when the field is blank and
//! an ordered list of checks run against its text. The first failing check
//! wins, so a field never carries more than one message.

use super::field::FieldName;
use super::record::SignupRecord;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Characters accepted as the password's special character
pub const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Minimum length promised by the password message. Only applied when
/// [`ValidationContext::enforce_password_length`] is set.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Date format typed into the date-of-birth field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything a check may look at besides the field's own text
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub record: &'a SignupRecord,
    pub now: DateTime<Utc>,
    pub enforce_password_length: bool,
}

/// A single predicate with the message shown when it fails
pub struct Check {
    pub message: &'static str,
    pub passes: fn(&str, &ValidationContext<'_>) -> bool,
}

/// Validation rule for one field
pub struct FieldRule {
    pub field: FieldName,
    /// Message for an empty string or an unchecked checkbox
    pub required: &'static str,
    pub checks: &'static [Check],
}

pub const PASSWORD_MESSAGE: &str = "Password must contain at least 8 characters, one uppercase letter, one number, and one special character";

pub static RULES: &[FieldRule] = &[
    FieldRule {
        field: FieldName::Name,
        required: "Name is required",
        checks: &[],
    },
    FieldRule {
        field: FieldName::Email,
        required: "Email is required",
        checks: &[Check {
            message: "Email is not valid",
            passes: is_valid_email,
        }],
    },
    FieldRule {
        field: FieldName::Phone,
        required: "Phone number is required",
        checks: &[Check {
            message: "Phone number must be 10 digits",
            passes: is_valid_phone,
        }],
    },
    FieldRule {
        field: FieldName::Address,
        required: "Address is required",
        checks: &[],
    },
    FieldRule {
        field: FieldName::DateOfBirth,
        required: "Date of Birth is required",
        checks: &[
            Check {
                message: "Date of Birth must be a valid date (YYYY-MM-DD)",
                passes: is_parseable_date,
            },
            Check {
                message: "Date of Birth must be a past date",
                passes: is_past_date,
            },
        ],
    },
    FieldRule {
        field: FieldName::Password,
        required: "Password is required",
        checks: &[Check {
            message: PASSWORD_MESSAGE,
            passes: is_strong_password,
        }],
    },
    FieldRule {
        field: FieldName::ConfirmPassword,
        required: "Please confirm your password",
        checks: &[Check {
            message: "Passwords do not match",
            passes: matches_password,
        }],
    },
    FieldRule {
        field: FieldName::Gender,
        required: "Gender is required",
        checks: &[],
    },
    FieldRule {
        field: FieldName::AgreeToTerms,
        required: "You must agree to the terms and conditions",
        checks: &[],
    },
];

/// Look up the rule for a field
pub fn rule_for(field: FieldName) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.field == field)
}

/// Validate one field of the record, returning the failure message if any
pub fn validate_field(field: FieldName, ctx: &ValidationContext<'_>) -> Option<&'static str> {
    let rule = rule_for(field)?;
    let value = ctx.record.value(field);
    if value.is_blank() {
        return Some(rule.required);
    }
    let text = value.as_text();
    rule.checks
        .iter()
        .find(|check| !(check.passes)(text, ctx))
        .map(|check| check.message)
}

/// Validate every field, producing a fresh error map
pub fn validate_all(ctx: &ValidationContext<'_>) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for rule in RULES {
        if let Some(message) = validate_field(rule.field, ctx) {
            errors.set(rule.field, message);
        }
    }
    errors
}

pub fn is_valid_email(value: &str, _ctx: &ValidationContext<'_>) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str, _ctx: &ValidationContext<'_>) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Parse a typed date of birth as midnight UTC
pub fn parse_date_of_birth(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

fn is_parseable_date(value: &str, _ctx: &ValidationContext<'_>) -> bool {
    parse_date_of_birth(value).is_some()
}

pub fn is_past_date(value: &str, ctx: &ValidationContext<'_>) -> bool {
    parse_date_of_birth(value).is_some_and(|date| date < ctx.now)
}

/// Uppercase letter, digit and special character. Length is only checked
/// when the context asks for it, even though the message always claims it.
pub fn is_strong_password(value: &str, ctx: &ValidationContext<'_>) -> bool {
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| PASSWORD_SPECIALS.contains(&c));
    let long_enough =
        !ctx.enforce_password_length || value.chars().count() >= PASSWORD_MIN_LENGTH;
    has_upper && has_digit && has_special && long_enough
}

pub fn matches_password(value: &str, ctx: &ValidationContext<'_>) -> bool {
    value == ctx.record.password
}

/// Error map: field → message, holding only currently invalid fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    /// Apply one field's result: insert on failure, drop the key on success
    pub fn merge(&mut self, field: FieldName, result: Option<&str>) {
        match result {
            Some(message) => self.set(field, message),
            None => self.clear(field),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}
