//! Trait abstractions for time and submission, enabling mocking in tests

use super::submission::Submission;
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Source of the current moment for date-of-birth checks
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Receiver for records that passed validation
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Accept a validated submission
    fn accept(&mut self, submission: &Submission) -> Result<()>;
}
