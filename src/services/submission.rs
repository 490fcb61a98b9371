//! The downstream submission action for validated records

use super::traits::SubmissionSink;
use crate::state::{SignupRecord, ValidationMode};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A record that passed validation, stamped for hand-off
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub mode: ValidationMode,
    pub record: SignupRecord,
}

impl Submission {
    pub fn new(mode: ValidationMode, record: SignupRecord, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at,
            mode,
            record,
        }
    }
}

/// Sink that only traces the submission; there is no backend to send it to
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn accept(&mut self, submission: &Submission) -> Result<()> {
        let record = serde_json::to_string(&submission.record)?;
        tracing::info!(
            id = %submission.id,
            mode = ?submission.mode,
            %record,
            "Form submitted"
        );
        Ok(())
    }
}
