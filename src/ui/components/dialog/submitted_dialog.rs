//! Confirmation shown after a submission is accepted

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::services::Submission;
use ratatui::{style::Color, Frame};

/// Body text for the submitted dialog
fn submitted_message(submission: &Submission) -> String {
    let record = &submission.record;
    format!(
        "Thanks, {}! We'll be in touch at {}.\n\nSubmission {}",
        record.name, record.email, submission.id
    )
}

/// Render the "Form submitted" dialog overlay
pub fn render_submitted_dialog(frame: &mut Frame, submission: &Submission) {
    let message = submitted_message(submission);
    render_dialog(
        frame,
        DialogConfig {
            title: "Form submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(dismiss_hint()),
            max_width: 60,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SignupRecord, ValidationMode};
    use chrono::Utc;

    #[test]
    fn test_message_names_the_record_and_id() {
        let submission = Submission::new(
            ValidationMode::OnChange,
            SignupRecord {
                name: "Ann".to_string(),
                email: "a@b.com".to_string(),
                ..Default::default()
            },
            Utc::now(),
        );
        let message = submitted_message(&submission);
        assert!(message.starts_with("Thanks, Ann! We'll be in touch at a@b.com."));
        assert!(message.ends_with(&submission.id.to_string()));
    }
}
