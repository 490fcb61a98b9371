//! Application state and core logic

use crate::config::SignupConfig;
use crate::services::{Clock, Submission, SubmissionSink, SystemClock, TracingSink};
use crate::state::{AppState, FieldName, Form, SubmitOutcome, ValidationOptions, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: SignupConfig,
    /// Time source for date-of-birth checks
    clock: Box<dyn Clock>,
    /// Receiver for validated submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Write config changes back to the user's config file
    persist_config: bool,
}

impl App {
    /// Create a new App instance with the system clock and tracing sink
    pub fn new(config: SignupConfig) -> Self {
        let mut app =
            Self::with_services(config, Box::new(SystemClock), Box::<TracingSink>::default());
        app.persist_config = true;
        app
    }

    pub fn with_services(
        config: SignupConfig,
        clock: Box<dyn Clock>,
        sink: Box<dyn SubmissionSink>,
    ) -> Self {
        Self {
            state: AppState::with_view(config.initial_view()),
            config,
            clock,
            sink,
            quit: false,
            status_message: None,
            persist_config: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Options for the next validation pass, read fresh on every event
    fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            now: self.clock.now(),
            enforce_password_length: self.config.enforce_password_length(),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Submitted dialog (modal)
        if self.state.last_submission.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.last_submission = None;
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        // View switching works from anywhere
        let target = match key.code {
            KeyCode::F(1) => Some(View::Items),
            KeyCode::F(2) => Some(View::SubmitForm),
            KeyCode::F(3) => Some(View::LiveForm),
            _ => None,
        };
        if let Some(view) = target {
            self.navigate(view);
            return Ok(());
        }

        match self.state.current_view {
            View::Items => self.handle_items_key(key),
            View::SubmitForm | View::LiveForm => self.handle_form_key(key)?,
        }
        Ok(())
    }

    /// Navigate to a view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view != view {
            tracing::debug!(from = ?self.state.current_view, to = ?view, "navigate");
        }
        self.state.current_view = view;
    }

    /// Handle keys in the item list
    fn handle_items_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Char('1') => self.navigate(View::Items),
            KeyCode::Char('2') => self.navigate(View::SubmitForm),
            KeyCode::Char('3') => self.navigate(View::LiveForm),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in either sign-up form
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // AltGr arrives as Ctrl+Alt on Windows and produces ordinary characters
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        // Keyboard shortcuts (work from any field)
        match key.code {
            KeyCode::Char('s') if ctrl => return self.submit_active_form(),
            KeyCode::Char('t') if ctrl => {
                self.toggle_password_mask();
                return Ok(());
            }
            KeyCode::Char('r') if ctrl => {
                if let Some(form) = self.state.active_form_mut() {
                    form.reset();
                }
                self.status_message = Some("Form cleared".to_string());
                return Ok(());
            }
            KeyCode::Esc => {
                self.navigate(View::Items);
                return Ok(());
            }
            _ => {}
        }

        let options = self.validation_options();
        let Some(form) = self.state.active_form_mut() else {
            return Ok(());
        };

        if form.is_submit_active() && key.code == KeyCode::Enter {
            return self.submit_active_form();
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => form.cycle_active(false, &options)?,
            KeyCode::Right => form.cycle_active(true, &options)?,
            KeyCode::Char(' ') if form.active() == Some(FieldName::AgreeToTerms) => {
                form.toggle_active(&options)?
            }
            KeyCode::Char(c) if !ctrl => form.input_char(c, &options)?,
            KeyCode::Backspace => form.backspace(&options)?,
            _ => {}
        }
        Ok(())
    }

    /// Show or hide password characters, remembering the choice
    fn toggle_password_mask(&mut self) {
        let masked = self.config.toggle_mask_passwords();
        let label = if masked { "Passwords hidden" } else { "Passwords shown" };
        self.status_message = Some(label.to_string());

        if !self.persist_config {
            return;
        }
        if let Err(err) = self.config.save() {
            tracing::warn!("Failed to save config: {err:#}");
            self.push_error(format!("Failed to save config: {err}"));
        }
    }

    /// Validate the current form and hand an accepted record to the sink
    fn submit_active_form(&mut self) -> Result<()> {
        let options = self.validation_options();
        let Some(form) = self.state.active_form_mut() else {
            return Ok(());
        };
        let mode = form.mode;

        match form.submit(&options) {
            SubmitOutcome::Accepted(record) => {
                let submission = Submission::new(mode, record, options.now);
                if let Err(err) = self.sink.accept(&submission) {
                    tracing::error!("Failed to submit form: {err:#}");
                    self.push_error(format!("Failed to submit form: {err}"));
                    return Ok(());
                }
                self.state.last_submission = Some(submission);
            }
            SubmitOutcome::Rejected(count) => {
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.status_message = Some(format!("{count} {noun} attention"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MockClock, MockSubmissionSink};
    use crate::state::{FieldStatus, ValidationMode};
    use anyhow::anyhow;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn fixed_clock() -> Box<MockClock> {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap());
        Box::new(clock)
    }

    fn idle_sink() -> Box<MockSubmissionSink> {
        let mut sink = MockSubmissionSink::new();
        sink.expect_accept().never();
        Box::new(sink)
    }

    fn app_with(sink: Box<MockSubmissionSink>, view: View) -> App {
        let mut app = App::with_services(SignupConfig::default(), fixed_clock(), sink);
        app.navigate(view);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    /// Fill every field of the active form, leaving the cursor on submit
    fn fill_form(app: &mut App, phone: &str, dob: &str) {
        let texts = ["Ann", "a@b.com", phone, "1 Rd", dob, "Abc1!xyz", "Abc1!xyz"];
        for text in texts {
            type_text(app, text);
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
        // gender: placeholder -> male -> female
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_configured_view() {
            let config = SignupConfig {
                initial_view: Some("live".to_string()),
                ..Default::default()
            };
            let app = App::with_services(config, fixed_clock(), idle_sink());
            assert_eq!(app.state.current_view, View::LiveForm);
        }

        #[test]
        fn test_function_keys_switch_views() {
            let mut app = app_with(idle_sink(), View::Items);
            app.handle_key(key(KeyCode::F(3))).unwrap();
            assert_eq!(app.state.current_view, View::LiveForm);
            app.handle_key(key(KeyCode::F(2))).unwrap();
            assert_eq!(app.state.current_view, View::SubmitForm);
            app.handle_key(key(KeyCode::F(1))).unwrap();
            assert_eq!(app.state.current_view, View::Items);
        }

        #[test]
        fn test_number_keys_switch_from_list_only() {
            let mut app = app_with(idle_sink(), View::Items);
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            assert_eq!(app.state.current_view, View::SubmitForm);

            // in a form, digits are typed
            app.handle_key(key(KeyCode::Char('3'))).unwrap();
            assert_eq!(app.state.current_view, View::SubmitForm);
            assert_eq!(app.state.submit_form.record.name, "3");
        }

        #[test]
        fn test_list_selection() {
            let mut app = app_with(idle_sink(), View::Items);
            app.handle_key(key(KeyCode::Char('j'))).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.state.selected_index, 2);
            app.handle_key(key(KeyCode::Char('k'))).unwrap();
            assert_eq!(app.state.selected_index, 1);
        }

        #[test]
        fn test_q_quits_from_list() {
            let mut app = app_with(idle_sink(), View::Items);
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_esc_leaves_form_but_keeps_record() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            type_text(&mut app, "Ann");
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::Items);
            assert_eq!(app.state.submit_form.record.name, "Ann");
        }
    }

    mod submit_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_record_reaches_sink() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_accept()
                .withf(|s| {
                    s.mode == ValidationMode::OnSubmit
                        && s.record.name == "Ann"
                        && s.record.gender == "female"
                        && s.record.agree_to_terms
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(Box::new(sink), View::SubmitForm);

            fill_form(&mut app, "5551234567", "2000-01-01");
            assert!(app.state.submit_form.is_submit_active());
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert!(app.state.submit_form.errors.is_empty());
            assert!(app.state.last_submission.is_some());
        }

        #[test]
        fn test_short_phone_blocks_sink() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            fill_form(&mut app, "555123", "2000-01-01");
            app.handle_key(ctrl('s')).unwrap();

            let errors = &app.state.submit_form.errors;
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldName::Phone]);
            assert_eq!(
                errors.get(FieldName::Phone),
                Some("Phone number must be 10 digits")
            );
            assert!(app.state.last_submission.is_none());
            assert_eq!(
                app.status_message.as_deref(),
                Some("1 field needs attention")
            );
        }

        #[test]
        fn test_future_dob_blocks_sink() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            fill_form(&mut app, "5551234567", "2999-01-01");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(
                app.state.submit_form.errors.get(FieldName::DateOfBirth),
                Some("Date of Birth must be a past date")
            );
        }

        #[test]
        fn test_typing_does_not_validate() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            type_text(&mut app, "x");
            assert!(app.state.submit_form.errors.is_empty());
            assert_eq!(
                app.state.submit_form.status(FieldName::Name),
                FieldStatus::Untouched
            );
        }

        #[test]
        fn test_ctrl_r_clears_form() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            type_text(&mut app, "Ann");
            app.handle_key(ctrl('r')).unwrap();
            assert_eq!(app.state.submit_form.record.name, "");
            assert_eq!(app.status_message.as_deref(), Some("Form cleared"));
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            app.handle_key(ctrl('x')).unwrap();
            assert_eq!(app.state.submit_form.record.name, "");
        }

        #[test]
        fn test_altgr_characters_are_typed() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "a");
            let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
            app.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr)).unwrap();
            type_text(&mut app, "b.io");
            assert_eq!(app.state.submit_form.record.email, "a@b.io");
        }

        #[test]
        fn test_altgr_letters_do_not_trigger_shortcuts() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            type_text(&mut app, "Ann");
            let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
            app.handle_key(KeyEvent::new(KeyCode::Char('r'), altgr)).unwrap();
            assert_eq!(app.state.submit_form.record.name, "Annr");
            assert!(app.status_message.is_none());
        }

        #[test]
        fn test_ctrl_t_toggles_password_mask() {
            let mut app = app_with(idle_sink(), View::SubmitForm);
            assert!(app.config.mask_passwords());
            app.handle_key(ctrl('t')).unwrap();
            assert!(!app.config.mask_passwords());
            assert_eq!(app.status_message.as_deref(), Some("Passwords shown"));
            app.handle_key(ctrl('t')).unwrap();
            assert!(app.config.mask_passwords());
            assert!(!app.state.has_errors());
        }
    }

    mod live_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_validates_each_change() {
            let mut app = app_with(idle_sink(), View::LiveForm);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "a@b");
            assert_eq!(
                app.state.live_form.errors.get(FieldName::Email),
                Some("Email is not valid")
            );
            type_text(&mut app, ".io");
            assert!(!app.state.live_form.errors.contains(FieldName::Email));
        }

        #[test]
        fn test_phone_input_drops_non_digits() {
            let mut app = app_with(idle_sink(), View::LiveForm);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "(555) 123-4567");
            assert_eq!(app.state.live_form.record.phone, "5551234567");
            assert_eq!(
                app.state.live_form.status(FieldName::Phone),
                FieldStatus::Valid
            );
        }

        #[test]
        fn test_valid_record_reaches_sink() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_accept()
                .withf(|s| s.mode == ValidationMode::OnChange)
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(Box::new(sink), View::LiveForm);
            fill_form(&mut app, "555-123-4567", "2000-01-01");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.last_submission.is_some());
        }

        #[test]
        fn test_forms_do_not_share_state() {
            let mut app = app_with(idle_sink(), View::LiveForm);
            type_text(&mut app, "Ann");
            assert_eq!(app.state.live_form.record.name, "Ann");
            assert_eq!(app.state.submit_form.record.name, "");
        }
    }

    mod modals {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submitted_dialog_blocks_input_until_dismissed() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_accept().times(1).returning(|_| Ok(()));
            let mut app = app_with(Box::new(sink), View::SubmitForm);
            fill_form(&mut app, "5551234567", "2000-01-01");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.last_submission.is_some());

            app.handle_key(key(KeyCode::F(1))).unwrap();
            assert_eq!(app.state.current_view, View::SubmitForm);

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.state.last_submission.is_none());
            assert_eq!(app.state.current_view, View::SubmitForm);
        }

        #[test]
        fn test_sink_failure_is_queued_as_error() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_accept()
                .times(1)
                .returning(|_| Err(anyhow!("backend offline")));
            let mut app = app_with(Box::new(sink), View::SubmitForm);
            fill_form(&mut app, "5551234567", "2000-01-01");
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert!(app.state.last_submission.is_none());
            assert_eq!(
                app.state.current_error(),
                Some("Failed to submit form: backend offline")
            );

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.has_errors());
        }
    }

    #[test]
    fn test_password_length_enforced_from_config() {
        let config = SignupConfig {
            enforce_password_length: Some(true),
            ..Default::default()
        };
        let mut app = App::with_services(config, fixed_clock(), idle_sink());
        app.navigate(View::LiveForm);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
        type_text(&mut app, "A1!");
        assert_eq!(
            app.state.live_form.status(FieldName::Password),
            FieldStatus::Invalid
        );
    }
}
