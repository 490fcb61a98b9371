//! Application state definitions

use super::catalog::DATA;
use super::forms::{SignupForm, ValidationMode};
use crate::services::Submission;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Items,
    SubmitForm,
    LiveForm,
}

impl View {
    pub const ALL: [View; 3] = [View::Items, View::SubmitForm, View::LiveForm];

    /// Parse the key used in the config file
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "items" => Some(Self::Items),
            "submit" => Some(Self::SubmitForm),
            "live" => Some(Self::LiveForm),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Items => "Items",
            Self::SubmitForm => "Sign Up",
            Self::LiveForm => "Live Check",
        }
    }

    /// Whether the view is a form that consumes typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::SubmitForm | Self::LiveForm)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Items => 0,
            Self::SubmitForm => 1,
            Self::LiveForm => 2,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Item list
    pub selected_index: usize,

    // Forms
    pub submit_form: SignupForm,
    pub live_form: SignupForm,

    // Modals
    pub last_submission: Option<Submission>,
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            selected_index: 0,
            submit_form: SignupForm::new(ValidationMode::OnSubmit),
            live_form: SignupForm::new(ValidationMode::OnChange),
            last_submission: None,
            error_queue: VecDeque::new(),
        }
    }
}

impl AppState {
    /// Fresh state opened on the given view
    pub fn with_view(view: View) -> Self {
        Self {
            current_view: view,
            ..Self::default()
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < DATA.len() {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Form backing the current view
    pub fn active_form(&self) -> Option<&SignupForm> {
        match self.current_view {
            View::Items => None,
            View::SubmitForm => Some(&self.submit_form),
            View::LiveForm => Some(&self.live_form),
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut SignupForm> {
        match self.current_view {
            View::Items => None,
            View::SubmitForm => Some(&mut self.submit_form),
            View::LiveForm => Some(&mut self.live_form),
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
