//! Configuration handling for the TUI

use crate::state::View;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// View shown at startup ("items", "submit" or "live")
    pub initial_view: Option<String>,
    /// Apply the 8 character minimum the password message mentions
    pub enforce_password_length: Option<bool>,
    /// Hide password characters while typing
    pub mask_passwords: Option<bool>,
}

impl SignupConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "signup", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("signup-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Startup view, falling back to the item list for unknown keys
    pub fn initial_view(&self) -> View {
        self.initial_view
            .as_deref()
            .and_then(View::from_key)
            .unwrap_or_default()
    }

    pub fn enforce_password_length(&self) -> bool {
        self.enforce_password_length.unwrap_or(false)
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }

    /// Flip password masking, returning the new setting
    pub fn toggle_mask_passwords(&mut self) -> bool {
        let masked = !self.mask_passwords();
        self.mask_passwords = Some(masked);
        masked
    }
}
