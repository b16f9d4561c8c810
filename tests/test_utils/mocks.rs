//! Mock collaborators

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crtterm::bell::Bell;
use crtterm::settings::SettingsStore;
use crtterm::{Error, Result};

/// Bell that counts rings through a shared counter
#[derive(Debug, Clone, Default)]
pub struct RecordingBell {
    rings: Arc<AtomicUsize>,
}

impl RecordingBell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that keeps counting after the bell moves into a session
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.rings)
    }
}

impl Bell for RecordingBell {
    fn ring(&self) {
        self.rings.fetch_add(1, Ordering::SeqCst);
    }
}

fn read_only() -> Error {
    Error::SettingsFailed {
        path: PathBuf::from("/read-only/settings.json"),
        reason: "settings are read-only".to_string(),
    }
}

/// Settings store whose writes always fail
#[derive(Debug, Clone, Default)]
pub struct FailingSettings {
    pub theme: Option<String>,
}

impl SettingsStore for FailingSettings {
    fn theme(&self) -> Option<String> {
        self.theme.clone()
    }

    fn set_theme(&mut self, _theme: &str) -> Result<()> {
        Err(read_only())
    }

    fn clear_theme(&mut self) -> Result<()> {
        Err(read_only())
    }
}
