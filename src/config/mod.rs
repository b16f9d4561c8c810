//! Configuration management for crtterm
//!
//! Configuration is a TOML file with a `[ui]` and a `[terminal]` table.
//! Every field has a default, so a config file only needs the keys it
//! wants to change. See [`loader::ConfigLoader`] for where files are
//! looked up.

pub mod loader;
pub mod theme;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

pub use loader::ConfigLoader;
pub use theme::{Color, Palette, Theme};

/// Main configuration structure for crtterm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration
    pub ui: UiConfig,

    /// Terminal configuration
    pub terminal: TerminalConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window title, also shown in the welcome banner
    pub title: String,

    /// Font size in points
    pub font_size: u32,

    /// Prompt shown in front of the input row
    pub prompt: String,

    /// Draw interlace scanlines over the transcript
    pub scanlines: bool,

    /// Start with CRT flicker enabled
    pub flicker: bool,

    /// Initial window size (width, height)
    pub window_size: (f32, f32),
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "crtterm".to_string(),
            font_size: 14,
            prompt: "$".to_string(),
            scanlines: true,
            flicker: false,
            window_size: (900.0, 600.0),
        }
    }
}

/// Terminal-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Directory granted to `ls` and `cat` when none is given on the command line
    pub directory: Option<PathBuf>,

    /// Bell style
    pub bell_style: BellStyle,

    /// Maximum number of transcript fragments kept; oldest are dropped
    pub scrollback_fragments: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            directory: None,
            bell_style: BellStyle::Sound,
            scrollback_fragments: 5_000,
        }
    }
}

/// Bell style for terminal bell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BellStyle {
    /// No bell
    None,
    /// Sound bell
    #[default]
    Sound,
    /// Visual bell (screen flash)
    Visual,
}

impl Config {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(6..=72).contains(&self.ui.font_size) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: "Font size must be between 6 and 72".to_string(),
            });
        }

        if self.ui.title.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "ui.title".to_string(),
                reason: "Title cannot be empty".to_string(),
            });
        }

        let (width, height) = self.ui.window_size;
        if width < 200.0 || height < 150.0 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.window_size".to_string(),
                reason: "Window must be at least 200x150".to_string(),
            });
        }

        if self.terminal.scrollback_fragments == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.scrollback_fragments".to_string(),
                reason: "Scrollback must keep at least one fragment".to_string(),
            });
        }

        Ok(())
    }
}
