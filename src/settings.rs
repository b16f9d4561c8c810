//! Persisted user settings
//!
//! The only thing crtterm remembers between runs is the theme name. It is
//! read once when the session starts and rewritten on every successful
//! `theme` command. An absent value means the default theme.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Settings file name inside the data directory
const SETTINGS_FILE: &str = "settings.json";

/// Storage for persisted settings
pub trait SettingsStore: Send {
    /// Stored theme name, if any
    fn theme(&self) -> Option<String>;

    /// Store a theme name
    fn set_theme(&mut self, theme: &str) -> Result<()>;

    /// Remove the stored theme name
    fn clear_theme(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct SettingsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Settings kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    data: SettingsData,
}

impl FileSettings {
    /// Open the settings file at the platform default location
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open (or lazily create) a settings file.
    ///
    /// A missing file is treated as empty settings. A corrupt file is logged
    /// and also treated as empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let data = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
                SettingsData::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SettingsData::default(),
            Err(e) => {
                return Err(Error::SettingsFailed {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        debug!("Settings opened from {}", path.display());
        Ok(Self { path, data })
    }

    /// `<data dir>/crtterm/settings.json`
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("crtterm").join(SETTINGS_FILE))
            .ok_or(Error::NoDataDirectory)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let to_error = |reason: String| Error::SettingsFailed {
            path: self.path.clone(),
            reason,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| to_error(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, content).map_err(|e| to_error(e.to_string()))
    }
}

impl SettingsStore for FileSettings {
    fn theme(&self) -> Option<String> {
        self.data.theme.clone()
    }

    fn set_theme(&mut self, theme: &str) -> Result<()> {
        self.data.theme = Some(theme.to_string());
        self.save()
    }

    fn clear_theme(&mut self) -> Result<()> {
        self.data.theme = None;
        self.save()
    }
}

/// Settings that live only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    theme: Option<String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
        }
    }
}

impl SettingsStore for MemorySettings {
    fn theme(&self) -> Option<String> {
        self.theme.clone()
    }

    fn set_theme(&mut self, theme: &str) -> Result<()> {
        self.theme = Some(theme.to_string());
        Ok(())
    }

    fn clear_theme(&mut self) -> Result<()> {
        self.theme = None;
        Ok(())
    }
}
