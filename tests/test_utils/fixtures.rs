//! Test Fixtures
//!
//! Sessions wired to in-memory collaborators and a fixed clock.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use crtterm::bell::{Bell, SilentBell};
use crtterm::settings::{MemorySettings, SettingsStore};
use crtterm::{Directory, MemoryDirectory, Session, SessionOptions};

/// 2019-03-14 21:05:07 local time
pub fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2019, 3, 14, 21, 5, 7)
        .single()
        .unwrap_or_else(Local::now)
}

/// A granted folder with one subfolder and two files
pub fn sample_directory() -> MemoryDirectory {
    MemoryDirectory::new("granted")
        .with_folder("projects")
        .with_file("a.txt", "alpha\n  indented")
        .with_file("readme.md", "# crtterm")
}

/// Session over `directory` with the given settings and bell
pub fn session_with(
    directory: Arc<dyn Directory>,
    settings: Box<dyn SettingsStore>,
    bell: Box<dyn Bell>,
) -> Session {
    Session::with_clock(
        SessionOptions::default(),
        directory,
        settings,
        bell,
        fixed_now,
    )
}

/// Session over the sample directory with empty in-memory settings
pub fn test_session() -> Session {
    session_with(
        Arc::new(sample_directory()),
        Box::new(MemorySettings::new()),
        Box::new(SilentBell),
    )
}
