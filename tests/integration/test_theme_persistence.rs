//! Integration Tests for Theme Persistence
//!
//! The theme is the only state that outlives a session. These tests run
//! `theme` commands against a settings file in a temporary directory and
//! start fresh sessions over the same file.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crtterm::bell::SilentBell;
use crtterm::commands::handlers::UNKNOWN_THEME;
use crtterm::models::Fragment;
use crtterm::settings::{FileSettings, SettingsStore};
use crtterm::{Session, Theme};
use tempfile::TempDir;
use test_utils::{sample_directory, session_with, FailingSettings};

fn session_on_file(path: &Path) -> Session {
    session_with(
        Arc::new(sample_directory()),
        Box::new(FileSettings::open(path).unwrap()),
        Box::new(SilentBell),
    )
}

#[tokio::test]
async fn test_cream_then_bogus() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let mut session = session_on_file(&path);

    session.run_line("theme cream").await;
    assert_eq!(session.theme(), Theme::Cream);
    assert_eq!(session.settings().theme().as_deref(), Some("cream"));

    session.run_line("theme bogus").await;
    assert_eq!(session.theme(), Theme::Cream);
    assert_eq!(session.settings().theme().as_deref(), Some("cream"));
    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::error(UNKNOWN_THEME))
    );
}

#[tokio::test]
async fn test_theme_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut first = session_on_file(&path);
    first.run_line("THEME cream").await;
    drop(first);

    let stored = fs::read_to_string(&path).unwrap();
    assert!(stored.contains("cream"));

    let second = session_on_file(&path);
    assert_eq!(second.theme(), Theme::Cream);
}

#[tokio::test]
async fn test_default_clears_stored_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut session = session_on_file(&path);
    session.run_line("theme cream").await;
    session.run_line("theme default").await;

    assert_eq!(session.theme(), Theme::Default);
    assert_eq!(session.settings().theme(), None);

    let reopened = FileSettings::open(&path).unwrap();
    assert_eq!(reopened.theme(), None);
}

#[tokio::test]
async fn test_corrupt_settings_start_with_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let mut session = session_on_file(&path);
    assert_eq!(session.theme(), Theme::Default);

    session.run_line("theme cream").await;
    let reopened = FileSettings::open(&path).unwrap();
    assert_eq!(reopened.theme().as_deref(), Some("cream"));
}

#[tokio::test]
async fn test_unwritable_settings_still_switch_theme() {
    let mut session = session_with(
        Arc::new(sample_directory()),
        Box::new(FailingSettings::default()),
        Box::new(SilentBell),
    );

    session.run_line("theme cream").await;

    assert_eq!(session.theme(), Theme::Cream);
    assert!(!matches!(
        session.transcript().last(),
        Some(Fragment::Error(_))
    ));
}

#[test]
fn test_unknown_stored_theme_falls_back() {
    let session = session_with(
        Arc::new(sample_directory()),
        Box::new(FailingSettings {
            theme: Some("plaid".to_string()),
        }),
        Box::new(SilentBell),
    );

    assert_eq!(session.theme(), Theme::Default);
}
