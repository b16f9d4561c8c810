//! Integration Tests for Command Flows
//!
//! These tests drive a session the way the input row does: type a line,
//! submit it, await the handler, and check what lands in the transcript.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crtterm::commands::handlers::{NOT_IMPLEMENTED, THEME_USAGE};
use crtterm::models::Fragment;
use crtterm::settings::MemorySettings;
use crtterm::{KeyEvent, Shortcut};
use test_utils::{sample_directory, session_with, test_session, RecordingBell};

/// Transcript lines produced after the banner
fn output_after_banner(session: &crtterm::Session) -> Vec<String> {
    session.transcript().plain_lines().into_iter().skip(3).collect()
}

#[tokio::test]
async fn test_unknown_verb() {
    let mut session = test_session();
    session.run_line("frobnicate --now").await;

    assert_eq!(
        output_after_banner(&session),
        vec!["$ frobnicate --now", "frobnicate: command not found."]
    );
}

#[tokio::test]
async fn test_verbs_are_case_insensitive() {
    let mut upper = test_session();
    let mut lower = test_session();
    upper.run_line("HELP").await;
    lower.run_line("help").await;

    let upper_output: Vec<_> = upper.transcript().fragments().skip(4).cloned().collect();
    let lower_output: Vec<_> = lower.transcript().fragments().skip(4).cloned().collect();
    assert!(!upper_output.is_empty());
    assert_eq!(upper_output, lower_output);
}

#[tokio::test]
async fn test_help_lists_commands() {
    let mut session = test_session();
    session.run_line("help").await;

    let listing = session
        .transcript()
        .fragments()
        .find_map(|fragment| match fragment {
            Fragment::Listing(items) => Some(items.clone()),
            _ => None,
        })
        .expect("help prints a listing");

    let names: Vec<&str> = listing.iter().map(|item| item.name.as_str()).collect();
    assert!(names.contains(&"ls"));
    assert!(names.contains(&"theme"));
    assert!(!names.contains(&"sudo"));
}

#[tokio::test]
async fn test_blank_line_records_nothing() {
    let mut session = test_session();
    let before = session.transcript().len();

    session.run_line("   \t ").await;

    assert!(session.history().is_empty());
    assert_eq!(session.history().cursor(), 0);
    assert_eq!(session.transcript().len(), before + 1);
    assert!(session.transcript().last().unwrap().is_command_line());
}

#[tokio::test]
async fn test_placeholder_verbs() {
    let mut session = test_session();
    for verb in ["cd docs", "rm a.txt", "wget http://example.com", "sudo ls", "exit"] {
        session.run_line(verb).await;
        assert_eq!(
            session.transcript().last(),
            Some(&Fragment::text(NOT_IMPLEMENTED)),
            "{verb}"
        );
    }
}

#[tokio::test]
async fn test_clear_empties_transcript() {
    let mut session = test_session();
    session.run_line("date").await;
    session.run_line("clear").await;

    assert!(session.transcript().is_empty());
    assert_eq!(session.history().entries(), &["date", "clear"]);
}

#[tokio::test]
async fn test_date_and_version() {
    let mut session = test_session();
    session.run_line("date").await;
    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::text("3/14/2019, 9:05:07 PM"))
    );

    session.run_line("version").await;
    assert_eq!(session.transcript().last(), Some(&Fragment::text("v2.0.0")));

    session.run_line("ver").await;
    assert_eq!(session.transcript().last(), Some(&Fragment::text("v2.0.0")));
}

#[tokio::test]
async fn test_theme_without_argument_prints_usage() {
    let mut session = test_session();
    session.run_line("theme").await;

    let output = output_after_banner(&session);
    assert_eq!(output[1], THEME_USAGE);
    assert_eq!(output[2], "Available themes: default, cream");
}

#[test]
fn test_history_walk_through_input_row() {
    let mut session = test_session();
    for line in ["ls", "cat a.txt"] {
        session.set_input(line);
        session.handle_key(KeyEvent::Enter);
    }

    session.handle_key(KeyEvent::Up);
    session.handle_key(KeyEvent::Up);
    assert_eq!(session.input(), "ls");

    session.handle_key(KeyEvent::Down);
    assert_eq!(session.input(), "cat a.txt");
}

#[test]
fn test_backspace_on_blank_row_rings_bell() {
    let bell = RecordingBell::new();
    let rings = bell.counter();
    let mut session = session_with(
        Arc::new(sample_directory()),
        Box::new(MemorySettings::new()),
        Box::new(bell),
    );

    session.handle_key(KeyEvent::Backspace);
    session.set_input("ls");
    session.handle_key(KeyEvent::Backspace);

    assert_eq!(rings.load(Ordering::SeqCst), 1);
}

#[test]
fn test_tab_is_swallowed() {
    let mut session = test_session();
    session.set_input("ca");
    let before = session.transcript().len();

    assert!(session.handle_key(KeyEvent::Tab).is_none());
    assert_eq!(session.input(), "ca");
    assert_eq!(session.transcript().len(), before);
}

#[test]
fn test_flicker_shortcut_reports_state() {
    let mut session = test_session();
    session.handle_key(KeyEvent::Shortcut(Shortcut::ToggleFlicker));

    assert!(session.flicker());
    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::text("Screen flicker: on"))
    );
}
