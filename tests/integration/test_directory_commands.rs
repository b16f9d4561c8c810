//! Integration Tests for Directory Commands
//!
//! `ls` and `cat` against a real temporary folder and against in-memory
//! folders that fail on purpose.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::fs;
use std::sync::Arc;

use crtterm::bell::SilentBell;
use crtterm::commands::handlers::CAT_USAGE;
use crtterm::models::{Fragment, ListingItem};
use crtterm::settings::MemorySettings;
use crtterm::{Directory, LocalDirectory, MemoryDirectory, Session};
use tempfile::TempDir;
use test_utils::session_with;

fn granted_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "first line\n    second line\n").unwrap();
    fs::write(dir.path().join("my file.txt"), "spaced").unwrap();
    fs::create_dir(dir.path().join("photos")).unwrap();
    dir
}

fn session_over(directory: Arc<dyn Directory>) -> Session {
    session_with(
        directory,
        Box::new(MemorySettings::new()),
        Box::new(SilentBell),
    )
}

fn local_session(dir: &TempDir) -> Session {
    session_over(Arc::new(LocalDirectory::open(dir.path()).unwrap()))
}

#[tokio::test]
async fn test_ls_lists_folder_sorted() {
    let dir = granted_folder();
    let mut session = local_session(&dir);

    session.run_line("ls").await;

    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::Listing(vec![
            ListingItem::file("my file.txt"),
            ListingItem::file("notes.txt"),
            ListingItem::folder("photos"),
        ]))
    );
}

#[tokio::test]
async fn test_cat_preserves_whitespace() {
    let dir = granted_folder();
    let mut session = local_session(&dir);

    session.run_line("cat notes.txt").await;

    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::Preformatted(
            "first line\n    second line\n".to_string()
        ))
    );
}

#[tokio::test]
async fn test_cat_joins_arguments() {
    let dir = granted_folder();
    let mut session = local_session(&dir);

    session.run_line("CAT my file.txt").await;

    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::Preformatted("spaced".to_string()))
    );
}

#[tokio::test]
async fn test_cat_errors_are_visible() {
    let dir = granted_folder();
    let mut session = local_session(&dir);

    session.run_line("cat missing.txt").await;
    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::error("cat: missing.txt: No such file"))
    );

    session.run_line("cat photos").await;
    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::error("cat: photos: Is a directory"))
    );
}

#[tokio::test]
async fn test_cat_stays_inside_granted_folder() {
    let dir = granted_folder();
    let mut session = local_session(&dir);

    session.run_line("cat ../notes.txt").await;

    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::error("cat: ../notes.txt: No such file"))
    );
}

#[tokio::test]
async fn test_cat_without_argument_never_touches_directory() {
    let directory = Arc::new(MemoryDirectory::new("granted").with_file("a.txt", "alpha"));
    let mut session = session_over(directory.clone());

    session.run_line("cat").await;

    assert_eq!(session.transcript().last(), Some(&Fragment::text(CAT_USAGE)));
    assert_eq!(directory.calls(), 0);
}

#[tokio::test]
async fn test_ls_failure_is_visible() {
    let directory = Arc::new(MemoryDirectory::new("granted").failing_listing("access revoked"));
    let mut session = session_over(directory);

    session.run_line("ls").await;

    assert_eq!(
        session.transcript().last(),
        Some(&Fragment::error("ls: cannot list directory: access revoked"))
    );
}

#[tokio::test]
async fn test_ls_on_removed_folder() {
    let dir = granted_folder();
    let directory = LocalDirectory::open(dir.path()).unwrap();
    let path = dir.path().to_path_buf();
    drop(dir);
    assert!(!path.exists());

    let mut session = session_over(Arc::new(directory));
    session.run_line("ls").await;

    match session.transcript().last() {
        Some(Fragment::Error(message)) => {
            assert!(message.starts_with("ls: cannot list directory:"))
        }
        other => panic!("expected an error line, got {other:?}"),
    }
}

#[test]
fn test_granting_a_file_fails() {
    let dir = granted_folder();
    assert!(LocalDirectory::open(dir.path().join("notes.txt")).is_err());
}
