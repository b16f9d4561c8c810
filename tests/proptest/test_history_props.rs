//! Property-based tests for line history
//!
//! Random command lines and navigation sequences against [`LineHistory`]
//! and the session's submit path.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use crtterm::history::{Direction, LineHistory};
use proptest::prelude::*;
use test_utils::test_session;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Previous), Just(Direction::Next)]
}

proptest! {
    #[test]
    fn test_submitted_line_is_trimmed_last_entry(
        existing in prop::collection::vec("[a-z]{1,8}", 0..10),
        line in "[a-zA-Z0-9 ]{0,20}[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}",
    ) {
        let mut session = test_session();
        for entry in &existing {
            session.set_input(entry.clone());
            session.submit_and_poll();
        }

        session.set_input(line.clone());
        session.submit_and_poll();

        let history = session.history();
        prop_assert_eq!(history.len(), existing.len() + 1);
        prop_assert_eq!(history.last(), Some(line.trim()));
        prop_assert_eq!(history.cursor(), history.len());
    }

    #[test]
    fn test_blank_submission_changes_nothing(line in "[ \t]{0,12}") {
        let mut session = test_session();
        session.set_input("ls");
        session.submit_and_poll();

        session.set_input(line);
        prop_assert!(session.submit_and_poll().is_none());
        prop_assert_eq!(session.history().entries(), &["ls".to_string()][..]);
        prop_assert_eq!(session.history().cursor(), 1);
    }

    #[test]
    fn test_walk_back_and_forth_restores_live_line(
        entries in prop::collection::vec("[a-z]{1,8}", 1..10),
        live in "[a-z ]{0,10}",
        steps in 0usize..12,
    ) {
        let mut history = LineHistory::with_entries(entries.clone());
        let mut current = live.clone();

        for _ in 0..steps {
            if let Some(line) = history.navigate(Direction::Previous, &current) {
                current = line.to_string();
            }
        }
        for _ in 0..steps {
            if let Some(line) = history.navigate(Direction::Next, &current) {
                current = line.to_string();
            }
        }

        prop_assert_eq!(current, live);
        prop_assert_eq!(history.entries(), &entries[..]);
    }

    #[test]
    fn test_cursor_stays_in_bounds(
        entries in prop::collection::vec("[a-z]{1,8}", 0..6),
        moves in prop::collection::vec(direction(), 0..40),
    ) {
        let mut history = LineHistory::with_entries(entries);
        let mut current = String::new();

        for step in moves {
            if let Some(line) = history.navigate(step, &current) {
                current = line.to_string();
            }
            prop_assert!(history.cursor() <= history.len());
        }
    }

    #[test]
    fn test_in_place_edit_sticks(
        entries in prop::collection::vec("[a-z]{1,8}", 2..6),
        edit in "[A-Z]{1,8}",
    ) {
        let mut history = LineHistory::with_entries(entries.clone());
        let last = entries.len() - 1;

        history.navigate(Direction::Previous, "");
        history.navigate(Direction::Previous, &edit);

        prop_assert_eq!(&history.entries()[last], &edit);
    }
}
