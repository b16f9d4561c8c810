//! Property-based tests for command dispatch
//!
//! Any verb outside the command table answers "command not found", every
//! placeholder answers the same line, and verb case never matters.

use std::sync::Arc;

use chrono::Local;
use crtterm::commands::handlers::NOT_IMPLEMENTED;
use crtterm::commands::{not_found_message, CommandContext};
use crtterm::models::Fragment;
use crtterm::{Action, Dispatcher, MemoryDirectory, ParsedCommand, Registry, Theme};
use proptest::prelude::*;
use tokio_test::block_on;

fn context() -> CommandContext {
    CommandContext {
        directory: Arc::new(MemoryDirectory::new("granted").with_file("a.txt", "alpha")),
        now: Local::now(),
        theme: Theme::Default,
    }
}

fn run(line: &str) -> Vec<Action> {
    let parsed = ParsedCommand::parse(line).expect("non-blank line");
    block_on(Dispatcher::default().dispatch(parsed, context())).expect("handler succeeds")
}

fn placeholder_verb() -> impl Strategy<Value = &'static str> {
    let verbs: Vec<&'static str> = Registry::builtin()
        .iter()
        .filter(|spec| !spec.implemented)
        .map(|spec| spec.verb)
        .collect();
    prop::sample::select(verbs)
}

proptest! {
    #[test]
    fn test_unknown_verbs_not_found(
        verb in "[a-z][a-z0-9]{0,10}",
        args in prop::collection::vec("[a-z0-9.]{1,6}", 0..4),
    ) {
        prop_assume!(!Registry::builtin().contains(&verb));

        let line = std::iter::once(verb.clone()).chain(args).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(
            run(&line),
            vec![Action::Print(Fragment::text(not_found_message(&verb)))]
        );
    }

    #[test]
    fn test_placeholders_not_implemented(
        verb in placeholder_verb(),
        args in prop::collection::vec("[a-z0-9./]{1,6}", 0..4),
    ) {
        let line = std::iter::once(verb.to_string()).chain(args).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(
            run(&line),
            vec![Action::Print(Fragment::text(NOT_IMPLEMENTED))]
        );
    }

    #[test]
    fn test_verb_case_is_ignored(mask in prop::collection::vec(any::<bool>(), 7)) {
        let mixed: String = "version"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();

        prop_assert_eq!(run(&mixed), run("version"));
    }

    #[test]
    fn test_parse_splits_on_any_whitespace(
        tokens in prop::collection::vec("[a-zA-Z0-9.]{1,6}", 1..6),
        separators in prop::collection::vec("[ \t]{1,3}", 6),
    ) {
        let mut line = String::new();
        for (token, sep) in tokens.iter().zip(separators.iter()) {
            line.push_str(sep);
            line.push_str(token);
        }

        let parsed = ParsedCommand::parse(&line).unwrap();
        prop_assert_eq!(parsed.verb, tokens[0].to_lowercase());
        prop_assert_eq!(parsed.args, tokens[1..].to_vec());
    }
}
