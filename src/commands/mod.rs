//! Command parsing and dispatch
//!
//! A submitted line is split on whitespace into a verb and its arguments.
//! The verb is lower-cased and looked up in the [`registry`] table, which is
//! the single list of known verbs used both for dispatch and for `help`.
//!
//! Every handler has the same contract: it returns a future resolving to a
//! [`CommandResult`], a list of [`Action`]s on success or a
//! [`CommandError`] on failure. Synchronous handlers resolve immediately.
//! The session applies the actions; handlers never touch session state.

pub mod handlers;
pub mod registry;

use std::sync::Arc;

use chrono::{DateTime, Local};
use futures::future::{self, BoxFuture, FutureExt};
use thiserror::Error;
use tracing::debug;

use crate::config::Theme;
use crate::directory::{Directory, DirectoryError};
use crate::models::Fragment;

pub use registry::{CommandSpec, Handler, Registry};

/// A command line split into verb and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased first token
    pub verb: String,
    /// Remaining tokens, in order
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Parse a line. Returns `None` for an empty or blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next()?.to_lowercase();
        let args = tokens.map(str::to_string).collect();
        Some(Self { verb, args })
    }

    /// Arguments joined back with single spaces
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}

/// A state change or output requested by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a fragment to the transcript
    Print(Fragment),
    /// Empty the transcript
    ClearScreen,
    /// Switch to a theme and persist it
    SetTheme(Theme),
    /// Flip the 3D view (no rendering behind it yet)
    Toggle3dView,
}

/// Successful handler output, applied in order
pub type CommandOutput = Vec<Action>;

/// Handler failure, shown to the user as an error line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The granted directory failed
    #[error("{verb}: {source}")]
    Directory {
        verb: &'static str,
        source: DirectoryError,
    },
}

impl CommandError {
    /// Wrap a directory failure for `verb`
    pub fn directory(verb: &'static str) -> impl Fn(DirectoryError) -> CommandError {
        move |source| CommandError::Directory { verb, source }
    }
}

/// Result every handler resolves to
pub type CommandResult = Result<CommandOutput, CommandError>;

/// Future returned by dispatch
pub type CommandFuture = BoxFuture<'static, CommandResult>;

/// Everything a handler may read
#[derive(Clone)]
pub struct CommandContext {
    /// The granted directory
    pub directory: Arc<dyn Directory>,
    /// Wall clock time at dispatch
    pub now: DateTime<Local>,
    /// Theme active at dispatch
    pub theme: Theme,
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("directory", &self.directory.name())
            .field("now", &self.now)
            .field("theme", &self.theme)
            .finish()
    }
}

/// Maps parsed commands to handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Run the handler for `command`.
    ///
    /// Unknown verbs resolve to a "command not found" line.
    pub fn dispatch(&self, command: ParsedCommand, context: CommandContext) -> CommandFuture {
        match self.registry.lookup(&command.verb) {
            Some(spec) => {
                debug!(verb = %command.verb, args = ?command.args, "dispatching command");
                spec.handler.invoke(context, command.args)
            }
            None => {
                debug!(verb = %command.verb, "unknown command");
                future::ready(Ok(vec![Action::Print(Fragment::text(not_found_message(
                    &command.verb,
                )))]))
                .boxed()
            }
        }
    }
}

/// Output for a verb outside the command table
pub fn not_found_message(verb: &str) -> String {
    format!("{}: command not found.", verb)
}
