//! The command table
//!
//! One static table lists every verb the terminal recognizes. Dispatch
//! looks verbs up here and `help` lists the entries marked `listed`, so the
//! two can never drift apart.

use std::fmt;

use futures::future::{self, FutureExt};

use super::handlers;
use super::{CommandContext, CommandFuture, CommandResult};

/// Handler that finishes without suspending
pub type SyncHandler = fn(&CommandContext, &[String]) -> CommandResult;

/// Handler that suspends on the granted directory
pub type AsyncHandler = fn(CommandContext, Vec<String>) -> CommandFuture;

/// A verb's behavior
#[derive(Clone, Copy)]
pub enum Handler {
    Sync(SyncHandler),
    Async(AsyncHandler),
}

impl Handler {
    /// Run the handler; synchronous ones come back as a ready future
    pub fn invoke(self, context: CommandContext, args: Vec<String>) -> CommandFuture {
        match self {
            Handler::Sync(handler) => future::ready(handler(&context, &args)).boxed(),
            Handler::Async(handler) => handler(context, args),
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Handler::Async(_))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Sync(_) => f.write_str("Handler::Sync"),
            Handler::Async(_) => f.write_str("Handler::Async"),
        }
    }
}

/// One row of the command table
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Lower-case verb
    pub verb: &'static str,
    /// Shown by `help`
    pub listed: bool,
    /// Has real behavior, as opposed to the placeholder
    pub implemented: bool,
    pub handler: Handler,
}

const fn command(verb: &'static str, handler: Handler) -> CommandSpec {
    CommandSpec {
        verb,
        listed: true,
        implemented: true,
        handler,
    }
}

const fn placeholder(verb: &'static str) -> CommandSpec {
    CommandSpec {
        verb,
        listed: true,
        implemented: false,
        handler: Handler::Sync(handlers::not_implemented),
    }
}

const fn hidden(spec: CommandSpec) -> CommandSpec {
    CommandSpec {
        listed: false,
        ..spec
    }
}

/// Every recognized verb, in `help` order
pub static COMMANDS: &[CommandSpec] = &[
    command("3d", Handler::Sync(handlers::three_d)),
    command("cat", Handler::Async(handlers::cat)),
    placeholder("cd"),
    placeholder("cp"),
    command("clear", Handler::Sync(handlers::clear)),
    command("date", Handler::Sync(handlers::date)),
    command("help", Handler::Sync(handlers::help)),
    placeholder("install"),
    command("ls", Handler::Async(handlers::ls)),
    placeholder("mkdir"),
    placeholder("mv"),
    placeholder("open"),
    placeholder("pwd"),
    placeholder("rm"),
    placeholder("rmdir"),
    command("theme", Handler::Sync(handlers::theme)),
    command("version", Handler::Sync(handlers::version)),
    placeholder("who"),
    placeholder("wget"),
    hidden(placeholder("exit")),
    hidden(placeholder("init")),
    hidden(placeholder("sudo")),
    hidden(command("ver", Handler::Sync(handlers::version))),
];

/// Lookup view over a command table
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [CommandSpec],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The built-in command table
    pub fn builtin() -> Self {
        Self { commands: COMMANDS }
    }

    /// Find the table row for an already lower-cased verb
    pub fn lookup(&self, verb: &str) -> Option<&'static CommandSpec> {
        self.commands.iter().find(|spec| spec.verb == verb)
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.lookup(verb).is_some()
    }

    /// Verbs shown by `help`, in table order
    pub fn listed(&self) -> impl Iterator<Item = &'static str> {
        self.commands
            .iter()
            .filter(|spec| spec.listed)
            .map(|spec| spec.verb)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CommandSpec> {
        self.commands.iter()
    }
}
