//! Terminal session state
//!
//! [`Session`] is the one object holding everything the terminal knows:
//! the line history, the transcript, the input row, the active theme and
//! the cosmetic toggles. Collaborators (settings storage, the bell, the
//! granted directory) are injected, so the whole input → parse → dispatch
//! → render pipeline runs without a window.
//!
//! Each kind of input event has its own entry point. Submitting a line
//! returns a [`PendingCommand`]; whoever drives the session decides how to
//! await it and hands the [`CompletedCommand`] back through
//! [`Session::complete`].

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use futures::future::FutureExt;
use tracing::{debug, info, warn};

use crate::bell::Bell;
use crate::commands::handlers::{DATE_FORMAT, VERSION};
use crate::commands::{
    Action, CommandContext, CommandFuture, CommandResult, Dispatcher, ParsedCommand,
};
use crate::config::{Config, Theme};
use crate::directory::Directory;
use crate::history::{Direction, LineHistory};
use crate::models::Fragment;
use crate::settings::SettingsStore;
use crate::transcript::{OutputSink, Transcript, DEFAULT_SCROLLBACK};

/// Source of the current local time
pub type Clock = fn() -> DateTime<Local>;

/// Startup options for a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Name shown in the welcome banner
    pub title: String,
    /// Prompt echoed in front of committed lines
    pub prompt: String,
    /// Transcript cap in fragments
    pub scrollback: usize,
    /// Initial flicker state
    pub flicker: bool,
    /// Theme for this run only; wins over the stored one and is not persisted
    pub theme_override: Option<Theme>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            title: "crtterm".to_string(),
            prompt: "$".to_string(),
            scrollback: DEFAULT_SCROLLBACK,
            flicker: false,
            theme_override: None,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.ui.title.clone(),
            prompt: config.ui.prompt.clone(),
            scrollback: config.terminal.scrollback_fragments,
            flicker: config.ui.flicker,
            theme_override: None,
        }
    }

    pub fn with_theme_override(mut self, theme: Option<Theme>) -> Self {
        self.theme_override = theme;
        self
    }
}

/// Keyboard shortcuts handled by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+S
    ToggleFlicker,
    /// Escape
    ToggleHelp,
}

/// Key presses the input row forwards to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Shortcut(Shortcut),
}

/// A dispatched command whose handler may still be running
pub struct PendingCommand {
    id: u64,
    verb: String,
    future: CommandFuture,
}

impl fmt::Debug for PendingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCommand")
            .field("id", &self.id)
            .field("verb", &self.verb)
            .finish_non_exhaustive()
    }
}

impl PendingCommand {
    /// Submission number, unique within the session
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Run the handler to completion
    pub async fn wait(self) -> CompletedCommand {
        let result = self.future.await;
        CompletedCommand {
            id: self.id,
            verb: self.verb,
            result,
        }
    }

    /// Poll the handler once.
    ///
    /// Handlers that never suspend finish here; anything else comes back
    /// unchanged and must be awaited elsewhere.
    pub fn poll_now(self) -> Result<CompletedCommand, PendingCommand> {
        let PendingCommand {
            id,
            verb,
            mut future,
        } = self;

        match (&mut future).now_or_never() {
            Some(result) => Ok(CompletedCommand { id, verb, result }),
            None => Err(PendingCommand { id, verb, future }),
        }
    }
}

/// A finished command, ready to be applied to the session
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedCommand {
    pub id: u64,
    pub verb: String,
    pub result: CommandResult,
}

/// The terminal's application state
pub struct Session {
    options: SessionOptions,
    history: LineHistory,
    dispatcher: Dispatcher,
    transcript: Transcript,
    input: String,
    theme: Theme,
    flicker: bool,
    help_visible: bool,
    view_3d: bool,
    settings: Box<dyn SettingsStore>,
    bell: Box<dyn Bell>,
    directory: Arc<dyn Directory>,
    clock: Clock,
    next_id: u64,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("options", &self.options)
            .field("history", &self.history)
            .field("input", &self.input)
            .field("theme", &self.theme)
            .field("flicker", &self.flicker)
            .field("help_visible", &self.help_visible)
            .field("view_3d", &self.view_3d)
            .field("directory", &self.directory.name())
            .field("fragments", &self.transcript.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start a session using the wall clock
    pub fn new(
        options: SessionOptions,
        directory: Arc<dyn Directory>,
        settings: Box<dyn SettingsStore>,
        bell: Box<dyn Bell>,
    ) -> Self {
        Self::with_clock(options, directory, settings, bell, Local::now)
    }

    /// Start a session with an explicit time source.
    ///
    /// Reads the stored theme once and prints the welcome banner.
    pub fn with_clock(
        options: SessionOptions,
        directory: Arc<dyn Directory>,
        settings: Box<dyn SettingsStore>,
        bell: Box<dyn Bell>,
        clock: Clock,
    ) -> Self {
        let theme = initial_theme(&options, settings.as_ref());
        info!(
            theme = %theme,
            directory = %directory.name(),
            "session started"
        );

        let mut session = Self {
            transcript: Transcript::new(options.scrollback),
            flicker: options.flicker,
            options,
            history: LineHistory::new(),
            dispatcher: Dispatcher::default(),
            input: String::new(),
            theme,
            help_visible: false,
            view_3d: false,
            settings,
            bell,
            directory,
            clock,
            next_id: 0,
        };
        session.print_banner();
        session
    }

    fn print_banner(&mut self) {
        let now = (self.clock)();
        self.transcript.append(Fragment::text(format!(
            "Welcome to {}! (v{})",
            self.options.title, VERSION
        )));
        self.transcript
            .append(Fragment::text(now.format(DATE_FORMAT).to_string()));
        self.transcript
            .append(Fragment::paragraph("Documentation: type \"help\""));
    }

    /// Submit whatever is in the input row.
    ///
    /// The row is cleared once a command runs; a blank row keeps its text.
    pub fn submit(&mut self) -> Option<PendingCommand> {
        if self.input.trim().is_empty() {
            let line = self.input.clone();
            return self.submit_line(&line);
        }
        let line = std::mem::take(&mut self.input);
        self.submit_line(&line)
    }

    /// Echo `line` into the transcript and dispatch it.
    ///
    /// The echo happens for every line, blank ones included. Blank lines
    /// stop there: nothing is recorded and nothing runs. History keeps the
    /// trimmed line.
    pub fn submit_line(&mut self, line: &str) -> Option<PendingCommand> {
        self.transcript.append(Fragment::CommandLine {
            prompt: self.options.prompt.clone(),
            line: line.to_string(),
        });

        let parsed = ParsedCommand::parse(line)?;
        self.history.commit(line.trim());

        let id = self.next_id;
        self.next_id += 1;
        debug!(id, verb = %parsed.verb, "submitted command");

        let verb = parsed.verb.clone();
        let future = self.dispatcher.dispatch(parsed, self.context());
        Some(PendingCommand { id, verb, future })
    }

    /// Submit the input row and apply the result if it is ready at once.
    ///
    /// Returns the command when its handler is still running.
    pub fn submit_and_poll(&mut self) -> Option<PendingCommand> {
        match self.submit()?.poll_now() {
            Ok(completed) => {
                self.complete(completed);
                None
            }
            Err(pending) => Some(pending),
        }
    }

    /// Submit `line` and wait for its handler
    pub async fn run_line(&mut self, line: &str) {
        if let Some(pending) = self.submit_line(line) {
            let completed = pending.wait().await;
            self.complete(completed);
        }
    }

    /// Apply a finished command's output
    pub fn complete(&mut self, completed: CompletedCommand) {
        match completed.result {
            Ok(actions) => {
                for action in actions {
                    self.apply(action);
                }
            }
            Err(err) => {
                warn!(id = completed.id, verb = %completed.verb, "command failed: {}", err);
                self.transcript.append(Fragment::error(err.to_string()));
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Print(fragment) => self.transcript.append(fragment),
            Action::ClearScreen => self.transcript.clear(),
            Action::SetTheme(theme) => self.set_theme(theme),
            Action::Toggle3dView => {
                self.view_3d = !self.view_3d;
                debug!(enabled = self.view_3d, "3d view toggled");
            }
        }
    }

    /// Switch theme and persist the choice. The default theme is stored as
    /// no value at all.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;

        let stored = if theme.is_default() {
            self.settings.clear_theme()
        } else {
            self.settings.set_theme(theme.name())
        };

        match stored {
            Ok(()) => info!(theme = %theme, "theme changed"),
            Err(e) => warn!(theme = %theme, "theme changed but could not be saved: {}", e),
        }
    }

    /// Replace the input row with the neighbouring history line
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match self.history.navigate(direction, &self.input) {
            Some(line) => {
                self.input = line.to_string();
                true
            }
            None => false,
        }
    }

    /// Backspace on a blank input row rings the bell. Returns whether it did.
    pub fn backspace(&mut self) -> bool {
        if self.input.trim().is_empty() {
            self.bell.ring();
            true
        } else {
            false
        }
    }

    /// Tab is swallowed so focus never leaves the input row
    pub fn tab(&mut self) {}

    pub fn shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::ToggleFlicker => {
                self.flicker = !self.flicker;
                let state = if self.flicker { "on" } else { "off" };
                debug!(state, "screen flicker toggled");
                self.transcript
                    .append(Fragment::text(format!("Screen flicker: {}", state)));
            }
            Shortcut::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }
        }
    }

    /// Route a key press. Only Enter can produce a command.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PendingCommand> {
        match key {
            KeyEvent::Enter => return self.submit_and_poll(),
            KeyEvent::Backspace => {
                self.backspace();
            }
            KeyEvent::Tab => self.tab(),
            KeyEvent::Up => {
                self.navigate(Direction::Previous);
            }
            KeyEvent::Down => {
                self.navigate(Direction::Next);
            }
            KeyEvent::Shortcut(shortcut) => self.shortcut(shortcut),
        }
        None
    }

    fn context(&self) -> CommandContext {
        CommandContext {
            directory: Arc::clone(&self.directory),
            now: (self.clock)(),
            theme: self.theme,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn history(&self) -> &LineHistory {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn flicker(&self) -> bool {
        self.flicker
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn view_3d(&self) -> bool {
        self.view_3d
    }

    pub fn prompt(&self) -> &str {
        &self.options.prompt
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }
}

fn initial_theme(options: &SessionOptions, settings: &dyn SettingsStore) -> Theme {
    if let Some(theme) = options.theme_override {
        return theme;
    }

    match settings.theme() {
        None => Theme::Default,
        Some(name) => Theme::from_name(&name).unwrap_or_else(|| {
            warn!("Stored theme '{}' is unknown, using default", name);
            Theme::Default
        }),
    }
}
