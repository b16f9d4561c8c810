//! crtterm - a retro CRT-styled fake terminal
//!
//! This library provides the core of crtterm: a prompt that accepts typed
//! commands, keeps a line history and runs a fixed set of verbs against a
//! folder the user granted at startup.
//!
//! ## Features
//!
//! - **Line history:** Up/Down walk committed lines, in-place edits stick
//! - **Command table:** One registry drives both dispatch and `help`
//! - **Directory commands:** `ls` and `cat` over the granted folder
//! - **Themes:** `default` and `cream`, remembered between runs
//! - **CRT effects:** Flicker toggle, interlace scanlines, a bell
//! - **Configuration:** TOML-based configuration files
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`history`] - Line history with cursor navigation
//! - [`commands`] - Parsing, the command table, dispatch and handlers
//! - [`transcript`] - The output sink rendered above the input row
//! - [`session`] - Application state tying the pieces together
//!
//! ### Collaborators
//!
//! - [`directory`] - The granted folder (local filesystem or in-memory)
//! - [`settings`] - Persisted theme name
//! - [`bell`] - Audible or visual bell
//!
//! ### Support
//!
//! - [`config`] - Configuration loading, themes and palettes
//! - [`models`] - Transcript fragments
//! - [`ui`] - egui rendering of the transcript and CRT effects
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use crtterm::{bell::SilentBell, LocalDirectory, MemorySettings, Session, SessionOptions};
//!
//! # async fn demo() -> crtterm::Result<()> {
//! let directory = Arc::new(LocalDirectory::open(".")?);
//! let mut session = Session::new(
//!     SessionOptions::default(),
//!     directory,
//!     Box::new(MemorySettings::new()),
//!     Box::new(SilentBell),
//! );
//!
//! session.run_line("ls").await;
//! for line in session.transcript().plain_lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The GUI runs on the main thread. Commands that only compute resolve
//! while the frame is being handled; `ls` and `cat` are spawned on a tokio
//! runtime and their results come back over an mpsc channel.

pub mod bell;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod history;
pub mod models;
pub mod session;
pub mod settings;
pub mod transcript;

// UI modules
pub mod ui;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader, Theme};
pub use error::{Error, Result};
pub use session::{CompletedCommand, KeyEvent, PendingCommand, Session, SessionOptions, Shortcut};

// Convenience re-exports for common types
pub use commands::{Action, CommandError, Dispatcher, ParsedCommand, Registry};
pub use directory::{Directory, LocalDirectory, MemoryDirectory};
pub use history::{Direction, LineHistory};
pub use settings::{FileSettings, MemorySettings, SettingsStore};
pub use transcript::{OutputSink, Transcript};

// Version information
/// The current version of crtterm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
