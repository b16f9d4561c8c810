//! Transcript Fragment Model
//!
//! A fragment is one rendered item in the terminal transcript: the frozen
//! copy of a submitted input row, a line of command output, a directory
//! listing, and so on. Handlers produce fragments; the view decides how
//! each kind looks under the active theme.

use serde::{Deserialize, Serialize};

/// Kind of a directory listing item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A sub-directory
    Folder,
    /// A regular file
    File,
}

/// One entry in a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Entry name
    pub name: String,
    /// Folder or file
    pub kind: EntryKind,
}

impl ListingItem {
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Folder,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}

/// A single transcript item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    /// Frozen, read-only copy of a submitted input row
    CommandLine { prompt: String, line: String },
    /// One line of output
    Text(String),
    /// A line followed by vertical spacing
    Paragraph(String),
    /// Directory listing, one item per row
    Listing(Vec<ListingItem>),
    /// Preformatted block, whitespace preserved
    Preformatted(String),
    /// User-visible error line
    Error(String),
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Fragment::Paragraph(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Fragment::Error(text.into())
    }

    /// Plain text rendering, used for logging and assertions
    pub fn plain_text(&self) -> String {
        match self {
            Fragment::CommandLine { prompt, line } => format!("{} {}", prompt, line),
            Fragment::Text(text)
            | Fragment::Paragraph(text)
            | Fragment::Preformatted(text)
            | Fragment::Error(text) => text.clone(),
            Fragment::Listing(items) => items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Whether this is an echoed input row rather than command output
    pub fn is_command_line(&self) -> bool {
        matches!(self, Fragment::CommandLine { .. })
    }
}
