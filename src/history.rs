//! Command line history
//!
//! This module keeps the lines committed during a session and lets the
//! input row walk back and forth through them with the arrow keys.
//!
//! The cursor ranges over `[0, len]`. Position `len` is the live edit
//! line, which is not a stored entry; whatever was typed there before
//! navigation started is kept as the pending edit and restored when the
//! cursor comes back.
//!
//! Navigating away from a stored entry writes the current line value back
//! into that entry, so an in-place edit of a recalled line sticks in the
//! history even if it is never committed.

use tracing::trace;

/// Direction of a history walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards older entries (Up arrow)
    Previous,
    /// Towards newer entries and the live line (Down arrow)
    Next,
}

/// In-memory line history with cursor navigation
#[derive(Debug, Clone, Default)]
pub struct LineHistory {
    /// Committed lines, oldest first
    entries: Vec<String>,
    /// Cursor into `entries`, `entries.len()` is the live line
    cursor: usize,
    /// Live line content saved when navigation started
    pending: String,
}

impl LineHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history pre-seeded with entries, cursor on the live line
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let cursor = entries.len();
        Self {
            entries,
            cursor,
            pending: String::new(),
        }
    }

    /// Commit a line. Returns false (and changes nothing) for an empty line.
    pub fn commit(&mut self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }

        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
        self.pending.clear();
        true
    }

    /// Step to the previous (older) entry
    pub fn navigate_previous(&mut self, current: &str) -> Option<&str> {
        self.navigate(Direction::Previous, current)
    }

    /// Step to the next (newer) entry, or back to the live line
    pub fn navigate_next(&mut self, current: &str) -> Option<&str> {
        self.navigate(Direction::Next, current)
    }

    /// Move the cursor one step and return the line to show.
    ///
    /// Returns `None` when there is no history at all, in which case the
    /// caller leaves the input line untouched.
    pub fn navigate(&mut self, direction: Direction, current: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        match self.entries.get_mut(self.cursor) {
            Some(entry) => {
                if entry.as_str() != current {
                    trace!(position = self.cursor, "persisting in-place edit into history");
                    *entry = current.to_string();
                }
            }
            None => {
                self.pending = current.to_string();
            }
        }

        self.cursor = match direction {
            Direction::Previous => self.cursor.saturating_sub(1),
            Direction::Next => (self.cursor + 1).min(self.entries.len()),
        };

        Some(self.current())
    }

    /// Line at the cursor, or the pending edit on the live position
    pub fn current(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or(self.pending.as_str())
    }

    /// Whether the cursor sits on the live edit line
    pub fn is_live(&self) -> bool {
        self.cursor == self.entries.len()
    }

    /// All committed entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Saved live-line content
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Number of committed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been committed yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}
