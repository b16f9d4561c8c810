//! Terminal transcript
//!
//! The transcript is the growing list of fragments above the input row.
//! Appending asks the view to keep the newest content visible; clearing
//! empties it and resets the scroll position.

use std::collections::VecDeque;

use crate::models::Fragment;

/// Default number of fragments kept before the oldest are dropped
pub const DEFAULT_SCROLLBACK: usize = 5_000;

/// Where rendered command output goes
pub trait OutputSink {
    /// Append a fragment to the end of the output
    fn append(&mut self, fragment: Fragment);

    /// Remove all output
    fn clear(&mut self);
}

/// In-memory transcript with bounded scrollback
#[derive(Debug, Clone)]
pub struct Transcript {
    fragments: VecDeque<Fragment>,
    max_fragments: usize,
    scroll_to_bottom: bool,
    /// Bumped on every clear so the view can reset its scroll area
    generation: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLBACK)
    }
}

impl Transcript {
    pub fn new(max_fragments: usize) -> Self {
        Self {
            fragments: VecDeque::new(),
            max_fragments: max_fragments.max(1),
            scroll_to_bottom: false,
            generation: 0,
        }
    }

    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn last(&self) -> Option<&Fragment> {
        self.fragments.back()
    }

    /// Number of times the transcript has been cleared
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Consume the pending scroll request, if any
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }

    /// Plain text of every fragment, one per entry
    pub fn plain_lines(&self) -> Vec<String> {
        self.fragments.iter().map(Fragment::plain_text).collect()
    }
}

impl OutputSink for Transcript {
    fn append(&mut self, fragment: Fragment) {
        self.fragments.push_back(fragment);
        while self.fragments.len() > self.max_fragments {
            self.fragments.pop_front();
        }
        self.scroll_to_bottom = true;
    }

    fn clear(&mut self) {
        self.fragments.clear();
        self.scroll_to_bottom = false;
        self.generation += 1;
    }
}
