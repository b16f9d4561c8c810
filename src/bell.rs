//! Terminal bell
//!
//! The bell rings when Backspace is pressed on an empty input row. Ringing
//! is fire-and-forget: a bell that cannot make a sound just does nothing.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::trace;

use crate::config::BellStyle;

/// Something that can be rung
pub trait Bell: Send {
    fn ring(&self);
}

/// Rings the bell of the terminal crtterm was started from
#[derive(Debug, Default, Clone, Copy)]
pub struct SoundBell;

impl Bell for SoundBell {
    fn ring(&self) {
        let mut stderr = std::io::stderr();
        if stderr.write_all(b"\x07").and_then(|_| stderr.flush()).is_err() {
            trace!("bell: stderr unavailable");
        }
    }
}

/// Counts rings so the view can flash the screen
#[derive(Debug, Default, Clone)]
pub struct VisualBell {
    rings: Arc<AtomicU64>,
}

impl VisualBell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared counter, read by the view to detect new rings
    pub fn signal(&self) -> BellSignal {
        BellSignal {
            rings: Arc::clone(&self.rings),
        }
    }
}

impl Bell for VisualBell {
    fn ring(&self) {
        self.rings.fetch_add(1, Ordering::Relaxed);
    }
}

/// Read side of a [`VisualBell`]
#[derive(Debug, Clone)]
pub struct BellSignal {
    rings: Arc<AtomicU64>,
}

impl BellSignal {
    /// Total number of rings so far
    pub fn rings(&self) -> u64 {
        self.rings.load(Ordering::Relaxed)
    }
}

/// A bell that never rings
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBell;

impl Bell for SilentBell {
    fn ring(&self) {}
}

/// Build the bell for a configured style.
///
/// Returns the signal too when the style is visual, so the view can flash.
pub fn from_style(style: BellStyle) -> (Box<dyn Bell>, Option<BellSignal>) {
    match style {
        BellStyle::Sound => (Box::new(SoundBell), None),
        BellStyle::Visual => {
            let bell = VisualBell::new();
            let signal = bell.signal();
            (Box::new(bell), Some(signal))
        }
        BellStyle::None => (Box::new(SilentBell), None),
    }
}
