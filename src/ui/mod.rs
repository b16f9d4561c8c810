//! UI components and rendering
//!
//! This module contains the egui side of crtterm: the transcript view,
//! the CRT overlay effects, the help overlay and palette conversion.
//! None of it holds session state; the app passes what each frame needs.

pub mod colors;
pub mod crt;
pub mod help_overlay;
pub mod transcript_view;

// Re-exports for convenience
pub use colors::{ToEguiColor, UiColors};
pub use crt::{BellFlash, CrtEffects};
pub use help_overlay::HelpOverlay;
pub use transcript_view::{Row, TranscriptView};
