//! Core data models for crtterm
//!
//! This module contains the data structures that flow between the command
//! handlers, the session and the transcript view.

pub mod fragment;

// Re-exports for convenience
pub use fragment::{EntryKind, Fragment, ListingItem};
