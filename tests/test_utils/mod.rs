//! Test Utilities and Mocks
//!
//! Collaborator doubles and session fixtures shared by the integration
//! tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

// Re-exports for convenience
pub use fixtures::{fixed_now, sample_directory, session_with, test_session};
pub use mocks::{FailingSettings, RecordingBell};
