//! termscribe - terminal transcript capture
//!
//! Captures terminal text and writes it to a timestamped transcript file,
//! with escape sequences and carriage returns stripped.
//!
//! ## Capture sources
//!
//! 1. **Recorded session**: a shell runs inside a PTY and its raw output is
//!    accumulated per session; the transcript is saved when the session ends.
//!
//! 2. **Clipboard**: the current clipboard text is captured, either through
//!    the native clipboard API or by shelling out to the platform's
//!    clipboard utility.

pub mod capture;
pub mod clipboard;
pub mod config;
pub mod sanitize;
pub mod transcript;

pub use sanitize::sanitize;
pub use transcript::{SaveError, save_transcript, session_capture, transcript_filename};
