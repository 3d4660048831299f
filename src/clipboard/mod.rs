//! Clipboard capture backends
//!
//! Two ways to read the system clipboard:
//! - [`SystemClipboard`]: the native clipboard API via `arboard`.
//! - [`ShellClipboard`]: platform utilities (`pbpaste`, PowerShell
//!   `Get-Clipboard`, `xclip`/`xsel`) driven as child processes, for
//!   environments where the native API is unavailable.

mod shell;
mod system;

pub use shell::ShellClipboard;
pub use system::SystemClipboard;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A source of clipboard text.
pub trait ClipboardBackend {
    /// Read the current clipboard text content.
    fn read_text(&self) -> Result<String, ClipboardError>;
}

/// Clipboard read failure, surfaced to the user as a single message.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(String),

    #[error("failed to run {utility}: {source}")]
    Spawn {
        utility: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{utility} exited with an error: {stderr}")]
    Utility {
        utility: &'static str,
        stderr: String,
    },

    #[error("clipboard content is not valid UTF-8")]
    NotUtf8,
}

/// Which clipboard backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Native clipboard API (arboard)
    #[default]
    System,
    /// Platform clipboard utilities run as child processes
    Shell,
}

/// Select a backend implementation by kind.
pub fn select_backend(kind: BackendKind) -> Box<dyn ClipboardBackend> {
    match kind {
        BackendKind::System => Box::new(SystemClipboard),
        BackendKind::Shell => Box::new(ShellClipboard),
    }
}
