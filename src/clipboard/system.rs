//! Native clipboard backend via arboard

use arboard::Clipboard;
use tracing::debug;

use super::{ClipboardBackend, ClipboardError};

/// Reads the clipboard through the platform's native API.
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        debug!("Reading clipboard via native API");

        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
        clipboard
            .get_text()
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}
