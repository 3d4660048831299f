//! Clip command implementation

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use termscribe::clipboard::{BackendKind, select_backend};
use termscribe::config::Config;
use termscribe::transcript::{SaveError, resolve_destination, save_transcript};

/// Read the system clipboard and save its content as a transcript.
pub async fn clip_command(
    work_dir: &Path,
    config_path: Option<PathBuf>,
    backend: Option<BackendKind>,
) -> Result<()> {
    let config = Config::load(work_dir, config_path.as_deref())?;
    let kind = backend.unwrap_or(config.settings.clipboard_backend);
    let clipboard = select_backend(kind);

    // Give whatever populated the clipboard a moment to finish. Best effort
    // only: nothing signals completion.
    tokio::time::sleep(Duration::from_millis(config.settings.settle_delay_ms)).await;

    let raw = clipboard.read_text().map_err(SaveError::Clipboard)?;

    if raw.is_empty() {
        eprintln!("Warning: clipboard is empty, no transcript saved");
        return Ok(());
    }

    let dest = resolve_destination(Some(work_dir), &config.settings)?;
    let path = save_transcript(&raw, &dest)?;
    println!("Transcript saved: {}", path.display());

    Ok(())
}
