//! Record command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use termscribe::capture::CaptureSession;
use termscribe::config::Config;
use termscribe::transcript::{resolve_destination, save_transcript};

/// Run a shell (or explicit command) in a PTY, mirror and capture its
/// output, and save the sanitized transcript when the session ends.
pub async fn record_command(
    work_dir: &Path,
    config_path: Option<PathBuf>,
    command: Vec<String>,
) -> Result<()> {
    let config = Config::load(work_dir, config_path.as_deref())?;

    if command.is_empty() {
        println!("Recording shell session. Exit the shell to save the transcript.");
    } else {
        println!("Recording `{}`.", command.join(" "));
    }

    let session = CaptureSession::spawn(&command, work_dir)?;
    session.forward_stdin()?;

    // Raw mode so keystrokes reach the inner shell unmodified; restored
    // before anything else is printed.
    enable_raw_mode().context("Failed to enable raw terminal mode")?;
    let waited = tokio::task::spawn_blocking(move || session.wait_and_take()).await;
    disable_raw_mode().context("Failed to restore terminal mode")?;

    let raw = waited.context("Capture task panicked")??;

    if raw.is_empty() {
        eprintln!("Warning: terminal buffer is empty, no transcript saved");
        return Ok(());
    }

    let dest = resolve_destination(Some(work_dir), &config.settings)?;
    let path = save_transcript(&raw, &dest)?;
    println!("Transcript saved: {}", path.display());

    Ok(())
}
