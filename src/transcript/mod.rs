//! Transcript save pipeline
//!
//! Turns a raw capture into a `transcript-<timestamp>.txt` file: validate the
//! capture is non-empty, sanitize it, resolve a destination directory, and
//! write the file. Nothing is written until the content has been validated,
//! so a failed save never leaves a partial file behind.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::info;

use crate::capture::{self, SessionId};
use crate::clipboard::ClipboardError;
use crate::config::Settings;
use crate::sanitize::sanitize;

/// A failed save operation. No case is retried.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no active capture session")]
    NoActiveSession,

    #[error("captured content is empty")]
    EmptyCapture,

    #[error("no destination directory available (no workspace and desktop fallback disabled)")]
    NoDestination,

    #[error("clipboard read failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("failed to write transcript to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Build the transcript filename for the given instant.
///
/// The timestamp is the local time with colons replaced by dashes, 19
/// characters: `transcript-2026-08-30T14-05-09.txt`.
pub fn transcript_filename(now: DateTime<Local>) -> String {
    format!("transcript-{}.txt", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Resolve the directory the transcript should be written into.
///
/// Precedence: the configured `output_dir`, then the workspace root, then
/// the user's `Desktop` directory when the fallback is enabled.
pub fn resolve_destination(
    workspace: Option<&Path>,
    settings: &Settings,
) -> Result<PathBuf, SaveError> {
    if let Some(dir) = &settings.output_dir {
        return Ok(dir.clone());
    }

    if let Some(root) = workspace {
        return Ok(root.to_path_buf());
    }

    if settings.desktop_fallback {
        if let Some(home) = dirs::home_dir() {
            return Ok(home.join("Desktop"));
        }
    }

    Err(SaveError::NoDestination)
}

/// Read the raw capture accumulated so far for a live session.
///
/// The buffer is left intact so the session can keep accumulating; a
/// session that is not registered (already closed, or never spawned) is the
/// no-active-session error.
pub fn session_capture(id: SessionId) -> Result<String, SaveError> {
    let buffer = capture::get(id).ok_or(SaveError::NoActiveSession)?;
    Ok(buffer.snapshot())
}

/// Sanitize a raw capture and write it as a timestamped transcript file.
///
/// Returns the path of the written file. The raw capture is validated
/// non-empty before anything touches the filesystem; an existing file at the
/// destination path is overwritten.
pub fn save_transcript(raw: &str, dest_dir: &Path) -> Result<PathBuf, SaveError> {
    if raw.is_empty() {
        return Err(SaveError::EmptyCapture);
    }

    let clean = sanitize(raw);
    let path = dest_dir.join(transcript_filename(Local::now()));

    std::fs::write(&path, clean).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Transcript saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filename_for_fixed_instant() {
        let instant = Local.with_ymd_and_hms(2026, 8, 30, 14, 5, 9).unwrap();
        assert_eq!(
            transcript_filename(instant),
            "transcript-2026-08-30T14-05-09.txt"
        );
    }

    #[test]
    fn test_filename_matches_pattern() {
        let name = transcript_filename(Local::now());
        let pattern =
            regex::Regex::new(r"^transcript-\d{4}-\d{2}-\d{2}T\d{2}-\d{2}-\d{2}\.txt$").unwrap();
        assert!(pattern.is_match(&name), "unexpected filename: {name}");
    }

    #[test]
    fn test_empty_capture_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_transcript("", dir.path());
        assert!(matches!(result, Err(SaveError::EmptyCapture)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_writes_sanitized_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_transcript("\x1b[32m$ ls\x1b[0m\r\nsrc\r\n", dir.path()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "$ ls\nsrc\n");
    }

    #[test]
    fn test_session_capture_for_live_session() {
        let buffer = std::sync::Arc::new(capture::SessionBuffer::new());
        let id = capture::register(buffer.clone());
        buffer.append(b"$ pwd\r\n");

        let raw = session_capture(id).unwrap();
        assert_eq!(raw, "$ pwd\r\n");
        // Non-destructive: the session keeps accumulating
        assert!(!buffer.is_empty());

        capture::unregister(id);
    }

    #[test]
    fn test_session_capture_for_closed_session() {
        let buffer = std::sync::Arc::new(capture::SessionBuffer::new());
        let id = capture::register(buffer);
        capture::unregister(id);

        let result = session_capture(id);
        assert!(matches!(result, Err(SaveError::NoActiveSession)));
    }

    #[test]
    fn test_destination_prefers_configured_output_dir() {
        let settings = Settings {
            output_dir: Some(PathBuf::from("/tmp/transcripts")),
            ..Settings::default()
        };
        let dest = resolve_destination(Some(Path::new("/work")), &settings).unwrap();
        assert_eq!(dest, PathBuf::from("/tmp/transcripts"));
    }

    #[test]
    fn test_destination_falls_back_to_workspace() {
        let settings = Settings::default();
        let dest = resolve_destination(Some(Path::new("/work")), &settings).unwrap();
        assert_eq!(dest, PathBuf::from("/work"));
    }

    #[test]
    fn test_no_destination_when_fallback_disabled() {
        let settings = Settings {
            desktop_fallback: false,
            ..Settings::default()
        };
        let result = resolve_destination(None, &settings);
        assert!(matches!(result, Err(SaveError::NoDestination)));
    }

    #[test]
    fn test_desktop_fallback_when_no_workspace() {
        let settings = Settings::default();
        if let Some(home) = dirs::home_dir() {
            let dest = resolve_destination(None, &settings).unwrap();
            assert_eq!(dest, home.join("Desktop"));
        }
    }
}
