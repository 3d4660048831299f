//! Shell-utility clipboard backend
//!
//! Reads the clipboard by running the platform's clipboard utility as a
//! child process: `pbpaste` on macOS, PowerShell's `Get-Clipboard` on
//! Windows, `xclip` with an `xsel` fallback elsewhere.

use std::process::Command;

use tracing::debug;

use super::{ClipboardBackend, ClipboardError};

/// Reads the clipboard through platform shell utilities.
pub struct ShellClipboard;

impl ClipboardBackend for ShellClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        read_via_utility()
    }
}

fn run_utility(
    utility: &'static str,
    mut cmd: Command,
) -> Result<String, ClipboardError> {
    debug!("Reading clipboard via {}", utility);

    let output = cmd
        .output()
        .map_err(|source| ClipboardError::Spawn { utility, source })?;

    if !output.status.success() {
        return Err(ClipboardError::Utility {
            utility,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| ClipboardError::NotUtf8)
}

#[cfg(target_os = "macos")]
fn read_via_utility() -> Result<String, ClipboardError> {
    run_utility("pbpaste", Command::new("pbpaste"))
}

#[cfg(target_os = "windows")]
fn read_via_utility() -> Result<String, ClipboardError> {
    let mut cmd = Command::new("powershell");
    cmd.args(["-command", "Get-Clipboard"]);
    run_utility("powershell", cmd)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn read_via_utility() -> Result<String, ClipboardError> {
    let mut xclip = Command::new("xclip");
    xclip.args(["-selection", "clipboard", "-o"]);

    match run_utility("xclip", xclip) {
        Ok(text) => Ok(text),
        Err(xclip_err) => {
            // xclip missing or erroring; try xsel before giving up
            let mut xsel = Command::new("xsel");
            xsel.args(["--clipboard", "--output"]);
            run_utility("xsel", xsel).map_err(|_| xclip_err)
        }
    }
}
