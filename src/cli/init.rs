//! Init command implementation

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use termscribe::config::CONFIG_PATH;

/// Default configuration content for termscribe init
pub const DEFAULT_CONFIG: &str = r#"# termscribe configuration
#
# Available options:
#   output_dir         - Directory transcripts are written to
#                        (default: the workspace root)
#   desktop_fallback   - Write to ~/Desktop when no workspace is open
#                        (default: true)
#   clipboard_backend  - "system" (native clipboard API) or "shell"
#                        (pbpaste / Get-Clipboard / xclip / xsel)
#   settle_delay_ms    - Delay before reading the clipboard, in milliseconds.
#                        Best effort; there is no completion signal from
#                        whatever put the text on the clipboard. (default: 100)

[settings]
desktop_fallback = true
clipboard_backend = "system"
settle_delay_ms = 100
"#;

/// Initialize a new termscribe configuration in the workspace.
pub async fn init_command(work_dir: &Path, config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| work_dir.join(CONFIG_PATH));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
