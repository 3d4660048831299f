//! Interactive PTY session with raw output accumulation.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use anyhow::{Context, Result};
use portable_pty::{Child, CommandBuilder, MasterPty, PtySize, native_pty_system};
use tracing::debug;

use super::{SessionBuffer, SessionId, registry};

/// A running capture session.
///
/// Output flows from the PTY to the real stdout and, unmodified, into the
/// session buffer. Escape sequences are preserved here; sanitization happens
/// at save time.
pub struct CaptureSession {
    /// Registry id of this session
    pub id: SessionId,
    buffer: Arc<SessionBuffer>,
    master: Box<dyn MasterPty + Send>,
    child: Box<dyn Child + Send + Sync>,
    running: Arc<AtomicBool>,
    reader: Option<thread::JoinHandle<()>>,
}

impl CaptureSession {
    /// Spawn a command (or the default shell) inside a PTY sized to the
    /// current terminal and start accumulating its output.
    pub fn spawn(command: &[String], cwd: &Path) -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));

        let pty_system = native_pty_system();
        let pair = pty_system
            .openpty(PtySize {
                rows,
                cols,
                pixel_width: 0,
                pixel_height: 0,
            })
            .context("Failed to open PTY")?;

        let mut cmd = match command.split_first() {
            Some((bin, args)) => {
                let mut cmd = CommandBuilder::new(bin);
                cmd.args(args);
                cmd
            }
            None => CommandBuilder::new(default_shell()),
        };
        cmd.cwd(cwd);

        let child = pair
            .slave
            .spawn_command(cmd)
            .context("Failed to spawn command in PTY")?;

        let mut reader = pair
            .master
            .try_clone_reader()
            .context("Failed to clone PTY reader")?;

        let buffer = Arc::new(SessionBuffer::new());
        let id = registry::register(buffer.clone());
        let running = Arc::new(AtomicBool::new(true));

        debug!("Capture session {} spawned ({}x{})", id, cols, rows);

        // Reader thread: mirror PTY output to stdout and accumulate raw chunks
        let buffer_clone = buffer.clone();
        let running_clone = running.clone();
        let reader_handle = thread::spawn(move || {
            let mut stdout = std::io::stdout();
            let mut buf = [0u8; 4096];
            loop {
                match reader.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        let _ = stdout.write_all(&buf[..n]);
                        let _ = stdout.flush();
                        buffer_clone.append(&buf[..n]);
                    }
                }
            }
            running_clone.store(false, Ordering::SeqCst);
        });

        Ok(Self {
            id,
            buffer,
            master: pair.master,
            child,
            running,
            reader: Some(reader_handle),
        })
    }

    /// Forward stdin to the PTY on a background thread. A no-op when the
    /// session has already ended.
    pub fn forward_stdin(&self) -> Result<()> {
        if !self.is_running() {
            return Ok(());
        }

        let mut writer = self
            .master
            .take_writer()
            .context("Failed to open PTY writer")?;
        let running = self.running.clone();

        thread::spawn(move || {
            let mut stdin = std::io::stdin();
            let mut buf = [0u8; 1024];
            while running.load(Ordering::SeqCst) {
                match stdin.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        if writer.write_all(&buf[..n]).is_err() {
                            break;
                        }
                        let _ = writer.flush();
                    }
                }
            }
        });

        Ok(())
    }

    /// Whether the child is still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Wait for the session to end, unregister it, and return the raw
    /// capture. The buffer is removed from the registry even when the child
    /// exited with an error.
    pub fn wait_and_take(mut self) -> Result<String> {
        let status = self.child.wait().context("Failed to wait for child")?;
        self.running.store(false, Ordering::SeqCst);

        // The reader keeps draining until EOF/EIO once the child is gone;
        // join it so the tail of the output lands in the buffer before the
        // buffer is taken.
        if let Some(handle) = self.reader.take() {
            let _ = handle.join();
        }

        let raw = self.buffer.take();
        registry::unregister(self.id);

        debug!(
            "Capture session {} closed (success: {}, {} bytes captured)",
            self.id,
            status.success(),
            raw.len()
        );

        Ok(raw)
    }
}

fn default_shell() -> String {
    if cfg!(windows) {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".into())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".into())
    }
}
