//! PTY capture sessions
//!
//! The buffered capture path: a shell (or explicit command) runs inside a
//! PTY, its raw output is mirrored to the real terminal and accumulated in a
//! per-session buffer. Buffers live in a registry keyed by session id,
//! inserted on spawn and removed when the session closes.

mod registry;
mod session;

pub use registry::{SessionId, get, register, unregister};
pub use session::CaptureSession;

use std::sync::Mutex;

/// Raw output accumulated for one capture session.
///
/// Append-only while the session runs; snapshotted for on-demand saves and
/// taken when the session closes.
#[derive(Debug, Default)]
pub struct SessionBuffer {
    raw: Mutex<Vec<u8>>,
}

impl SessionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw output chunk. Chunks are stored undecoded: a PTY read
    /// may end in the middle of a multibyte character, so decoding happens
    /// once over the whole capture at snapshot/take time.
    pub fn append(&self, chunk: &[u8]) {
        let mut raw = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        raw.extend_from_slice(chunk);
    }

    /// Decode the capture accumulated so far without clearing it.
    pub fn snapshot(&self) -> String {
        let raw = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&raw).into_owned()
    }

    /// Take and decode the accumulated capture, leaving the buffer empty.
    pub fn take(&self) -> String {
        let mut raw = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        let bytes = std::mem::take(&mut *raw);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Current size of the capture in bytes.
    pub fn len(&self) -> usize {
        self.raw.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
