//! Registry of live capture buffers.
//!
//! Buffers are keyed by a stable session id: inserted when the PTY spawns,
//! removed when the session closes. Removal on close is what keeps the
//! table from leaking buffers for dead terminals.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::SessionBuffer;

/// Stable identifier for one capture session.
pub type SessionId = u64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

static SESSIONS: Lazy<Mutex<HashMap<SessionId, Arc<SessionBuffer>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Register a freshly spawned session's buffer, returning its id.
pub fn register(buffer: Arc<SessionBuffer>) -> SessionId {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let mut guard = SESSIONS.lock().unwrap_or_else(|e| e.into_inner());
    guard.insert(id, buffer);
    id
}

/// Remove a closed session's buffer.
pub fn unregister(id: SessionId) {
    let mut guard = SESSIONS.lock().unwrap_or_else(|e| e.into_inner());
    guard.remove(&id);
}

/// Look up the buffer for a live session.
pub fn get(id: SessionId) -> Option<Arc<SessionBuffer>> {
    let guard = SESSIONS.lock().unwrap_or_else(|e| e.into_inner());
    guard.get(&id).cloned()
}
