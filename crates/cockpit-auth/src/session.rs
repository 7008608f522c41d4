//! Session cell
//!
//! The browser holds exactly one session in local storage; this module is
//! the server-side rendition of that cell. Lifecycle: written by login,
//! cleared by logout (or a storage clear), read by the guard on every
//! evaluation. The login/logout flow is the only writer, so a plain
//! `RwLock` is enough.

use std::sync::RwLock;

use cockpit_core::AuthSession;

/// Single mutable session cell with explicit get/set/clear.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Option<AuthSession>>,
}

impl SessionStore {
    /// Empty cell: no one is signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session, if any. A poisoned lock is treated as an absent
    /// session rather than a panic; the guard's failure mode is always
    /// "redirect to login", never a crash.
    pub fn get(&self) -> Option<AuthSession> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    /// Store a freshly authenticated session. Replaces any previous one.
    pub fn set(&self, session: AuthSession) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(session);
        }
    }

    /// Destroy the session (logout / storage clear).
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}
