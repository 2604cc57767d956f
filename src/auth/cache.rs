//! In-memory cache for the bridged JWT.
//!
//! The bridge mints tokens with a one-hour lifetime; the cache keeps them
//! for 55 minutes so a token is never presented to the backend in its final
//! minutes. Entries are replaced wholesale and the lock is only held for
//! the read or write itself, never across an await. Two tasks racing on a
//! cache miss both fetch a valid token and the last `set` wins, which is
//! harmless.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Actual lifetime of a bridge-minted token.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Safety buffer subtracted from the token lifetime for caching.
pub const EXPIRY_BUFFER: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct Entry {
    token: String,
    expires_at: Instant,
}

/// TTL cache holding at most one bearer token.
#[derive(Debug, Default)]
pub struct TokenCache {
    entry: Mutex<Option<Entry>>,
    window: Option<Duration>,
}

impl TokenCache {
    /// Cache with the standard 55-minute window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache with a custom window (used by tests to exercise expiry).
    pub fn with_window(window: Duration) -> Self {
        Self {
            entry: Mutex::new(None),
            window: Some(window),
        }
    }

    fn window(&self) -> Duration {
        self.window.unwrap_or(TOKEN_LIFETIME - EXPIRY_BUFFER)
    }

    /// Return the cached token if it is still inside its window.
    pub fn get(&self) -> Option<String> {
        let entry = self.entry.lock();
        match entry.as_ref() {
            Some(e) if Instant::now() < e.expires_at => Some(e.token.clone()),
            _ => None,
        }
    }

    /// Store a token minted at `issued_at`. Replaces any previous entry.
    pub fn set(&self, token: impl Into<String>, issued_at: Instant) {
        let entry = Entry {
            token: token.into(),
            expires_at: issued_at + self.window(),
        };
        *self.entry.lock() = Some(entry);
    }

    /// Empty the cache. Idempotent.
    pub fn clear(&self) {
        *self.entry.lock() = None;
    }
}
