//! Document cache for WSDL and schema loads

use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Storage for documents fetched by `load`.
///
/// Only successful remote fetches are stored. Local files are always read
/// fresh.
pub trait DocumentCache: Send + Sync + fmt::Debug {
    /// Look up a cached document.
    fn get(&self, url: &str) -> Option<Bytes>;

    /// Store a document.
    fn add(&self, url: &str, content: Bytes);
}

/// Process-local cache with per-entry expiry.
///
/// # Default Configuration
///
/// - `timeout`: 3600s
#[derive(Debug)]
pub struct InMemoryCache {
    timeout: Duration,
    entries: RwLock<HashMap<String, (Instant, Bytes)>>,
}

impl InMemoryCache {
    /// Default entry lifetime
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);

    /// Create a cache with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    /// Create a cache whose entries expire after `timeout`.
    ///
    /// A zero timeout keeps entries forever.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn is_fresh(&self, stored_at: Instant) -> bool {
        self.timeout.is_zero() || stored_at.elapsed() < self.timeout
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCache for InMemoryCache {
    fn get(&self, url: &str) -> Option<Bytes> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            match entries.get(url) {
                Some((stored_at, content)) if self.is_fresh(*stored_at) => {
                    return Some(content.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Expired
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(url);
        None
    }

    fn add(&self, url: &str, content: Bytes) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.to_string(), (Instant::now(), content));
    }
}
