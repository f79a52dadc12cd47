//! Zone-name resolution cache.
//!
//! Zone lookups are the only non-trivial work in the pipeline, so resolved
//! names are cached for the lifetime of the owning cache. Entries are
//! write-once per key and never invalidated; only successful resolutions
//! are stored, so an unknown name is retried on the next lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono_tz::Tz;
use parking_lot::RwLock;

/// A read-through cache from zone name to zone rules.
///
/// Safe under concurrent lookups from parallel parse calls. The plain
/// [`parse`](crate::parse::parse) entry points share one process-wide
/// instance; tests and embedders that need isolation pass their own via
/// [`parse_with_cache`](crate::parse::parse_with_cache).
pub struct ZoneCache {
    entries: RwLock<HashMap<String, Tz>>,
}

impl ZoneCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        ZoneCache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Resolves a zone name, consulting the cache first.
    ///
    /// Returns `None` for names the zone database does not know.
    pub fn resolve(&self, name: &str) -> Option<Tz> {
        if let Some(tz) = self.entries.read().get(name) {
            return Some(*tz);
        }
        let tz: Tz = name.parse().ok()?;
        self.entries.write().insert(name.to_owned(), tz);
        Some(tz)
    }

    /// Number of names resolved so far.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no name has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for ZoneCache {
    fn default() -> Self {
        ZoneCache::new()
    }
}

/// The process-wide cache behind the plain entry points.
pub(crate) fn process_cache() -> &'static ZoneCache {
    static CACHE: OnceLock<ZoneCache> = OnceLock::new();
    CACHE.get_or_init(ZoneCache::new)
}
