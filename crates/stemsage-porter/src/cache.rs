//! LRU memo cache for stems.
//!
//! Stemming is pure, so entries never go stale; the cache only bounds memory
//! by evicting the least recently used word once it is full.

use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;
use tracing::debug;

/// Cached stem with its last-use tick.
struct CacheEntry {
    stem: String,
    tick: u64,
}

/// Thread-safe LRU cache from word to stem.
pub struct StemCache {
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    /// tick -> word, oldest first
    order: BTreeMap<u64, String>,
    next_tick: u64,
    max_size: usize,
}

impl CacheInner {
    fn bump(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }
}

impl StemCache {
    /// Create a cache holding at most `max_size` words.
    pub fn new(max_size: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: BTreeMap::new(),
                next_tick: 0,
                max_size,
            }),
        }
    }

    /// Look up a word, marking it as recently used.
    pub fn get(&self, word: &str) -> Option<String> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let tick = inner.bump();
        let entry = inner.entries.get_mut(word)?;
        let old = std::mem::replace(&mut entry.tick, tick);
        let stem = entry.stem.clone();

        if let Some(key) = inner.order.remove(&old) {
            inner.order.insert(tick, key);
        }
        Some(stem)
    }

    /// Insert a stem, evicting the least recently used word if full.
    pub fn put(&self, word: String, stem: String) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if inner.max_size == 0 {
            return;
        }
        let tick = inner.bump();

        if let Some(entry) = inner.entries.get_mut(&word) {
            let old = std::mem::replace(&mut entry.tick, tick);
            entry.stem = stem;
            inner.order.remove(&old);
            inner.order.insert(tick, word);
            return;
        }

        while inner.entries.len() >= inner.max_size {
            let Some((_, oldest)) = inner.order.pop_first() else {
                break;
            };
            debug!("Evicting cached stem for {:?}", oldest);
            inner.entries.remove(&oldest);
        }

        inner.order.insert(tick, word.clone());
        inner.entries.insert(word, CacheEntry { stem, tick });
    }

    /// Number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }
}
