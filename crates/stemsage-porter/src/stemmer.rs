//! Stemmer trait and the caching wrapper.
//!
//! The `Stemmer` trait abstracts over stemming backends so indexing code can
//! hold an `Arc<dyn Stemmer>`. Implementations:
//! - `PorterStemmer`: the pure rule cascade
//! - `CachedStemmer`: memoizes any other stemmer behind a `StemCache`

use crate::cache::StemCache;

/// Trait for stemming backends.
pub trait Stemmer: Send + Sync {
    /// Stem one lowercase, trimmed word.
    fn stem(&self, word: &str) -> String;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

/// Memoizing wrapper around another stemmer.
pub struct CachedStemmer<S> {
    inner: S,
    cache: StemCache,
}

impl<S: Stemmer> CachedStemmer<S> {
    pub fn new(inner: S, capacity: usize) -> Self {
        Self {
            inner,
            cache: StemCache::new(capacity),
        }
    }

    pub fn cache(&self) -> &StemCache {
        &self.cache
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Stemmer> Stemmer for CachedStemmer<S> {
    fn stem(&self, word: &str) -> String {
        if let Some(hit) = self.cache.get(word) {
            return hit;
        }
        let stem = self.inner.stem(word);
        self.cache.put(word.to_string(), stem.clone());
        stem
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
