//! StemSage Porter — English suffix-stripping stemmer.
//!
//! Reduces a lowercase, trimmed English word to its stem (`troubled` ->
//! `troubl`) with the Porter rule cascade: steps 1a, 1b, 1c, 2, 3, 4, 5a, 5b,
//! each gated on the word's measure. The engine is a pure function; callers
//! do their own tokenizing and lowercasing.
//!
//! Provides the `Stemmer` trait for indexing code. `create_stemmer` builds a
//! `PorterStemmer`, wrapped in a `CachedStemmer` when the configuration asks
//! for a memo cache.

pub mod cache;
pub mod classify;
pub mod measure;
pub mod porter;
pub mod rules;
pub mod stemmer;
pub mod steps;

pub use cache::StemCache;
pub use classify::{is_consonant, is_vowel};
pub use measure::{measure, measure_exceeds};
pub use porter::{stem, stem_bytes, stem_with, PorterStemmer};
pub use stemmer::{CachedStemmer, Stemmer};
pub use stemsage_core::{RuleVariant, StemmerConfig};

use std::sync::Arc;

/// Create the stemmer described by `config`.
///
/// A non-zero `cache_capacity` puts a memo cache in front of the rule engine.
pub fn create_stemmer(config: &StemmerConfig) -> Arc<dyn Stemmer> {
    let porter = PorterStemmer::from_config(config);

    if config.cache_capacity > 0 {
        tracing::info!(
            "Using {} stemmer (rules={}, cache={})",
            porter.name(),
            config.variant,
            config.cache_capacity
        );
        return Arc::new(CachedStemmer::new(porter, config.cache_capacity));
    }

    tracing::info!("Using {} stemmer (rules={}, uncached)", porter.name(), config.variant);
    Arc::new(porter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_stemmer_respects_variant() {
        let published = create_stemmer(&StemmerConfig {
            variant: RuleVariant::Published,
            cache_capacity: 0,
        });
        assert_eq!(published.name(), "porter-published");
        assert_eq!(published.stem("archaeology"), "archaeologi");

        let cached = create_stemmer(&StemmerConfig::default());
        assert_eq!(cached.name(), "porter");
        assert_eq!(cached.stem("archaeology"), "archaeolog");
        assert_eq!(cached.stem("archaeology"), "archaeolog");
    }

    #[test]
    fn test_create_stemmer_with_oversized_cache() {
        let stemmer = create_stemmer(&StemmerConfig {
            variant: RuleVariant::Extended,
            cache_capacity: usize::MAX,
        });
        assert_eq!(stemmer.stem("hopping"), "hop");
        assert_eq!(stemmer.stem("hopping"), "hop");
    }

    #[test]
    fn test_stemmer_is_shareable_across_threads() {
        let stemmer = create_stemmer(&StemmerConfig::default());
        let handles: Vec<_> = ["hopping", "hopeful", "hopefulness"]
            .into_iter()
            .map(|word| {
                let stemmer = Arc::clone(&stemmer);
                std::thread::spawn(move || stemmer.stem(word))
            })
            .collect();

        let stems: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(stems, vec!["hop", "hope", "hope"]);
    }
}
