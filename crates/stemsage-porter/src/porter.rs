//! Porter stemmer entry points.

use stemsage_core::{RuleVariant, StemmerConfig};

use crate::stemmer::Stemmer;
use crate::steps::{step_1a, step_1b, step_1c, step_2, step_3, step_4, step_5a, step_5b};

/// Stem a lowercase ASCII word with the given step-2 rule table.
///
/// Words of two letters or fewer come back unchanged.
pub fn stem_with(word: &[u8], variant: RuleVariant) -> Vec<u8> {
    if word.len() <= 2 {
        return word.to_vec();
    }

    let word = step_1a(word.to_vec());
    let word = step_1b(word);
    let word = step_1c(word);
    let word = step_2(word, variant);
    let word = step_3(word);
    let word = step_4(word);
    let word = step_5a(word);
    step_5b(word)
}

/// Stem a lowercase ASCII word.
pub fn stem_bytes(word: &[u8]) -> Vec<u8> {
    stem_with(word, RuleVariant::Extended)
}

/// Stem a lowercase ASCII word held as a string.
///
/// Non-ASCII input is outside the contract; it never panics but the result
/// may contain replacement characters.
pub fn stem(word: &str) -> String {
    String::from_utf8_lossy(&stem_bytes(word.as_bytes())).into_owned()
}

/// The Porter stemmer behind the [`Stemmer`] seam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PorterStemmer {
    variant: RuleVariant,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(variant: RuleVariant) -> Self {
        Self { variant }
    }

    pub fn from_config(config: &StemmerConfig) -> Self {
        Self::with_variant(config.variant)
    }

    pub fn variant(&self) -> RuleVariant {
        self.variant
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        String::from_utf8_lossy(&stem_with(word.as_bytes(), self.variant)).into_owned()
    }

    fn name(&self) -> &'static str {
        match self.variant {
            RuleVariant::Extended => "porter",
            RuleVariant::Published => "porter-published",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_vectors() {
        let cases = [
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("agreed", "agre"),
            ("motoring", "motor"),
            ("happy", "happi"),
            ("relational", "relat"),
            ("triplicate", "triplic"),
            ("controll", "control"),
            ("troubled", "troubl"),
            ("generalizations", "gener"),
            ("oscillators", "oscil"),
        ];
        for (input, expected) in cases {
            assert_eq!(stem(input), expected, "stem({:?})", input);
        }
    }

    #[test]
    fn test_short_words_pass_through() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("as"), "as");
        assert_eq!(stem_bytes(b"ss"), b"ss".to_vec());
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        let _ = stem("na\u{ef}vet\u{e9}s");
        let _ = stem("\u{0a8a}\u{0a8a}ing");
    }

    #[test]
    fn test_variant_changes_only_extension_rules() {
        let extended = PorterStemmer::new();
        let published = PorterStemmer::with_variant(RuleVariant::Published);

        assert_eq!(extended.stem("archaeology"), "archaeolog");
        assert_eq!(published.stem("archaeology"), "archaeologi");
        assert_eq!(extended.stem("relational"), published.stem("relational"));
        assert_eq!(published.name(), "porter-published");
        assert_eq!(extended.variant(), RuleVariant::Extended);
    }

    #[test]
    fn test_from_config() {
        let config = StemmerConfig {
            variant: RuleVariant::Published,
            cache_capacity: 0,
        };
        assert_eq!(PorterStemmer::from_config(&config).variant(), RuleVariant::Published);
    }
}
