//! Suffix rule tables.
//!
//! Each table is an ordered list of `(suffix, replacement, guard)` rules. The
//! first rule whose suffix matches decides the outcome: if its measure gate or
//! guard fails the word is left alone, no shorter suffix is tried.

use stemsage_core::RuleVariant;
use tracing::trace;

use crate::measure::measure_exceeds;

/// Extra condition on the stem left after removing a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Any,
    /// Stem must end in one of these bytes.
    PrecededBy(&'static [u8]),
}

impl Guard {
    fn admits(&self, stem: &[u8]) -> bool {
        match self {
            Guard::Any => true,
            Guard::PrecededBy(allowed) => stem.last().is_some_and(|b| allowed.contains(b)),
        }
    }
}

/// A single suffix rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub suffix: &'static [u8],
    pub replacement: &'static [u8],
    pub guard: Guard,
    /// Not part of the published rule set.
    pub extension: bool,
}

impl Rule {
    pub const fn new(suffix: &'static str, replacement: &'static str) -> Self {
        Self {
            suffix: suffix.as_bytes(),
            replacement: replacement.as_bytes(),
            guard: Guard::Any,
            extension: false,
        }
    }

    /// Remove the suffix outright.
    pub const fn strip(suffix: &'static str) -> Self {
        Self::new(suffix, "")
    }

    pub const fn preceded_by(self, allowed: &'static [u8]) -> Self {
        Self {
            guard: Guard::PrecededBy(allowed),
            ..self
        }
    }

    pub const fn extension(self) -> Self {
        Self {
            extension: true,
            ..self
        }
    }

    fn enabled(&self, variant: RuleVariant) -> bool {
        !(self.extension && variant == RuleVariant::Published)
    }
}

/// An ordered, first-match-wins rule cascade.
#[derive(Debug)]
pub struct RuleTable {
    pub step: &'static str,
    /// The stem's measure must exceed this. `None` applies the rule unconditionally.
    pub gate: Option<usize>,
    pub rules: &'static [Rule],
}

impl RuleTable {
    /// First enabled rule whose suffix ends `word`.
    pub fn find(&self, word: &[u8], variant: RuleVariant) -> Option<&Rule> {
        self.rules
            .iter()
            .filter(|r| r.enabled(variant))
            .find(|r| word.ends_with(r.suffix))
    }

    /// Apply the table to `word`, rewriting at most one suffix.
    pub fn apply(&self, mut word: Vec<u8>, variant: RuleVariant) -> Vec<u8> {
        let Some(rule) = self.find(&word, variant) else {
            return word;
        };

        let stem_len = word.len() - rule.suffix.len();
        let stem = &word[..stem_len];
        let gate_open = self.gate.map_or(true, |min| measure_exceeds(stem, min));
        if !gate_open || !rule.guard.admits(stem) || rule.suffix == rule.replacement {
            return word;
        }

        trace!(
            "step {}: -{} +{} on {}",
            self.step,
            String::from_utf8_lossy(rule.suffix),
            String::from_utf8_lossy(rule.replacement),
            String::from_utf8_lossy(&word)
        );
        word.truncate(stem_len);
        word.extend_from_slice(rule.replacement);
        word
    }
}

/// Plurals: `sses -> ss`, `ies -> i`, `ss -> ss`, `s -> ""`.
pub static STEP_1A: RuleTable = RuleTable {
    step: "1a",
    gate: None,
    rules: &[
        Rule::new("sses", "ss"),
        Rule::new("ies", "i"),
        Rule::new("ss", "ss"),
        Rule::strip("s"),
    ],
};

pub static STEP_2: RuleTable = RuleTable {
    step: "2",
    gate: Some(0),
    rules: &[
        Rule::new("ational", "ate"),
        Rule::new("tional", "tion"),
        Rule::new("enci", "ence"),
        Rule::new("anci", "ance"),
        Rule::new("izer", "ize"),
        Rule::new("abli", "able"),
        Rule::new("bli", "ble").extension(),
        Rule::new("alli", "al"),
        Rule::new("entli", "ent"),
        Rule::new("eli", "e"),
        Rule::new("ousli", "ous"),
        Rule::new("ization", "ize"),
        Rule::new("ation", "ate"),
        Rule::new("ator", "ate"),
        Rule::new("alism", "al"),
        Rule::new("iveness", "ive"),
        Rule::new("fulness", "ful"),
        Rule::new("ousness", "ous"),
        Rule::new("aliti", "al"),
        Rule::new("iviti", "ive"),
        Rule::new("biliti", "ble"),
        Rule::new("logi", "log").extension(),
    ],
};

pub static STEP_3: RuleTable = RuleTable {
    step: "3",
    gate: Some(0),
    rules: &[
        Rule::new("icate", "ic"),
        Rule::strip("ative"),
        Rule::new("alize", "al"),
        Rule::new("iciti", "ic"),
        Rule::new("ical", "ic"),
        Rule::strip("ful"),
        Rule::strip("ness"),
    ],
};

pub static STEP_4: RuleTable = RuleTable {
    step: "4",
    gate: Some(1),
    rules: &[
        Rule::strip("al"),
        Rule::strip("ance"),
        Rule::strip("ence"),
        Rule::strip("er"),
        Rule::strip("ic"),
        Rule::strip("able"),
        Rule::strip("ible"),
        Rule::strip("ant"),
        Rule::strip("ement"),
        Rule::strip("ment"),
        Rule::strip("ent"),
        Rule::strip("ion").preceded_by(b"st"),
        Rule::strip("ou"),
        Rule::strip("ism"),
        Rule::strip("ate"),
        Rule::strip("iti"),
        Rule::strip("ous"),
        Rule::strip("ive"),
        Rule::strip("ize"),
    ],
};
