//! Word measure: the `m` in `[C](VC)^m[V]`.

use crate::classify::{classes, CharClass};

/// Positions where a vowel run gives way to a consonant run.
fn vc_boundaries(word: &[u8]) -> impl Iterator<Item = usize> + '_ {
    let mut in_vowels = false;
    classes(word)
        .enumerate()
        .filter_map(move |(i, class)| match class {
            CharClass::Vowel => {
                in_vowels = true;
                None
            }
            CharClass::Consonant if in_vowels => {
                in_vowels = false;
                Some(i)
            }
            CharClass::Consonant => None,
        })
}

/// Number of `VC` groups in `word`.
pub fn measure(word: &[u8]) -> usize {
    vc_boundaries(word).count()
}

/// `measure(word) > min`, stopping at the first boundary past `min`.
pub fn measure_exceeds(word: &[u8], min: usize) -> bool {
    vc_boundaries(word).nth(min).is_some()
}
