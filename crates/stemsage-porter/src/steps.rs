//! The rule cascade, one function per step.
//!
//! Every step takes the word buffer by value and hands back the buffer it
//! produced, so a step can never observe a caller's storage.

use stemsage_core::RuleVariant;
use tracing::trace;

use crate::classify::{ends_cvc, ends_double_consonant, has_vowel};
use crate::measure::{measure, measure_exceeds};
use crate::rules::{STEP_1A, STEP_2, STEP_3, STEP_4};

/// Plurals and `-sses`/`-ies`.
pub fn step_1a(word: Vec<u8>) -> Vec<u8> {
    STEP_1A.apply(word, RuleVariant::Extended)
}

/// `-eed`, `-ed`, `-ing`.
pub fn step_1b(mut word: Vec<u8>) -> Vec<u8> {
    if word.ends_with(b"eed") {
        if measure_exceeds(&word[..word.len() - 3], 0) {
            trace!("step 1b: -eed +ee on {}", String::from_utf8_lossy(&word));
            word.pop();
        }
        return word;
    }

    for suffix in [&b"ed"[..], b"ing"] {
        if word.ends_with(suffix) {
            let stem_len = word.len() - suffix.len();
            if has_vowel(&word[..stem_len]) {
                trace!(
                    "step 1b: -{} on {}",
                    String::from_utf8_lossy(suffix),
                    String::from_utf8_lossy(&word)
                );
                word.truncate(stem_len);
                return step_1b_cleanup(word);
            }
            return word;
        }
    }

    word
}

/// Repairs a stem after `-ed`/`-ing` removal: `conflat -> conflate`,
/// `hopp -> hop`, `fil -> file`.
pub fn step_1b_cleanup(mut word: Vec<u8>) -> Vec<u8> {
    if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
        trace!("step 1b-cleanup: +e on {}", String::from_utf8_lossy(&word));
        word.push(b'e');
    } else if ends_double_consonant(&word) {
        if !matches!(word.last(), Some(b'l' | b's' | b'z')) {
            trace!("step 1b-cleanup: -double on {}", String::from_utf8_lossy(&word));
            word.pop();
        }
    } else if ends_cvc(&word) && measure(&word) == 1 {
        trace!("step 1b-cleanup: +e on {}", String::from_utf8_lossy(&word));
        word.push(b'e');
    }
    word
}

/// Terminal `y` becomes `i` when the stem has a vowel.
pub fn step_1c(mut word: Vec<u8>) -> Vec<u8> {
    if let Some((last, stem)) = word.split_last_mut() {
        if *last == b'y' && has_vowel(stem) {
            *last = b'i';
            trace!("step 1c: -y +i on {}y", String::from_utf8_lossy(stem));
        }
    }
    word
}

/// Double suffixes to single ones (`-ational -> -ate`).
pub fn step_2(word: Vec<u8>, variant: RuleVariant) -> Vec<u8> {
    STEP_2.apply(word, variant)
}

/// `-icate`, `-ative`, `-ful`, `-ness` and friends.
pub fn step_3(word: Vec<u8>) -> Vec<u8> {
    STEP_3.apply(word, RuleVariant::Extended)
}

/// Strips the remaining derivational suffixes on words with `m > 1`.
pub fn step_4(word: Vec<u8>) -> Vec<u8> {
    STEP_4.apply(word, RuleVariant::Extended)
}

/// Drops a final `e`.
pub fn step_5a(mut word: Vec<u8>) -> Vec<u8> {
    if let Some((b'e', stem)) = word.split_last() {
        let strip = measure_exceeds(stem, 1) || (measure(stem) == 1 && !ends_cvc(stem));
        if strip {
            trace!("step 5a: -e on {}", String::from_utf8_lossy(&word));
            word.pop();
        }
    }
    word
}

/// `-ll` to `-l` on words with `m > 1`.
pub fn step_5b(mut word: Vec<u8>) -> Vec<u8> {
    if word.ends_with(b"ll") && measure_exceeds(&word, 1) {
        trace!("step 5b: -l on {}", String::from_utf8_lossy(&word));
        word.pop();
    }
    word
}
