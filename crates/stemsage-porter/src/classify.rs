//! Vowel/consonant classification.
//!
//! `a e i o u` are vowels. `y` is a vowel only when the letter before it is a
//! consonant, so a run of `y`s alternates (`syzygy` is C V C V C V). Every
//! other byte is a consonant. Classification is a single forward scan that
//! carries the previous class, so no position is ever classified twice.

/// Class of a single letter within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Vowel,
    Consonant,
}

/// Forward iterator over the class of every byte in a word.
pub struct Classes<'a> {
    bytes: std::slice::Iter<'a, u8>,
    prev: Option<CharClass>,
}

impl Iterator for Classes<'_> {
    type Item = CharClass;

    fn next(&mut self) -> Option<CharClass> {
        let byte = *self.bytes.next()?;
        let class = match byte {
            b'a' | b'e' | b'i' | b'o' | b'u' => CharClass::Vowel,
            b'y' => match self.prev {
                Some(CharClass::Consonant) => CharClass::Vowel,
                _ => CharClass::Consonant,
            },
            _ => CharClass::Consonant,
        };
        self.prev = Some(class);
        Some(class)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

/// Classify every byte of `word`, left to right.
pub fn classes(word: &[u8]) -> Classes<'_> {
    Classes {
        bytes: word.iter(),
        prev: None,
    }
}

/// Whether the byte at `i` is a vowel. Out-of-range positions are not vowels.
pub fn is_vowel(word: &[u8], i: usize) -> bool {
    classes(word).nth(i) == Some(CharClass::Vowel)
}

/// Whether the byte at `i` is a consonant.
pub fn is_consonant(word: &[u8], i: usize) -> bool {
    !is_vowel(word, i)
}

/// Whether `word` contains at least one vowel.
pub fn has_vowel(word: &[u8]) -> bool {
    classes(word).any(|c| c == CharClass::Vowel)
}

/// Last two letters are the same consonant (`hopp`, `fizz`).
pub fn ends_double_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2
        && word[n - 1] == word[n - 2]
        && classes(word).skip(n - 2).all(|c| c == CharClass::Consonant)
}

/// Last three letters are consonant-vowel-consonant and the final consonant
/// is not `w`, `x` or `y` (`hop`, `fil`; not `snow`, `box`, `tray`).
pub fn ends_cvc(word: &[u8]) -> bool {
    let n = word.len();
    if n < 3 || matches!(word[n - 1], b'w' | b'x' | b'y') {
        return false;
    }

    let mut tail = classes(word).skip(n - 3);
    matches!(
        (tail.next(), tail.next(), tail.next()),
        (
            Some(CharClass::Consonant),
            Some(CharClass::Vowel),
            Some(CharClass::Consonant)
        )
    )
}
