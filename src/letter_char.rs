#[cfg(test)]
use std::ops::RangeInclusive;

// Puzzle geometry
pub const NUM_SIDES: usize = 4;
pub const LETTERS_PER_SIDE: usize = 3;
pub const NUM_PUZZLE_LETTERS: usize = NUM_SIDES * LETTERS_PER_SIDE;

/// Shortest word the bulk filter will keep.
pub const MIN_WORD_LEN: usize = 3;

#[cfg(test)]
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Character helpers shared by puzzle validation and word filtering.
///
/// Puzzle letters and dictionary words are compared in a single canonical
/// case (uppercase), so every comparison goes through [`LetterChar::canonical`].
pub(crate) trait LetterChar {
    fn is_puzzle_letter(&self) -> bool;
    fn canonical(&self) -> char;
}

impl LetterChar for char {
    fn is_puzzle_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
    fn canonical(&self) -> char {
        self.to_ascii_uppercase()
    }
}

/// Canonicalize a raw string: trim surrounding whitespace and uppercase it.
pub(crate) fn canonicalize(raw: &str) -> String {
    raw.trim().chars().map(|c| c.canonical()).collect()
}
