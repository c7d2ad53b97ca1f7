//! The twelve-letter puzzle and its side geometry.
//!
//! Letters are read in order, three per side: positions 0-2 are side 0,
//! 3-5 side 1, and so on. Side membership is positional, not alphabetical.

use std::fmt;

use crate::errors::PuzzleError;
use crate::letter_char::{LetterChar, LETTERS_PER_SIDE, NUM_PUZZLE_LETTERS, NUM_SIDES};

/// Bit set over the twelve puzzle positions (bit `i` = letter at position `i`).
pub type LetterMask = u16;

const FULL_MASK: LetterMask = (1 << NUM_PUZZLE_LETTERS) - 1;

/// A validated puzzle: 12 distinct alphabetic letters in canonical (upper) case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleSpec {
    letters: [char; NUM_PUZZLE_LETTERS],
}

impl PuzzleSpec {
    /// Validate raw puzzle letters.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// length, then alphabetic, then distinctness (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns the [`PuzzleError`] for the first violated rule.
    pub fn new(raw: &str) -> Result<Self, PuzzleError> {
        let chars: Vec<char> = raw.chars().collect();

        if chars.len() != NUM_PUZZLE_LETTERS {
            return Err(PuzzleError::InvalidLetterCount { count: chars.len() });
        }

        if let Some(&invalid_char) = chars.iter().find(|c| !c.is_puzzle_letter()) {
            return Err(PuzzleError::NonAlphabeticLetters { invalid_char });
        }

        let mut letters = [' '; NUM_PUZZLE_LETTERS];
        for (i, c) in chars.iter().enumerate() {
            let letter = c.canonical();
            if letters[..i].contains(&letter) {
                return Err(PuzzleError::DuplicateLetters { letter });
            }
            letters[i] = letter;
        }

        Ok(PuzzleSpec { letters })
    }

    #[must_use]
    pub fn letters(&self) -> &[char; NUM_PUZZLE_LETTERS] {
        &self.letters
    }

    /// The four sides, in input order.
    pub fn sides(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(LETTERS_PER_SIDE)
    }

    /// Position of `c` in the puzzle (case-insensitive).
    #[must_use]
    pub fn index_of(&self, c: char) -> Option<usize> {
        let letter = c.canonical();
        self.letters.iter().position(|&l| l == letter)
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Side (0..4) that `c` sits on, or `None` if it is not a puzzle letter.
    #[must_use]
    pub fn side_of(&self, c: char) -> Option<usize> {
        self.index_of(c).map(|i| i / LETTERS_PER_SIDE)
    }

    /// Set of puzzle letters appearing in `word`. Non-puzzle characters are ignored.
    #[must_use]
    pub fn letter_mask(&self, word: &str) -> LetterMask {
        word.chars()
            .filter_map(|c| self.index_of(c))
            .fold(0, |mask, i| mask | (1 << i))
    }

    /// Mask with every puzzle letter set.
    #[must_use]
    pub fn full_mask(&self) -> LetterMask {
        FULL_MASK
    }
}

impl fmt::Display for PuzzleSpec {
    /// Canonical letters with sides separated by `-`, e.g. `XLB-OCU-IMQ-AYT`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            for c in side {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

const _: () = assert!(NUM_SIDES * LETTERS_PER_SIDE <= LetterMask::BITS as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_puzzle_is_canonicalized() {
        let p = PuzzleSpec::new("xlbocuimqayt").unwrap();
        assert_eq!(p.letters().iter().collect::<String>(), "XLBOCUIMQAYT");
        assert_eq!(p.to_string(), "XLB-OCU-IMQ-AYT");
    }

    #[test]
    fn test_mixed_case_equals_upper_case() {
        assert_eq!(
            PuzzleSpec::new("XlBoCuImQaYt").unwrap(),
            PuzzleSpec::new("XLBOCUIMQAYT").unwrap()
        );
    }

    #[test]
    fn test_side_of_is_positional() {
        let p = PuzzleSpec::new("ABCDEFGHIJKL").unwrap();
        assert_eq!(p.side_of('A'), Some(0));
        assert_eq!(p.side_of('c'), Some(0));
        assert_eq!(p.side_of('D'), Some(1));
        assert_eq!(p.side_of('I'), Some(2));
        assert_eq!(p.side_of('l'), Some(3));
        assert_eq!(p.side_of('Z'), None);

        // Alphabetical neighbours can sit on different sides.
        let p = PuzzleSpec::new("AZBYCXDWEVFU").unwrap();
        assert_eq!(p.side_of('B'), Some(0));
        assert_eq!(p.side_of('C'), Some(1));
    }

    #[test]
    fn test_sides() {
        let p = PuzzleSpec::new("XLBOCUIMQAYT").unwrap();
        let sides: Vec<String> = p.sides().map(|s| s.iter().collect()).collect();
        assert_eq!(sides, vec!["XLB", "OCU", "IMQ", "AYT"]);
    }

    #[test]
    fn test_too_short_reports_count_first() {
        assert_eq!(PuzzleSpec::new("AB"), Err(PuzzleError::InvalidLetterCount { count: 2 }));
        // duplicates and non-letters are not reported when the count is wrong
        assert_eq!(PuzzleSpec::new("AA1"), Err(PuzzleError::InvalidLetterCount { count: 3 }));
        assert_eq!(PuzzleSpec::new(""), Err(PuzzleError::InvalidLetterCount { count: 0 }));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            PuzzleSpec::new("ABCDEFGHIJKLM"),
            Err(PuzzleError::InvalidLetterCount { count: 13 })
        );
    }

    #[test]
    fn test_non_alphabetic_before_duplicates() {
        assert_eq!(
            PuzzleSpec::new("AACDEFGHIJK1"),
            Err(PuzzleError::NonAlphabeticLetters { invalid_char: '1' })
        );
        assert_eq!(
            PuzzleSpec::new("ABC-DEF-GHIJ"),
            Err(PuzzleError::NonAlphabeticLetters { invalid_char: '-' })
        );
    }

    #[test]
    fn test_duplicates_are_case_insensitive() {
        assert_eq!(
            PuzzleSpec::new("ABCDEFGHIJKa"),
            Err(PuzzleError::DuplicateLetters { letter: 'A' })
        );
    }

    #[test]
    fn test_letter_count_uses_chars_not_bytes() {
        // 12 chars, one of which is multi-byte and not an ASCII letter
        assert_eq!(
            PuzzleSpec::new("ABCDEFGHIJKé"),
            Err(PuzzleError::NonAlphabeticLetters { invalid_char: 'é' })
        );
    }

    #[test]
    fn test_accented_letters_are_rejected() {
        assert_eq!(
            PuzzleSpec::new("ABCDEFGHIJKÉ"),
            Err(PuzzleError::NonAlphabeticLetters { invalid_char: 'É' })
        );
    }

    #[test]
    fn test_letter_mask() {
        let p = PuzzleSpec::new("ABCDEFGHIJKL").unwrap();
        assert_eq!(p.letter_mask("ABD"), 0b1011);
        assert_eq!(p.letter_mask("abd"), 0b1011);
        assert_eq!(p.letter_mask("ZZZ"), 0);
        assert_eq!(p.letter_mask("ABCDEFGHIJKL"), p.full_mask());
        assert_eq!(p.full_mask(), 0x0FFF);
    }
}
