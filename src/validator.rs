//! Decide which dictionary words are legal moves for a puzzle.
//!
//! A word is legal when every letter is on the box and no two consecutive
//! letters come from the same side. The bulk [`filter`] additionally drops
//! malformed dictionary entries (blank lines, punctuation, words shorter
//! than [`MIN_WORD_LEN`]).

use log::debug;

use crate::letter_char::{canonicalize, LetterChar, MIN_WORD_LEN};
use crate::puzzle::PuzzleSpec;

/// Letter-membership and adjacency check for a single word (case-insensitive).
///
/// Words of length 0 or 1 pass vacuously; the length rule lives in [`filter`].
#[must_use]
pub fn is_usable(word: &str, puzzle: &PuzzleSpec) -> bool {
    let mut prev_side = None;
    for c in word.chars() {
        let Some(side) = puzzle.side_of(c) else {
            return false;
        };
        if prev_side == Some(side) {
            return false;
        }
        prev_side = Some(side);
    }
    true
}

/// Keep the usable words from a raw word list, in input order.
///
/// Each entry is trimmed and uppercased before checking, and the returned
/// words are in that canonical form. Duplicates are kept.
pub fn filter<I, S>(words: I, puzzle: &PuzzleSpec) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut num_seen = 0usize;
    let usable: Vec<String> = words
        .into_iter()
        .inspect(|_| num_seen += 1)
        .map(|raw| canonicalize(raw.as_ref()))
        .filter(|word| {
            word.chars().count() >= MIN_WORD_LEN
                && word.chars().all(|c| c.is_puzzle_letter())
                && is_usable(word, puzzle)
        })
        .collect();

    debug!("filter: kept {} of {num_seen} words for {puzzle}", usable.len());
    usable
}
