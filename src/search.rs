//! Two-word chain search.
//!
//! Every ordered pair `(first, second)` of usable words is a solution when
//! `first` ends with the letter `second` starts with, and the two words
//! together cover all twelve puzzle letters.
//!
//! The result is identical, including order, to a plain nested loop over the
//! word list. Candidates for the second word are looked up in an index keyed
//! by first letter; each bucket keeps list order, so discovery order is
//! unchanged. A word may pair with itself.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::letter_char::canonicalize;
use crate::puzzle::{LetterMask, PuzzleSpec};

/// An ordered pair of usable words forming a complete two-word solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionPair {
    pub first: String,
    pub second: String,
}

impl SolutionPair {
    #[must_use]
    pub fn words(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

impl fmt::Display for SolutionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first, self.second)
    }
}

/// Wall-clock limit for a search; checked once per first word.
#[derive(Debug)]
pub(crate) struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    pub(crate) fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.elapsed() >= self.limit
    }
}

/// Outcome of a budgeted search.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    pub(crate) solutions: Vec<SolutionPair>,
    pub(crate) timed_out: bool,
}

/// Per-word data precomputed once per search, in canonical case.
struct Candidate {
    word: String,
    first: char,
    last: char,
    mask: LetterMask,
}

/// Find every two-word solution among `usable_words`.
///
/// Words may arrive in any case; they are compared and returned in
/// canonical (upper) case. An empty word list yields an empty result.
/// Empty strings in the list cannot connect to anything and are skipped.
#[must_use]
pub fn find_two_word_solutions<S: AsRef<str>>(usable_words: &[S], puzzle: &PuzzleSpec) -> Vec<SolutionPair> {
    search(usable_words, puzzle, None).solutions
}

/// Core pair search shared by [`find_two_word_solutions`] and the configured solve.
///
/// # Arguments
/// * `usable_words` — Words that already passed the filter, in list order.
/// * `puzzle`       — The validated puzzle; supplies letter masks.
/// * `budget`       — Optional time limit, checked before each first word.
///
/// # Behavior:
/// 1. Canonicalize each word and precompute its first letter, last letter and letter mask.
/// 2. Bucket candidate positions by first letter, keeping list order in each bucket.
/// 3. For each first word in list order, walk the bucket of its last letter.
/// 4. Emit the pair when the two masks together cover every puzzle letter.
///
/// Steps 2-3 visit exactly the connecting pairs of a nested loop, in the same order.
pub(crate) fn search<S: AsRef<str>>(
    usable_words: &[S],
    puzzle: &PuzzleSpec,
    budget: Option<&TimeBudget>,
) -> SearchOutcome {
    let candidates: Vec<Candidate> = usable_words
        .iter()
        .filter_map(|w| {
            let word = canonicalize(w.as_ref());
            let first = word.chars().next()?;
            let last = word.chars().next_back()?;
            let mask = puzzle.letter_mask(&word);
            Some(Candidate { word, first, last, mask })
        })
        .collect();

    // first letter -> candidate positions, in list order
    let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
    for (i, cand) in candidates.iter().enumerate() {
        by_first.entry(cand.first).or_default().push(i);
    }
    debug!("search: {} candidates in {} first-letter buckets", candidates.len(), by_first.len());

    let full = puzzle.full_mask();
    let mut solutions = Vec::new();

    for cand1 in &candidates {
        if budget.is_some_and(TimeBudget::expired) {
            return SearchOutcome { solutions, timed_out: true };
        }
        let Some(bucket) = by_first.get(&cand1.last) else {
            continue;
        };
        for &j in bucket {
            let cand2 = &candidates[j];
            if cand1.mask | cand2.mask == full {
                solutions.push(SolutionPair {
                    first: cand1.word.clone(),
                    second: cand2.word.clone(),
                });
            }
        }
    }

    SearchOutcome { solutions, timed_out: false }
}
