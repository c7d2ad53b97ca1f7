//! The configured solve: validate letters, load the dictionary, filter, search.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `InvalidPuzzle` (Puzzle letters failed validation (wraps [`PuzzleError`]))
//! - S002: `DictionaryUnavailable` (The word list could not be loaded)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//! A valid puzzle with no solutions is *not* an error; it is reported through
//! [`SolveStatus::NoSolutions`].
//!
//! # Examples
//!
//! ```
//! use letterboxed::solver::{self, SolveConfig, SolveStatus};
//!
//! let words = ["xolubmaq", "qticy", "mob"];
//! let config = SolveConfig::new("xlbocuimqayt", &words);
//! let result = solver::solve(&config)?;
//!
//! assert_eq!(result.status, SolveStatus::SolutionsFound);
//! for pair in &result.solutions {
//!     println!("{pair}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ```
//! use letterboxed::solver::{self, SolveConfig};
//!
//! let words: [&str; 0] = [];
//! match solver::solve(&SolveConfig::new("AB", &words)) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("{}", e.display_detailed()),
//! }
//! ```

use std::fmt::Write as _;
use std::io;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::errors::{format_error_with_code_and_help, PuzzleError};
use crate::puzzle::PuzzleSpec;
use crate::search::{self, SolutionPair, TimeBudget};
use crate::validator;
use crate::word_list::DictionarySource;

/// Everything one solve needs. No hidden defaults: the caller supplies the
/// letters and where the words come from.
pub struct SolveConfig<'a> {
    /// Raw puzzle letters, any case, three per side in order.
    pub letters: String,
    /// Provider of the raw word list.
    pub dictionary_source: &'a dyn DictionarySource,
    /// Stop the search once this much time has passed. `None` searches exhaustively.
    pub time_budget: Option<Duration>,
}

impl<'a> SolveConfig<'a> {
    pub fn new(letters: impl Into<String>, dictionary_source: &'a dyn DictionarySource) -> Self {
        Self { letters: letters.into(), dictionary_source, time_budget: None }
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Status of the solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// The whole word list was searched and at least one solution exists.
    SolutionsFound,

    /// The whole word list was searched; the puzzle is valid but has no two-word solution.
    NoSolutions,

    /// The time budget expired; `solutions` holds what was found so far.
    TimedOut { elapsed: Duration },
}

/// Counts and timings for one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveStats {
    pub words_loaded: usize,
    pub words_usable: usize,
    pub elapsed: Duration,
}

/// Successful solver run (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The validated puzzle.
    pub puzzle: PuzzleSpec,
    /// Solutions in discovery order.
    pub solutions: Vec<SolutionPair>,
    pub status: SolveStatus,
    pub stats: SolveStats,
}

impl IntoIterator for SolveResult {
    type Item = SolutionPair;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Unified error type for the solve pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The puzzle letters were refused; no search was attempted.
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] PuzzleError),

    /// The dictionary source could not supply a word list.
    #[error("dictionary unavailable: {source_name}")]
    DictionaryUnavailable {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidPuzzle(_) => "S001",
            SolverError::DictionaryUnavailable { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidPuzzle(_) => "Puzzle letters failed validation",
            SolverError::DictionaryUnavailable { .. } => "The word list could not be loaded",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidPuzzle(_) => "The puzzle letters were rejected before any search ran. This wraps an underlying PuzzleError (see Puzzle Errors section for specific error codes).",
            SolverError::DictionaryUnavailable { .. } => "The dictionary source failed to produce a word list, most often because the dictionary file does not exist or cannot be read. An empty dictionary is not an error; it simply yields no solutions.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidPuzzle(_) => None, // PuzzleError has its own help
            SolverError::DictionaryUnavailable { .. } => Some("Pass an existing word file with --dictionary (one word per line)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidPuzzle(pe) => {
                // delegate to PuzzleError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            SolverError::DictionaryUnavailable { source, .. } => {
                let base = format!("{self}: {source}");
                format_error_with_code_and_help(&base, self.code(), self.help())
            }
        }
    }
}

/// Solve one puzzle.
///
/// Steps:
/// 1. Validate the letters (nothing else runs if they are invalid).
/// 2. Load the raw words from the dictionary source.
/// 3. Filter down to usable words.
/// 4. Search for two-word solutions.
///
/// # Errors
///
/// [`SolverError::InvalidPuzzle`] for bad letters, and
/// [`SolverError::DictionaryUnavailable`] if the source cannot be read.
pub fn solve(config: &SolveConfig<'_>) -> Result<SolveResult, SolverError> {
    let t_start = Instant::now();

    let puzzle = PuzzleSpec::new(&config.letters)?;

    let words = config.dictionary_source.load_words().map_err(|source| {
        SolverError::DictionaryUnavailable { source_name: config.dictionary_source.name(), source }
    })?;

    let usable = validator::filter(&words, &puzzle);
    info!("{puzzle}: {} of {} words usable", usable.len(), words.len());

    let budget = config.time_budget.map(TimeBudget::new);
    let outcome = search::search(&usable, &puzzle, budget.as_ref());

    let elapsed = t_start.elapsed();
    let status = if outcome.timed_out {
        let searched_for = budget.as_ref().map_or(elapsed, TimeBudget::elapsed);
        warn!("{puzzle}: time budget expired after {:.3}s", searched_for.as_secs_f64());
        SolveStatus::TimedOut { elapsed: searched_for }
    } else if outcome.solutions.is_empty() {
        SolveStatus::NoSolutions
    } else {
        SolveStatus::SolutionsFound
    };
    info!("{puzzle}: {} solution(s) in {:.3}s", outcome.solutions.len(), elapsed.as_secs_f64());

    Ok(SolveResult {
        puzzle,
        solutions: outcome.solutions,
        status,
        stats: SolveStats { words_loaded: words.len(), words_usable: usable.len(), elapsed },
    })
}

/// Render solutions the way the CLI prints them.
///
/// ```text
/// Today's letters: XLBOCUIMQAYT
///
/// Found 1 possible two-word solution(s):
///  - XOLUBMAQ, QTICY
/// ```
#[must_use]
pub fn render_report(puzzle: &PuzzleSpec, solutions: &[SolutionPair]) -> String {
    let letters: String = puzzle.letters().iter().collect();
    let mut out = format!("Today's letters: {letters}\n\n");

    if solutions.is_empty() {
        out.push_str("No solutions found.\n");
    } else {
        let _ = writeln!(out, "Found {} possible two-word solution(s):", solutions.len());
        for pair in solutions {
            let _ = writeln!(out, " - {pair}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_list::{DictionaryFile, WordList};

    const LETTERS: &str = "xlbocuimqayt";

    #[test]
    fn test_solve_finds_pair() {
        let words = ["xolubmaq", "qticy", "mob"];
        let result = solve(&SolveConfig::new(LETTERS, &words)).unwrap();

        assert_eq!(result.status, SolveStatus::SolutionsFound);
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.solutions[0].words(), ("XOLUBMAQ", "QTICY"));
        assert_eq!(result.stats.words_loaded, 3);
        assert_eq!(result.stats.words_usable, 3);
    }

    #[test]
    fn test_solve_no_solutions_is_not_an_error() {
        let words = ["mob", "quilt"];
        let result = solve(&SolveConfig::new(LETTERS, &words)).unwrap();
        assert_eq!(result.status, SolveStatus::NoSolutions);
        assert!(result.solutions.is_empty());
    }

    #[test]
    fn test_solve_empty_dictionary() {
        let list = WordList::default();
        let result = solve(&SolveConfig::new(LETTERS, &list)).unwrap();
        assert_eq!(result.status, SolveStatus::NoSolutions);
        assert_eq!(result.stats.words_loaded, 0);
    }

    #[test]
    fn test_invalid_letters_skip_loading() {
        // the file does not exist, but letter validation fails first
        let file = DictionaryFile::new("/no/such/dictionary.txt");
        let err = solve(&SolveConfig::new("AB", &file)).unwrap_err();
        assert!(matches!(err, SolverError::InvalidPuzzle(PuzzleError::InvalidLetterCount { count: 2 })));
        assert_eq!(err.code(), "S001");
    }

    #[test]
    fn test_missing_dictionary() {
        let file = DictionaryFile::new("/no/such/dictionary.txt");
        let err = solve(&SolveConfig::new(LETTERS, &file)).unwrap_err();
        assert!(matches!(err, SolverError::DictionaryUnavailable { .. }));
        assert_eq!(err.code(), "S002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("/no/such/dictionary.txt"));
        assert!(detailed.contains("--dictionary"));
    }

    #[test]
    fn test_solve_is_idempotent() {
        let words = ["xolubmaq", "qticy", "xolubmaq", "qyitc"];
        let config = SolveConfig::new(LETTERS, &words);
        let first = solve(&config).unwrap();
        let second = solve(&config).unwrap();
        assert_eq!(first.solutions, second.solutions);
        assert_eq!(first.status, second.status);
    }

    #[test]
    fn test_zero_time_budget_times_out() {
        let words = ["xolubmaq", "qticy"];
        let config = SolveConfig::new(LETTERS, &words).with_time_budget(Duration::ZERO);
        let result = solve(&config).unwrap();
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
    }

    #[test]
    fn test_error_codes_are_valid() {
        let errors = vec![
            SolverError::InvalidPuzzle(PuzzleError::DuplicateLetters { letter: 'A' }),
            SolverError::DictionaryUnavailable {
                source_name: "words.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
        ];
        for err in &errors {
            assert!(err.code().starts_with('S'));
            assert_eq!(err.code().len(), 4);
            assert!(!err.description().is_empty());
            assert!(err.details().len() > 20);
        }
    }

    #[test]
    fn test_invalid_puzzle_detailed_delegates() {
        let err = SolverError::from(PuzzleError::NonAlphabeticLetters { invalid_char: '3' });
        let detailed = err.display_detailed();
        assert!(detailed.starts_with("S001"));
        assert!(detailed.contains("caused by"));
        assert!(detailed.contains("P002"));
    }

    #[test]
    fn test_render_report_with_solutions() {
        let puzzle = PuzzleSpec::new(LETTERS).unwrap();
        let solutions = vec![SolutionPair { first: "XOLUBMAQ".into(), second: "QTICY".into() }];
        assert_eq!(
            render_report(&puzzle, &solutions),
            "Today's letters: XLBOCUIMQAYT\n\nFound 1 possible two-word solution(s):\n - XOLUBMAQ, QTICY\n"
        );
    }

    #[test]
    fn test_render_report_without_solutions() {
        let puzzle = PuzzleSpec::new(LETTERS).unwrap();
        assert_eq!(render_report(&puzzle, &[]), "Today's letters: XLBOCUIMQAYT\n\nNo solutions found.\n");
    }
}
