//! Error types for puzzle-letter validation, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P003) for documentation lookup:
//!
//! - P001: `InvalidLetterCount` (Puzzle does not have exactly 12 letters)
//! - P002: `NonAlphabeticLetters` (Puzzle contains a non-alphabetic character)
//! - P003: `DuplicateLetters` (Puzzle contains a repeated letter)
//!
//! Checks run in that order, and the first failing one is reported.
//!
//! # Examples
//!
//! ```
//! use letterboxed::errors::PuzzleError;
//! use letterboxed::puzzle::PuzzleSpec;
//!
//! match PuzzleSpec::new("AB") {
//!     Err(e) => {
//!         assert!(matches!(e, PuzzleError::InvalidLetterCount { count: 2 }));
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

/// Reasons a puzzle-letter string is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("The puzzle must contain exactly 12 letters (got {count})")]
    InvalidLetterCount { count: usize },

    #[error("Puzzle letters should only contain alphabetic characters (found '{invalid_char}')")]
    NonAlphabeticLetters { invalid_char: char },

    #[error("All puzzle letters must be unique ('{letter}' appears more than once)")]
    DuplicateLetters { letter: char },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidLetterCount { .. } => "P001",
            PuzzleError::NonAlphabeticLetters { .. } => "P002",
            PuzzleError::DuplicateLetters { .. } => "P003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::InvalidLetterCount { .. } => "Puzzle does not have exactly 12 letters",
            PuzzleError::NonAlphabeticLetters { .. } => "Puzzle contains a non-alphabetic character",
            PuzzleError::DuplicateLetters { .. } => "Puzzle contains a repeated letter",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::InvalidLetterCount { .. } => "A Letter Boxed puzzle has four sides of three letters each. The letter string is read in order, three letters per side, so it must be exactly 12 characters long.",
            PuzzleError::NonAlphabeticLetters { .. } => "Every position on the box holds a letter from A to Z (either case). Digits, punctuation, whitespace and accented or non-Latin letters cannot appear in the puzzle string.",
            PuzzleError::DuplicateLetters { .. } => "Each letter appears on the box exactly once. Letters are compared case-insensitively, so 'a' and 'A' count as the same letter.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InvalidLetterCount { .. } => Some("List the letters side by side, e.g. 'XLBOCUIMQAYT' for sides XLB, OCU, IMQ, AYT"),
            PuzzleError::NonAlphabeticLetters { .. } => Some("Remove separators such as '-' or spaces between sides"),
            PuzzleError::DuplicateLetters { .. } => Some("Check the puzzle for a mistyped letter; all 12 letters must be different"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
